//! WeeklyReportCache: read-through cache over the action log.
//!
//! A cached row is served while `now - updated_at <= ttl`. Anything else is
//! recomputed from the log and written back in place, so each subject and
//! window keeps a single row for its whole life.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use rapport_core::config::MetricsCacheConfig;
use rapport_core::errors::RapportResult;
use rapport_core::models::{WeekWindow, WeeklyCounters, WeeklyMetrics};
use rapport_core::traits::{IActionLog, IWeeklyReportStore};

pub struct WeeklyReportCache<S> {
    store: Arc<S>,
    config: MetricsCacheConfig,
}

impl<S> WeeklyReportCache<S>
where
    S: IWeeklyReportStore + IActionLog,
{
    pub fn new(store: Arc<S>, config: MetricsCacheConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &MetricsCacheConfig {
        &self.config
    }

    pub fn get_metrics(&self, subject_id: &str, window_days: u32) -> RapportResult<WeeklyMetrics> {
        self.get_metrics_at(subject_id, window_days, Utc::now())
    }

    /// Metrics for the window covering `now`, from cache when fresh.
    pub fn get_metrics_at(
        &self,
        subject_id: &str,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> RapportResult<WeeklyMetrics> {
        let window = WeekWindow::covering(now, window_days)?;

        if let Some(row) = self
            .store
            .find_report(subject_id, window.start_date(), window.end_date())?
        {
            if row.is_fresh_at(now, self.config.ttl_ms) {
                tracing::debug!(
                    event = "weekly_report_cache_hit",
                    subject_id,
                    window_start = %window.start_date(),
                    "serving cached weekly report"
                );
                return Ok(row.to_metrics());
            }
        }

        tracing::debug!(
            event = "weekly_report_cache_miss",
            subject_id,
            window_start = %window.start_date(),
            "recomputing weekly report"
        );
        self.recompute(subject_id, &window, now)
    }

    /// Metrics for the default window as of now, bypassing the cache.
    pub fn refresh_cache(&self, subject_id: &str) -> RapportResult<WeeklyMetrics> {
        self.refresh_cache_at(subject_id, Utc::now())
    }

    pub fn refresh_cache_at(&self, subject_id: &str, now: DateTime<Utc>) -> RapportResult<WeeklyMetrics> {
        let window = WeekWindow::covering(now, self.config.default_window_days)?;
        let metrics = self.recompute(subject_id, &window, now)?;
        tracing::info!(
            event = "weekly_report_refreshed",
            subject_id,
            window_start = %window.start_date(),
            "weekly report cache refreshed"
        );
        Ok(metrics)
    }

    fn recompute(&self, subject_id: &str, window: &WeekWindow, now: DateTime<Utc>) -> RapportResult<WeeklyMetrics> {
        let entries = self.store.actions_between(subject_id, window.start, window.end)?;
        let counters =
            WeeklyCounters::from_actions(entries.iter().filter(|e| window.contains(e.occurred_at)));
        self.store.upsert_report(subject_id, window, &counters, now)?;
        Ok(counters.to_metrics())
    }
}
