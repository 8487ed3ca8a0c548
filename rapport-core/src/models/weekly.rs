use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{RapportError, RapportResult};

use super::{ActionLogEntry, ActionType};

/// A Monday-start reporting window, inclusive on both ends, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekWindow {
    /// Window ending with the week that contains `now` and spanning
    /// `ceil(window_days / 7)` whole weeks.
    pub fn covering(now: DateTime<Utc>, window_days: u32) -> RapportResult<Self> {
        if window_days == 0 {
            return Err(RapportError::InvalidWindow {
                reason: "window_days must be at least 1".to_string(),
            });
        }
        let weeks = i64::from(window_days.div_ceil(7));
        let today = now.date_naive();
        let this_monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let first_monday = this_monday - Duration::weeks(weeks - 1);
        let last_sunday = this_monday + Duration::days(6);
        Ok(Self::from_dates(first_monday, last_sunday))
    }

    /// Window from the first instant of `start_date` to the last millisecond of `end_date`.
    pub fn from_dates(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let start = Utc.from_utc_datetime(&start_date.and_time(NaiveTime::MIN));
        let end = Utc.from_utc_datetime(&(end_date + Duration::days(1)).and_time(NaiveTime::MIN))
            - Duration::milliseconds(1);
        Self { start, end }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Raw funnel counters for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCounters {
    pub total_suggestions: u64,
    pub total_accepted: u64,
    pub total_sent: u64,
    pub total_replied: u64,
    pub total_followups_completed: u64,
}

impl WeeklyCounters {
    pub fn from_actions<'a>(entries: impl IntoIterator<Item = &'a ActionLogEntry>) -> Self {
        let mut counters = Self::default();
        for entry in entries {
            match entry.action_type {
                ActionType::SuggestionShown => counters.total_suggestions += 1,
                ActionType::SuggestionAccepted => counters.total_accepted += 1,
                ActionType::MessageSent => counters.total_sent += 1,
                ActionType::MessageReplied => counters.total_replied += 1,
                ActionType::FollowupCompleted => counters.total_followups_completed += 1,
            }
        }
        counters
    }

    pub fn completion_rate(&self) -> f64 {
        ratio(self.total_accepted, self.total_suggestions)
    }

    pub fn reply_rate(&self) -> f64 {
        ratio(self.total_replied, self.total_sent)
    }

    pub fn followup_rate(&self) -> f64 {
        ratio(self.total_followups_completed, self.total_accepted)
    }

    pub fn to_metrics(self) -> WeeklyMetrics {
        WeeklyMetrics {
            completion_rate: self.completion_rate(),
            reply_rate: self.reply_rate(),
            followup_rate: self.followup_rate(),
            counters: self,
        }
    }
}

/// 0 when the denominator is 0.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Public weekly engagement metrics. Rates are ratios in [0, 1] and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMetrics {
    pub completion_rate: f64,
    pub reply_rate: f64,
    pub followup_rate: f64,
    #[serde(flatten)]
    pub counters: WeeklyCounters,
}

/// Persisted weekly report cache row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportRow {
    pub id: String,
    pub subject_id: String,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub counters: WeeklyCounters,
    pub acceptance_rate: Option<f64>,
    pub reply_rate: Option<f64>,
    pub followup_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyReportRow {
    /// Fresh while `now - updated_at <= ttl_ms`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl_ms: i64) -> bool {
        (now - self.updated_at).num_milliseconds() <= ttl_ms
    }

    /// Map cached counters to the public shape. Missing rates read as 0.
    pub fn to_metrics(&self) -> WeeklyMetrics {
        WeeklyMetrics {
            completion_rate: finite_or_zero(self.acceptance_rate),
            reply_rate: finite_or_zero(self.reply_rate),
            followup_rate: finite_or_zero(self.followup_rate),
            counters: self.counters,
        }
    }
}

fn finite_or_zero(rate: Option<f64>) -> f64 {
    rate.filter(|r| r.is_finite()).unwrap_or(0.0)
}
