//! Raw SQL operations for the weekly_report_cache table.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use rapport_core::errors::RapportResult;
use rapport_core::models::{WeekWindow, WeeklyCounters, WeeklyReportRow};

use super::{format_ts, parse_date, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "weekly_report_cache";

struct RawReport {
    id: String,
    subject_id: String,
    window_start: String,
    window_end: String,
    counters: [i64; 5],
    acceptance_rate: Option<f64>,
    reply_rate: Option<f64>,
    followup_rate: Option<f64>,
    created_at: String,
    updated_at: String,
}

impl RawReport {
    fn into_row(self) -> RapportResult<WeeklyReportRow> {
        let [shown, accepted, sent, replied, followups] = self.counters.map(|c| c.max(0) as u64);
        Ok(WeeklyReportRow {
            window_start: parse_date(TABLE, &self.window_start)?,
            window_end: parse_date(TABLE, &self.window_end)?,
            created_at: parse_ts(TABLE, &self.created_at)?,
            updated_at: parse_ts(TABLE, &self.updated_at)?,
            id: self.id,
            subject_id: self.subject_id,
            counters: WeeklyCounters {
                total_suggestions: shown,
                total_accepted: accepted,
                total_sent: sent,
                total_replied: replied,
                total_followups_completed: followups,
            },
            acceptance_rate: self.acceptance_rate,
            reply_rate: self.reply_rate,
            followup_rate: self.followup_rate,
        })
    }
}

/// Get the cached row for an exact window.
pub fn get_report(
    conn: &Connection,
    subject_id: &str,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> RapportResult<Option<WeeklyReportRow>> {
    let raw = conn
        .query_row(
            "SELECT id, subject_id, window_start, window_end,
                    total_suggestions, total_accepted, total_sent, total_replied,
                    total_followups_completed, acceptance_rate, reply_rate, followup_rate,
                    created_at, updated_at
             FROM weekly_report_cache
             WHERE subject_id = ?1 AND window_start = ?2 AND window_end = ?3",
            params![subject_id, window_start.to_string(), window_end.to_string()],
            |row| {
                Ok(RawReport {
                    id: row.get(0)?,
                    subject_id: row.get(1)?,
                    window_start: row.get(2)?,
                    window_end: row.get(3)?,
                    counters: [row.get(4)?, row.get(5)?, row.get(6)?, row.get(7)?, row.get(8)?],
                    acceptance_rate: row.get(9)?,
                    reply_rate: row.get(10)?,
                    followup_rate: row.get(11)?,
                    created_at: row.get(12)?,
                    updated_at: row.get(13)?,
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawReport::into_row).transpose()
}

/// Insert the row for the window or update counters and rates in place.
/// `id` and `created_at` of an existing row are kept.
pub fn upsert_report(
    conn: &Connection,
    subject_id: &str,
    window: &WeekWindow,
    counters: &WeeklyCounters,
    now: DateTime<Utc>,
) -> RapportResult<WeeklyReportRow> {
    let now_text = format_ts(now);
    conn.execute(
        "INSERT INTO weekly_report_cache
            (id, subject_id, window_start, window_end,
             total_suggestions, total_accepted, total_sent, total_replied,
             total_followups_completed, acceptance_rate, reply_rate, followup_rate,
             created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)
         ON CONFLICT (subject_id, window_start, window_end) DO UPDATE SET
            total_suggestions = excluded.total_suggestions,
            total_accepted = excluded.total_accepted,
            total_sent = excluded.total_sent,
            total_replied = excluded.total_replied,
            total_followups_completed = excluded.total_followups_completed,
            acceptance_rate = excluded.acceptance_rate,
            reply_rate = excluded.reply_rate,
            followup_rate = excluded.followup_rate,
            updated_at = excluded.updated_at",
        params![
            uuid::Uuid::new_v4().to_string(),
            subject_id,
            window.start_date().to_string(),
            window.end_date().to_string(),
            counters.total_suggestions as i64,
            counters.total_accepted as i64,
            counters.total_sent as i64,
            counters.total_replied as i64,
            counters.total_followups_completed as i64,
            counters.completion_rate(),
            counters.reply_rate(),
            counters.followup_rate(),
            now_text,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    get_report(conn, subject_id, window.start_date(), window.end_date())?.ok_or_else(|| {
        super::corrupt(TABLE, format!("row for {subject_id} vanished after upsert"))
    })
}
