use super::record::LogStreamRecord;

pub const MS_PER_DAY: i64 = 24 * 3600 * 1000;
/// only delete logs older than one week
pub const DEFAULT_MAX_AGE_MS: i64 = 7 * MS_PER_DAY;

/// Decides which streams are safe to delete: empty, and idle past the cutoff.
/// `now_ms` is captured once per run so every record is judged against the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityFilter {
    cutoff_ms: i64,
}

impl EligibilityFilter {
    pub fn new(now_ms: i64, max_age_ms: i64) -> Self {
        Self {
            cutoff_ms: now_ms.saturating_sub(max_age_ms),
        }
    }

    pub fn with_days(now_ms: i64, days: u32) -> Self {
        Self::new(now_ms, i64::from(days) * MS_PER_DAY)
    }

    pub fn cutoff_ms(&self) -> i64 {
        self.cutoff_ms
    }

    pub fn is_eligible(&self, stream: &LogStreamRecord) -> bool {
        if stream.stored_bytes > 0 {
            return false;
        }
        stream.effective_timestamp() < self.cutoff_ms
    }
}
