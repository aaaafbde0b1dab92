use std::time::Duration;

use chrono::NaiveDateTime;

/// How often the host should re-render the counter.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Whole-unit breakdown of time together, floor semantics throughout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ElapsedBreakdown {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Counts up from the relationship start instant.
#[derive(Clone, Copy, Debug)]
pub struct RelationshipClock {
    start: NaiveDateTime,
}

impl RelationshipClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { start }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Breakdown at `now`; a clock read before the start clamps to zero
    /// rather than counting backwards.
    pub fn elapsed_at(&self, now: NaiveDateTime) -> ElapsedBreakdown {
        let total = (now - self.start).num_seconds().max(0) as u64;
        ElapsedBreakdown {
            days: total / 86_400,
            hours: ((total % 86_400) / 3_600) as u32,
            minutes: ((total % 3_600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }
}
