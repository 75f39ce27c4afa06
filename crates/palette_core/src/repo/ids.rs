//! Identity assignment for new records.

use chrono::Utc;

/// Monotonic integer ids for one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Starts after the largest id already in use (or at 1 when empty).
    pub fn after_max(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            last: ids.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// Timestamp-derived project ids: epoch milliseconds, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIdClock {
    last_millis: i64,
}

impl ProjectIdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current epoch millis, bumped past the previous token when
    /// the clock has not advanced.
    pub fn next_token(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_millis = now.max(self.last_millis + 1);
        self.last_millis.to_string()
    }
}
