//! Time provider abstraction for testable run timestamps

use chrono::{DateTime, Utc};
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Timestamp layout used in run metadata
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Abstraction over wall-clock time
pub trait TimeProvider: Send + Sync {
    /// Current wall-clock time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Production time provider using the system clock
#[derive(Debug, Default, Clone)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format a UTC timestamp the way run metadata records it
pub fn utc_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Mock time provider for deterministic testing
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current: Arc<Mutex<DateTime<Utc>>>,
}

#[cfg(test)]
impl MockTimeProvider {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: chrono::Duration) {
        let mut current = self.current.lock().unwrap();
        *current += duration;
    }
}

#[cfg(test)]
impl TimeProvider for MockTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}
