// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use newsroom_core::application::ports::time::Clock;

/// Starts at the fixed test timestamp and advances one second per call,
/// so creation order is visible in `created_at`.
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(crate::support::mocks::time::fixed_now()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current = now + Duration::seconds(1);
        now
    }
}
