use crate::domain::ports::Clock;
use chrono::{DateTime, FixedOffset, Local};

/// Wall clock in the server's local time zone.
///
/// The storefront's zone is whatever `TZ` the process runs under.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
