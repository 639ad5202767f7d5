//! Timestamps shown in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Displays a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system
/// timezone. Plans are stored in UTC and only converted for display.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Same format in an explicit timezone.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%Y-%m-%d %H:%M:%S %Z").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_zone(TimeZone::system()))
    }
}
