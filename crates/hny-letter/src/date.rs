//! Display dates stamped into letters

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Source of the current moment
///
/// The encoder stamps dates through this trait so tests can pin time.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format a moment as `"<year>년 <month>월 <day>일"`
///
/// The calendar day is taken in the moment's own timezone. Month and day
/// are not zero-padded.
#[must_use]
pub fn display_date<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    format!("{:04}년 {}월 {}일", moment.year(), moment.month(), moment.day())
}
