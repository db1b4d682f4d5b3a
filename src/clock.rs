use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies "now" as local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant, for `--today`.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Accepts `YYYY-MM-DD` (taken as midnight) or a full `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_today(s: &str) -> Result<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    s.parse::<NaiveDateTime>()
        .with_context(|| format!("Invalid date '{s}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"))
}
