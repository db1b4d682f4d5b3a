use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::model::DeliveryRecord;
use super::schedule::ScheduleIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            _ => Err(anyhow::anyhow!(
                "Invalid week start '{}'. Valid values: sunday, monday",
                s
            )),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// Seven consecutive days starting at local midnight of `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> Self {
        let back = week_start.days_into_week(date);
        Self {
            start: date - Duration::days(back as i64),
        }
    }

    /// The window `offset` weeks away from the one containing `now`. The time
    /// of day of `now` never matters.
    pub fn at_offset(now: NaiveDateTime, offset: i64, week_start: WeekStart) -> Self {
        let anchor = (now + Duration::weeks(offset)).date();
        Self::containing(anchor, week_start)
    }

    /// First day after the window.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(7)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn end_instant(&self) -> NaiveDateTime {
        self.end().and_time(NaiveTime::MIN)
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start_instant() <= instant && instant < self.end_instant()
    }
}

/// Meals of a single calendar day, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub meals: Vec<&'a DeliveryRecord>,
}

/// The meals of one week grouped by day. Days without meals have no bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedWeek<'a> {
    pub window: WeekWindow,
    pub days: Vec<DayBucket<'a>>,
}

impl<'a> GroupedWeek<'a> {
    pub fn build(index: &'a ScheduleIndex, window: WeekWindow) -> Self {
        let mut days: Vec<DayBucket<'a>> = Vec::new();
        for meal in index.records_in_range(window.start_instant(), window.end_instant()) {
            debug_assert!(window.contains(meal.delivery));
            let date = meal.delivery.date();
            match days.last_mut() {
                Some(bucket) if bucket.date == date => bucket.meals.push(meal),
                _ => days.push(DayBucket {
                    date,
                    meals: vec![meal],
                }),
            }
        }
        Self { window, days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn meal_count(&self) -> usize {
        self.meals().count()
    }

    pub fn first_shown(&self) -> Option<&'a DeliveryRecord> {
        self.days.first().and_then(|d| d.meals.first().copied())
    }

    pub fn last_shown(&self) -> Option<&'a DeliveryRecord> {
        self.days.last().and_then(|d| d.meals.last().copied())
    }

    pub fn meals(&self) -> impl Iterator<Item = &'a DeliveryRecord> + '_ {
        self.days.iter().flat_map(|d| d.meals.iter().copied())
    }
}

/// Whether paging one more week in either direction can reveal meals that are
/// not already on screen.
///
/// A direction is closed only when the meal shown at that edge of the week is
/// the very first (or last) meal of the whole schedule. An empty week never
/// closes a direction, so empty stretches stay browsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigability {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl Navigability {
    pub fn of(index: &ScheduleIndex, week: &GroupedWeek<'_>) -> Self {
        let can_go_prev = match (week.first_shown(), index.first_record()) {
            (Some(shown), Some(first)) => shown.id != first.id,
            _ => true,
        };
        let can_go_next = match (week.last_shown(), index.last_record()) {
            (Some(shown), Some(last)) => shown.id != last.id,
            _ => true,
        };
        Self {
            can_go_prev,
            can_go_next,
        }
    }
}
