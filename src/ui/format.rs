use chrono::NaiveDate;

use crate::data::model::DeliveryRecord;
use crate::data::week::WeekWindow;

pub const PREV_ARROW: &str = "<     ";
pub const NEXT_ARROW: &str = "     >";
pub const CONTROLS_HINT: &str = "'left' and 'right' to toggle through weeks";
pub const EMPTY_WEEK: &str = "No meals scheduled this week.";

const TIME_WIDTH: usize = 10;
const MAX_RULE_WIDTH: usize = 60;

/// Short weekday name and full date, e.g. `("Mon", "Jan 01, 2024")`.
pub fn day_label(date: NaiveDate) -> (String, String) {
    (
        date.format("%a").to_string(),
        date.format("%b %d, %Y").to_string(),
    )
}

/// Delivery time right-aligned in a fixed column, e.g. `"   12:30pm"`.
pub fn meal_time(meal: &DeliveryRecord) -> String {
    let time = meal.delivery.format("%-I:%M%P").to_string();
    format!("{:>width$}", time, width = TIME_WIDTH)
}

pub fn week_range(window: &WeekWindow) -> String {
    format!(
        "{} – {}",
        window.start.format("%b %d"),
        window.last_day().format("%b %d, %Y")
    )
}

pub fn offset_label(week_offset: i64) -> String {
    match week_offset {
        0 => "this week".to_string(),
        1 => "next week".to_string(),
        -1 => "last week".to_string(),
        n if n > 0 => format!("in {n} weeks"),
        n => format!("{} weeks ago", -n),
    }
}

/// Rule segments to put left and right of a centered title of `title_len`
/// characters, padded by one space on each side.
pub fn divider_sides(title_len: usize, width: usize) -> (String, String) {
    let width = width.min(MAX_RULE_WIDTH);
    let remaining = width.saturating_sub(title_len + 2);
    let left = remaining / 2;
    let right = remaining - left;
    ("─".repeat(left.max(1)), "─".repeat(right.max(1)))
}
