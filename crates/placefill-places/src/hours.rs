//! Weekly opening-hours summarization.

use placefill_core::WeekendStatus;

use crate::types::{WeeklyHours, FRIDAY, MONDAY, SATURDAY, SUNDAY};

/// Weekday closing time and weekend category derived from [`WeeklyHours`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursSummary {
    /// `HH:MM` close time of the first weekday period that has one.
    pub weekday_close: Option<String>,
    pub weekend_status: Option<WeekendStatus>,
}

/// Reduces a weekly-hours record to a weekday closing time and a weekend
/// operation category.
///
/// Days Monday through Friday are scanned in order; within a day, periods
/// are scanned in the order given. The first period that opens on the day
/// and has a close time wins and the scan stops. Periods with no close
/// (24-hour operation) are skipped, so a place open around the clock on
/// weekdays reports no weekday close.
///
/// Absent hours, or hours with no periods, yield an empty summary.
#[must_use]
pub fn summarize_hours(hours: Option<&WeeklyHours>) -> HoursSummary {
    let Some(hours) = hours.filter(|h| !h.periods.is_empty()) else {
        return HoursSummary::default();
    };

    let weekday_close = (MONDAY..=FRIDAY).find_map(|day| {
        hours
            .periods
            .iter()
            .filter(|period| period.open.day == day)
            .find_map(|period| period.close.and_then(|close| close.time))
            .map(|time| time.to_string())
    });

    let saturday_open = hours.periods.iter().any(|p| p.open.day == SATURDAY);
    let sunday_open = hours.periods.iter().any(|p| p.open.day == SUNDAY);

    HoursSummary {
        weekday_close,
        weekend_status: Some(WeekendStatus::from_flags(saturday_open, sunday_open)),
    }
}
