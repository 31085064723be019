//! Delivery scheduling rules.
//!
//! Orders may be placed up to 6 days ahead, and same-day orders need a
//! 2-hour preparation buffer. Both rules are fixed business policy, not
//! configuration. Every function takes `now` as a parameter so the rules
//! can be exercised at any simulated clock.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// How many days ahead of today an order may be scheduled (inclusive).
pub const MAX_ADVANCE_DAYS: i64 = 6;

/// Required preparation buffer for same-day delivery.
pub const SAME_DAY_BUFFER_HOURS: i64 = 2;

/// Parse a `HH:MM` delivery time string.
pub fn parse_delivery_time(time: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
        CoreError::Validation(format!(
            "Invalid delivery time '{time}'. Expected HH:MM (24-hour)"
        ))
    })
}

/// Validate a delivery date/time against the ordering window.
///
/// - The date must fall within `[today, today + 6 days]`, where "today" is
///   the date of `now`.
/// - When the date is today, the time must be at least 2 hours after `now`.
pub fn validate_delivery_schedule(
    delivery_date: NaiveDate,
    delivery_time: &str,
    now: Timestamp,
) -> Result<(), CoreError> {
    let time = parse_delivery_time(delivery_time)?;
    let today = now.date_naive();
    let days_ahead = (delivery_date - today).num_days();

    if days_ahead < 0 || days_ahead > MAX_ADVANCE_DAYS {
        return Err(CoreError::OutOfWindow(format!(
            "Delivery on {delivery_date} is outside the ordering window \
             (today through {} days ahead)",
            MAX_ADVANCE_DAYS
        )));
    }

    if days_ahead == 0 {
        let earliest = now + Duration::hours(SAME_DAY_BUFFER_HOURS);
        let requested = delivery_date.and_time(time).and_utc();
        if requested < earliest {
            return Err(CoreError::InsufficientLeadTime(format!(
                "Same-day orders need at least {SAME_DAY_BUFFER_HOURS} hours of \
                 preparation time; earliest delivery is {}",
                earliest.format("%H:%M")
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    /// 2026-03-10 10:00 UTC.
    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn future_date_inside_window_accepted() {
        assert!(validate_delivery_schedule(date(13), "09:00", now()).is_ok());
    }

    #[test]
    fn last_day_of_window_accepted() {
        assert!(validate_delivery_schedule(date(16), "18:00", now()).is_ok());
    }

    #[test]
    fn seven_days_ahead_rejected() {
        let err = validate_delivery_schedule(date(17), "12:00", now()).unwrap_err();
        assert_matches!(err, CoreError::OutOfWindow(_));
    }

    #[test]
    fn past_date_rejected() {
        let err = validate_delivery_schedule(date(9), "12:00", now()).unwrap_err();
        assert_matches!(err, CoreError::OutOfWindow(_));
    }

    #[test]
    fn same_day_inside_buffer_rejected() {
        // Now is 10:00; 11:00 is inside the 2-hour buffer.
        let err = validate_delivery_schedule(date(10), "11:00", now()).unwrap_err();
        assert_matches!(err, CoreError::InsufficientLeadTime(_));
    }

    #[test]
    fn same_day_at_buffer_boundary_accepted() {
        assert!(validate_delivery_schedule(date(10), "12:00", now()).is_ok());
    }

    #[test]
    fn same_day_after_buffer_accepted() {
        assert!(validate_delivery_schedule(date(10), "15:30", now()).is_ok());
    }

    #[test]
    fn malformed_time_rejected() {
        let err = validate_delivery_schedule(date(12), "noonish", now()).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(validate_delivery_schedule(date(12), "25:00", now()).is_err());
    }
}
