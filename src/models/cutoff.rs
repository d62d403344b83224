use chrono::{DateTime, NaiveTime, Utc};
use std::fmt;

use crate::errors::ServiceError;
use crate::models::delivery_offset;

/// Time-of-day gate for same-day schedule changes, configured as a
/// `H:MM AM/PM` string on the operational settings row. Pause requests
/// arriving after this local wall-clock time are rejected for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffTime(NaiveTime);

impl CutoffTime {
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        NaiveTime::parse_from_str(raw.trim(), "%I:%M %p")
            .map(Self)
            .map_err(|_| {
                ServiceError::InvalidInput(format!(
                    "Invalid cutoff time '{}', expected H:MM AM/PM",
                    raw
                ))
            })
    }

    /// Whether `now` falls after the cutoff in the delivery region's fixed
    /// offset. Host timezone never participates in this comparison.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        now.with_timezone(&delivery_offset()).time() > self.0
    }
}

impl fmt::Display for CutoffTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_single_digit_hours() {
        let cutoff = CutoffTime::parse("7:30 AM").unwrap();
        assert_eq!(cutoff.to_string(), "7:30 AM");
        assert!(CutoffTime::parse("11:00 PM").is_ok());
    }

    #[test]
    fn rejects_24_hour_format() {
        assert!(CutoffTime::parse("19:30").is_err());
        assert!(CutoffTime::parse("").is_err());
    }

    #[test]
    fn comparison_uses_delivery_offset_not_utc() {
        // 14:00 UTC is 19:30 at UTC+05:30, so a 6:00 PM cutoff has passed
        // even though it is only early afternoon in UTC.
        let cutoff = CutoffTime::parse("6:00 PM").unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap();
        assert!(cutoff.is_past(now));

        // 11:00 UTC is 16:30 local, still inside the window.
        let earlier = Utc.with_ymd_and_hms(2024, 3, 5, 11, 0, 0).unwrap();
        assert!(!cutoff.is_past(earlier));
    }
}
