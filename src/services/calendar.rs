//! Delivery calendar generation.
//!
//! A sub-order's schedule is produced once at order-creation time by
//! walking the calendar day-by-day from the start date. Days outside the
//! sub-order's weekday pattern are emitted as inert `Holiday` slots; every
//! other day becomes a `Pending` delivery. Both kinds count toward the
//! fixed slot budget, only delivery days count toward the active total.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::errors::ServiceError;
use crate::models::{delivery_offset, DeliveryStatus, WeekdayPattern};

/// A slot produced by the generator, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSlot {
    pub date: String,
    pub status: DeliveryStatus,
}

/// Formats a calendar date the way every schedule stores it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

/// Projects a timestamp onto the delivery region's calendar. A start
/// instant shortly before midnight UTC can already be the next day at
/// UTC+05:30; skipping this step shifts whole schedules by a day.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&delivery_offset()).date_naive()
}

/// Generates the full schedule for one sub-order.
///
/// Returns the slots in ascending date order together with the number of
/// active (non-holiday) delivery days among them. A non-positive
/// `repeat_multiplier` yields an empty schedule.
pub fn generate(
    start: NaiveDate,
    repeat_multiplier: i32,
    pattern: WeekdayPattern,
) -> (Vec<GeneratedSlot>, u32) {
    if repeat_multiplier <= 0 {
        return (Vec::new(), 0);
    }

    let target = pattern.slots_per_multiplier() as usize * repeat_multiplier as usize;
    let mut slots = Vec::with_capacity(target);
    let mut active_days = 0u32;
    let mut date = start;

    while slots.len() < target {
        let status = if pattern.is_holiday(date.weekday()) {
            DeliveryStatus::Holiday
        } else {
            active_days += 1;
            DeliveryStatus::Pending
        };
        slots.push(GeneratedSlot {
            date: format_date(date),
            status,
        });
        date += Duration::days(1);
    }

    (slots, active_days)
}

/// First pattern-valid delivery day strictly after `after`. Both patterns
/// deliver at least five days a week, so the walk terminates within seven
/// steps.
pub fn next_delivery_day(after: NaiveDate, pattern: WeekdayPattern) -> NaiveDate {
    let mut date = after + Duration::days(1);
    while pattern.is_holiday(date.weekday()) {
        date += Duration::days(1);
    }
    date
}
