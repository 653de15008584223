//! # Slot Availability
//!
//! Computes the times still open for booking a service on a given day.
//! Every service offers the same fixed slate of half-hour slots; a slot is
//! bookable unless it has already passed (when the requested day is the
//! current day) or an existing booking occupies the exact same time of day.
//!
//! The current instant is always passed in by the caller rather than read
//! from the system clock, so the computation is deterministic and the same
//! inputs always produce the same output.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};

/// First bookable time of the day.
pub const OPENING_MINUTE: u32 = 8 * 60;
/// Last bookable time of the day.
pub const CLOSING_MINUTE: u32 = 18 * 60;
/// Gap between consecutive candidate slots.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Returns the full catalog of candidate slots: every half hour from 08:00
/// through 18:00 inclusive, in ascending order.
pub fn slot_catalog() -> Vec<NaiveTime> {
    (OPENING_MINUTE..=CLOSING_MINUTE)
        .step_by(SLOT_INTERVAL_MINUTES as usize)
        .filter_map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

/// Filters `catalog` down to the slots still bookable on `target_day`.
///
/// A slot is dropped when:
///
/// - `target_day` is the calendar day of `now` and the slot's time on that
///   day is strictly before `now` (a same-day slot that has already passed), or
/// - some instant in `booked` falls on the same hour and minute (seconds are
///   ignored; a booking blocks exactly one slot, there is no duration
///   overlap reasoning).
///
/// Survivors keep their catalog order. For a day other than today no slot is
/// ever excluded for being in the past; range-restricting the day itself is
/// the caller's concern.
pub fn available_slots(
    catalog: &[NaiveTime],
    target_day: NaiveDate,
    booked: &[DateTime<Utc>],
    now: DateTime<Utc>,
) -> Vec<NaiveTime> {
    let today = now.date_naive();

    catalog
        .iter()
        .copied()
        .filter(|slot| {
            if target_day == today && target_day.and_time(*slot) < now.naive_utc() {
                return false;
            }
            !booked
                .iter()
                .any(|taken| taken.hour() == slot.hour() && taken.minute() == slot.minute())
        })
        .collect()
}
