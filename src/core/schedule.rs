//! Visit scheduling - which days and hours can still take an estimate visit.
//!
//! Visits are offered on weekdays in the 30 days after today. Each day has a
//! fixed set of slots; a couple of them are already booked, alternating by
//! day of month.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How far ahead visits can be booked
pub const BOOKING_WINDOW_DAYS: u64 = 30;

/// Every slot a visit day offers
pub const TIME_SLOTS: [&str; 8] = [
    "08:00", "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00",
];

const BOOKED_EVEN_DAYS: [&str; 2] = ["09:00", "15:00"];
const BOOKED_ODD_DAYS: [&str; 2] = ["10:00", "16:00"];

/// Weekdays from tomorrow through [`BOOKING_WINDOW_DAYS`] days after `today`.
#[must_use]
pub fn available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=BOOKING_WINDOW_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Slots still open on `date`.
#[must_use]
pub fn available_time_slots(date: NaiveDate) -> Vec<&'static str> {
    let booked = if date.day() % 2 == 0 {
        BOOKED_EVEN_DAYS
    } else {
        BOOKED_ODD_DAYS
    };
    TIME_SLOTS
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}
