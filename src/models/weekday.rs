//! Helpers around `chrono::Weekday`: full names, Monday-first ordering, serde.

use chrono::Weekday;
use serde::Serializer;

/// Monday-first, the order used for tie-breaks and listings.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive match against the full weekday name.
pub fn parse_full_name(s: &str) -> Option<Weekday> {
    let wanted = s.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|d| full_name(*d).eq_ignore_ascii_case(wanted))
}

pub fn from_monday_index(idx: u32) -> Option<Weekday> {
    WEEKDAYS.get(idx as usize).copied()
}

pub fn serialize_full_name<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(full_name(*day))
}
