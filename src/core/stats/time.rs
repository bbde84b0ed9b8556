//! Most frequent times of travel.

use super::{NO_DATA, Report, frequency};
use crate::models::weekday::{self, serialize_full_name};
use crate::models::{Month, TripTable};
use chrono::Weekday;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: Month,
    pub month_trips: usize,
    #[serde(serialize_with = "serialize_full_name")]
    pub day_of_week: Weekday,
    pub day_trips: usize,
    pub hour: u32,
    pub hour_trips: usize,
}

/// Modes of month, weekday and hour; `None` on an empty table.
/// Weekday ties go to the earliest day counting from Monday.
pub fn compute(table: &TripTable) -> Option<TimeStats> {
    let (month, month_trips) = frequency::mode(table.iter().map(|r| r.month))?;
    let (day_idx, day_trips) =
        frequency::mode(table.iter().map(|r| r.day_of_week.num_days_from_monday()))?;
    let (hour, hour_trips) = frequency::mode(table.iter().map(|r| r.hour))?;

    Some(TimeStats {
        month,
        month_trips,
        day_of_week: weekday::from_monday_index(day_idx)?,
        day_trips,
        hour,
        hour_trips,
    })
}

pub struct TimeReport;

impl Report for TimeReport {
    fn title(&self) -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }

    fn render(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<()> {
        let Some(stats) = compute(table) else {
            return writeln!(out, "{NO_DATA}");
        };

        writeln!(
            out,
            "Most common month:       {} ({} trips).",
            stats.month, stats.month_trips
        )?;
        writeln!(
            out,
            "Most common day of week: {} ({} trips).",
            weekday::full_name(stats.day_of_week),
            stats.day_trips
        )?;
        writeln!(
            out,
            "Most common start hour:  {} ({} trips).",
            stats.hour, stats.hour_trips
        )
    }
}
