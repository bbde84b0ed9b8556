//! Total and mean trip duration.

use super::{NO_DATA, Report};
use crate::models::TripTable;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    pub fn mean_minutes(&self) -> f64 {
        self.mean_seconds / 60.0
    }
}

/// Sum and mean of durations; `None` on an empty table so nothing divides by zero.
pub fn compute(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let total_seconds: f64 = table.iter().map(|r| r.trip_duration).sum();
    Some(DurationStats {
        trips: table.len(),
        total_seconds,
        mean_seconds: total_seconds / table.len() as f64,
    })
}

pub struct DurationReport;

impl Report for DurationReport {
    fn title(&self) -> &'static str {
        "Calculating Trip Duration..."
    }

    fn render(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<()> {
        let Some(stats) = compute(table) else {
            return writeln!(out, "{NO_DATA}");
        };

        writeln!(out, "Total travel time:        {:7.2} hours.", stats.total_hours())?;
        writeln!(
            out,
            "Average trip travel time: {:7.2} minutes.",
            stats.mean_minutes()
        )
    }
}
