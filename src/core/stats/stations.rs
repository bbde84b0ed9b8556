//! Most popular stations and trip.

use super::{NO_DATA, Report, frequency};
use crate::models::TripTable;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationCount {
    pub station: String,
    pub trips: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCount {
    pub start_station: String,
    pub end_station: String,
    pub trips: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start: StationCount,
    pub end: StationCount,
    pub route: RouteCount,
}

/// Station names compare exactly (case-sensitive, untrimmed).
pub fn compute(table: &TripTable) -> Option<StationStats> {
    let (start, start_trips) = frequency::mode(table.iter().map(|r| r.start_station.as_str()))?;
    let (end, end_trips) = frequency::mode(table.iter().map(|r| r.end_station.as_str()))?;
    let ((route_start, route_end), route_trips) = frequency::mode(
        table
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )?;

    Some(StationStats {
        start: StationCount {
            station: start.to_string(),
            trips: start_trips,
        },
        end: StationCount {
            station: end.to_string(),
            trips: end_trips,
        },
        route: RouteCount {
            start_station: route_start.to_string(),
            end_station: route_end.to_string(),
            trips: route_trips,
        },
    })
}

pub struct StationReport;

impl Report for StationReport {
    fn title(&self) -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn render(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<()> {
        let Some(stats) = compute(table) else {
            return writeln!(out, "{NO_DATA}");
        };

        writeln!(
            out,
            "Most commonly used Start Station: {}, with {} starts.",
            stats.start.station, stats.start.trips
        )?;
        writeln!(
            out,
            "Most commonly used End Station: {}, with {} ends.",
            stats.end.station, stats.end.trips
        )?;
        writeln!(
            out,
            "Most commonly used Start - End Station Combination: {} -> {}, with {} trips.",
            stats.route.start_station, stats.route.end_station, stats.route.trips
        )
    }
}
