use crate::core::stats::{
    duration::{self, DurationStats},
    stations::{self, StationStats},
    time::{self, TimeStats},
    users::{self, UserStats},
};
use crate::models::{City, FilterSelection, TripTable};
use serde::Serialize;

/// Everything the four reports compute, in one serializable value.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub city: City,
    pub month: String,
    pub day: String,
    pub trips: usize,
    pub skipped_rows: usize,
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub durations: Option<DurationStats>,
    pub users: Option<UserStats>,
}

pub struct Core;

impl Core {
    pub fn build_summary(
        city: City,
        selection: &FilterSelection,
        table: &TripTable,
        skipped_rows: usize,
    ) -> Summary {
        Summary {
            city,
            month: selection.month.to_string(),
            day: selection.day.to_string(),
            trips: table.len(),
            skipped_rows,
            time: time::compute(table),
            stations: stations::compute(table),
            durations: duration::compute(table),
            users: users::compute(table),
        }
    }
}
