use super::month::Month;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bike rental, with the time fields derived from its start timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: String,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: Month,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl TripRecord {
    /// Build a record and derive `month`, `day_of_week` and `hour`.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: impl Into<String>,
        trip_duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: Option<String>,
    ) -> Self {
        let month = Month::from_ordinal(start_time.month()).unwrap_or(Month::January);
        Self {
            start_time,
            end_time: end_time.into(),
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type,
            gender: None,
            birth_year: None,
            month,
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, year: Option<i32>) -> Self {
        self.birth_year = year;
        self
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
