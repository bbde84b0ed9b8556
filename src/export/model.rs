use crate::models::TripRecord;
use crate::models::weekday::full_name;
use serde::Serialize;

/// Riga “piatta” di un viaggio, con i campi derivati già formattati.
#[derive(Serialize, Clone, Debug)]
pub struct TripExport {
    pub start_time: String,
    pub end_time: String,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: String,
    pub day_of_week: String,
    pub hour: u32,
}

impl TripExport {
    pub fn from_record(r: &TripRecord) -> Self {
        Self {
            start_time: r.start_time_str(),
            end_time: r.end_time.clone(),
            trip_duration: r.trip_duration,
            start_station: r.start_station.clone(),
            end_station: r.end_station.clone(),
            user_type: r.user_type.clone(),
            gender: r.gender.clone(),
            birth_year: r.birth_year,
            month: r.month.to_string(),
            day_of_week: full_name(r.day_of_week).to_string(),
            hour: r.hour,
        }
    }
}
