//! Dataset loader: CSV trip file → `TripTable`.
//!
//! Rows that cannot be turned into a trip (unparsable start time, empty
//! station, duration that is not a non-negative number, wrong field count)
//! are skipped and returned in `LoadResult::skipped`; the rest of the file
//! still loads. A birth year outside `BIRTH_YEARS` is dropped from its row,
//! the trip itself is kept.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{City, Schema, TripRecord, TripTable};
use crate::ui::messages::write_warning;
use crate::utils::date::parse_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::ops::RangeInclusive;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 6] = [
    COL_START_TIME,
    COL_END_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
    COL_USER_TYPE,
];

/// How many skipped rows are listed one by one before summarizing.
const MAX_LISTED_SKIPS: usize = 5;

/// Plausible years of birth; anything else is treated as a blank cell.
const BIRTH_YEARS: RangeInclusive<f64> = 1800.0..=2100.0;

#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// A row left out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line in the source, header included.
    pub line: u64,
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub table: TripTable,
    pub skipped: Vec<MalformedRecord>,
}

impl LoadResult {
    /// Write the skipped rows as console warnings.
    pub fn warn_skipped<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.skipped.is_empty() {
            return Ok(());
        }

        for rec in self.skipped.iter().take(MAX_LISTED_SKIPS) {
            write_warning(out, format!("Skipped malformed trip at {rec}"))?;
        }
        write_warning(
            out,
            format!(
                "{} malformed row(s) skipped, {} trips loaded.",
                self.skipped.len(),
                self.table.len()
            ),
        )
    }
}

/// Load the whole trip file configured for `city`.
///
/// Any I/O failure, at open time or while reading, is `DataUnavailable`.
pub fn load(city: City, cfg: &Config) -> AppResult<LoadResult> {
    let path = cfg.city_path(city);
    let unavailable = |source: io::Error| AppError::DataUnavailable {
        city: city.name().to_string(),
        path: path.clone(),
        source,
    };

    let file = File::open(&path).map_err(&unavailable)?;
    load_from_reader(file).map_err(|e| match e {
        AppError::Io(source) => unavailable(source),
        other => other,
    })
}

/// Load trips from any CSV source with a header row.
pub fn load_from_reader<R: Read>(reader: R) -> AppResult<LoadResult> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    // Header names are decoded lossily: a bad byte in a column we do not use
    // must not reject the file.
    let headers: StringRecord = rdr
        .byte_headers()
        .map_err(read_error)?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    for col in REQUIRED_COLUMNS {
        if !has_column(&headers, col) {
            return Err(AppError::MissingHeader(col.to_string()));
        }
    }

    let schema = Schema {
        gender: has_column(&headers, COL_GENDER),
        birth_year: has_column(&headers, COL_BIRTH_YEAR),
    };

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(read_error(e)),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                skipped.push(MalformedRecord {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        match parse_row(&row, &headers) {
            Ok(trip) => records.push(trip),
            Err(reason) => skipped.push(MalformedRecord { line, reason }),
        }
    }

    Ok(LoadResult {
        table: TripTable::new(schema, records),
        skipped,
    })
}

/// I/O failures surface as `AppError::Io`, everything else stays a CSV error.
fn read_error(e: csv::Error) -> AppError {
    if e.is_io_error() {
        match e.into_kind() {
            csv::ErrorKind::Io(source) => AppError::Io(source),
            kind => AppError::Io(io::Error::other(format!("{kind:?}"))),
        }
    } else {
        AppError::Csv(e)
    }
}

fn has_column(headers: &StringRecord, name: &str) -> bool {
    headers.iter().any(|h| h == name)
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<TripRecord, String> {
    let raw: RawTrip = row.deserialize(Some(headers)).map_err(|e| e.to_string())?;

    let start_time = parse_timestamp(&raw.start_time)
        .ok_or_else(|| format!("invalid start time '{}'", raw.start_time))?;

    let trip_duration = raw
        .trip_duration
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| format!("invalid trip duration '{}'", raw.trip_duration))?;

    let start_station = non_blank(raw.start_station).ok_or("missing start station")?;
    let end_station = non_blank(raw.end_station).ok_or("missing end station")?;

    let birth_year = non_blank(raw.birth_year)
        .and_then(|y| y.parse::<f64>().ok())
        .filter(|y| BIRTH_YEARS.contains(y))
        .map(|y| y as i32);

    Ok(TripRecord::new(
        start_time,
        raw.end_time.unwrap_or_default(),
        trip_duration,
        start_station,
        end_station,
        non_blank(raw.user_type),
    )
    .with_gender(non_blank(raw.gender))
    .with_birth_year(birth_year))
}

/// Empty or whitespace-only cells count as missing.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
