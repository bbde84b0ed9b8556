// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::TripExport;

use crate::errors::AppResult;
use crate::models::TripTable;
use crate::ui::messages::{success, warning};
use crate::ui::prompt::Prompter;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use std::path::Path;

/// Messaggio finale comune a tutti i formati di export.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!("{label} export completed: {rows} trips → {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write the (filtered) table to `path`.
///
/// An existing file is only replaced with `force` or after confirmation
/// through `prompter`. An empty table writes nothing.
pub fn export_table<R: BufRead, W: Write>(
    table: &TripTable,
    format: ExportFormat,
    path: &Path,
    force: bool,
    prompter: &mut Prompter<R, W>,
) -> AppResult<bool> {
    if table.is_empty() {
        warning("No trips match the selected filters. Nothing to export.");
        return Ok(false);
    }

    fs_utils::ensure_writable(path, force, prompter)?;

    let rows: Vec<TripExport> = table.iter().map(TripExport::from_record).collect();
    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, path)?,
        ExportFormat::Json => json_csv::export_json(&rows, path)?,
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load_from_reader;
    use std::env;
    use std::fs;
    use std::io::Cursor;

    const DATA: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 10:00:00,2017-01-02 10:05:00,300,Canal St,Clark St,Subscriber,Female,1985
2017-01-03 11:00:00,2017-01-03 11:02:00,120,Clark St,Canal St,Customer,,
";

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn temp_out(name: &str, ext: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("{name}_rbikeshare_out.{ext}"));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn csv_export_has_header_and_rows() {
        let table = load_from_reader(DATA.as_bytes()).unwrap().table;
        let out = temp_out("unit_export_csv", "csv");

        assert!(export_table(&table, ExportFormat::Csv, &out, false, &mut prompter("")).unwrap());

        let content = fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some(
                "start_time,end_time,trip_duration,start_station,end_station,user_type,gender,birth_year,month,day_of_week,hour"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "2017-01-02 10:00:00,2017-01-02 10:05:00,300.0,Canal St,Clark St,Subscriber,Female,1985,January,Monday,10"
            )
        );
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn json_export_is_an_array_of_trips() {
        let table = load_from_reader(DATA.as_bytes()).unwrap().table;
        let out = temp_out("unit_export_json", "json");

        export_table(&table, ExportFormat::Json, &out, false, &mut prompter("")).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["day_of_week"], "Tuesday");
        assert!(arr[1]["gender"].is_null());
    }

    #[test]
    fn existing_file_needs_force_or_confirmation() {
        let table = load_from_reader(DATA.as_bytes()).unwrap().table;
        let out = temp_out("unit_export_existing", "csv");
        fs::write(&out, "keep me").unwrap();

        assert!(export_table(&table, ExportFormat::Csv, &out, false, &mut prompter("n\n")).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

        export_table(&table, ExportFormat::Csv, &out, false, &mut prompter("yes\n")).unwrap();
        assert!(fs::read_to_string(&out).unwrap().starts_with("start_time"));

        fs::write(&out, "keep me").unwrap();
        export_table(&table, ExportFormat::Csv, &out, true, &mut prompter("")).unwrap();
        assert!(fs::read_to_string(&out).unwrap().starts_with("start_time"));
    }

    #[test]
    fn empty_table_writes_nothing() {
        let out = temp_out("unit_export_empty", "csv");
        let written = export_table(
            &TripTable::default(),
            ExportFormat::Csv,
            &out,
            false,
            &mut prompter(""),
        )
        .unwrap();
        assert!(!written);
        assert!(!out.exists());
    }
}
