//! The four statistics reports run over a filtered trip table.

pub mod duration;
pub mod frequency;
pub mod stations;
pub mod time;
pub mod users;

use crate::models::TripTable;
use crate::ui::messages::header_line;
use crate::utils::formatting::separator;
use std::io::{self, Write};
use std::time::Instant;

pub use duration::DurationReport;
pub use stations::StationReport;
pub use time::TimeReport;
pub use users::UserReport;

/// Printed by every report instead of statistics when the table is empty.
pub const NO_DATA: &str = "No data available for the selected filters.";

/// A text report over a trip table. Reports only read the table.
pub trait Report {
    fn title(&self) -> &'static str;

    fn render(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<()>;
}

/// Reports in the order they are shown.
pub fn all_reports() -> [&'static dyn Report; 4] {
    [&TimeReport, &StationReport, &DurationReport, &UserReport]
}

/// Run every report: title, body, optional timing line, separator.
pub fn run_reports(table: &TripTable, out: &mut dyn Write, show_timing: bool) -> io::Result<()> {
    for report in all_reports() {
        writeln!(out, "\n{}\n", header_line(report.title()))?;

        let started = Instant::now();
        report.render(table, out)?;

        if show_timing {
            writeln!(
                out,
                "\nThis took {:.6} seconds.",
                started.elapsed().as_secs_f64()
            )?;
        }
        writeln!(out, "{}", separator())?;
    }
    out.flush()
}
