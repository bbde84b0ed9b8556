//! Raw trip rows, shown a page at a time.

use crate::errors::AppResult;
use crate::models::TripTable;
use crate::ui::prompt::Prompter;
use crate::utils::formatting::format_duration_secs;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};
use std::ops::Range;

/// Render `rows` of `table` (clamped to its length) as an aligned text table.
pub fn render_rows(table: &TripTable, rows: Range<usize>) -> String {
    let schema = table.schema();

    let mut columns = vec![
        Column::right("#"),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if schema.gender {
        columns.push(Column::left("Gender"));
    }
    if schema.birth_year {
        columns.push(Column::right("Birth Year"));
    }

    let mut out = Table::new(columns);
    let end = rows.end.min(table.len());
    let start = rows.start.min(end);

    for (idx, r) in table.records()[start..end].iter().enumerate() {
        let mut row = vec![
            (start + idx).to_string(),
            r.start_time_str(),
            r.end_time.clone(),
            format_duration_secs(r.trip_duration),
            r.start_station.clone(),
            r.end_station.clone(),
            r.user_type.clone().unwrap_or_default(),
        ];
        if schema.gender {
            row.push(r.gender.clone().unwrap_or_default());
        }
        if schema.birth_year {
            row.push(r.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        out.add_row(row);
    }

    out.render()
}

/// Show `page_size` rows, then ask before each further page.
/// Answering "no" (or closing the input) stops; anything else continues.
pub fn paginate<R: BufRead, W: Write>(
    table: &TripTable,
    page_size: usize,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let page_size = page_size.max(1);
    let mut start = 0;

    while start < table.len() {
        let end = start + page_size;
        write!(prompter.output(), "{}", render_rows(table, start..end))?;

        if end >= table.len() {
            writeln!(prompter.output(), "(end of data)")?;
            break;
        }

        let question =
            format!("Would you like to see the next {page_size} lines of raw data? Enter yes or no.");
        if prompter.confirm(&question, true)? != Some(true) {
            break;
        }
        start = end;
    }

    Ok(())
}
