//! City / month / day questions asked at the start of each cycle.

use crate::errors::AppResult;
use crate::models::{City, DayFilter, FilterSelection, MonthFilter};
use crate::ui::prompt::Prompter;
use std::io::{BufRead, Write};

/// What the user asked for in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub city: City,
    pub selection: FilterSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Month,
    Day,
    Both,
    None,
}

fn parse_filter_kind(s: &str) -> Option<FilterKind> {
    match s {
        "month" => Some(FilterKind::Month),
        "day" => Some(FilterKind::Day),
        "both" => Some(FilterKind::Both),
        "all" | "none" | "not at all" => Some(FilterKind::None),
        _ => None,
    }
}

/// Ask for city and filters. `Ok(None)` when the input ends midway.
pub fn get_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> AppResult<Option<Request>> {
    let Some(city) = prompter.choose(
        "Would you like to see data for Chicago, New York City, or Washington?",
        "Invalid city entered, please type Chicago, New York City or Washington.",
        |s| s.parse::<City>().ok(),
    )?
    else {
        return Ok(None);
    };

    let Some(kind) = prompter.choose(
        "Would you like to filter the data by month, day, both, or not at all?",
        "Please type month, day, both or not at all.",
        parse_filter_kind,
    )?
    else {
        return Ok(None);
    };

    let mut selection = FilterSelection::all();

    if matches!(kind, FilterKind::Month | FilterKind::Both) {
        let Some(month) = prompter.choose(
            "Which month - January, February, March, April, May, or June?",
            "Invalid month entered, please type january - june or all.",
            |s| s.parse::<MonthFilter>().ok(),
        )?
        else {
            return Ok(None);
        };
        selection.month = month;
    }

    if matches!(kind, FilterKind::Day | FilterKind::Both) {
        let Some(day) = prompter.choose(
            "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday?",
            "Invalid weekday entered, please type a weekday (monday - sunday) or all.",
            |s| s.parse::<DayFilter>().ok(),
        )?
        else {
            return Ok(None);
        };
        selection.day = day;
    }

    writeln!(prompter.output(), "{}", crate::utils::formatting::separator())?;
    Ok(Some(Request { city, selection }))
}
