//! Filter engine: month/day restriction of a trip table.

use crate::models::{DayFilter, FilterSelection, MonthFilter, TripRecord, TripTable};

/// Records matching both the month and the day predicate, in source order.
/// An empty result is a valid table, not an error.
pub fn filter(table: &TripTable, selection: &FilterSelection) -> TripTable {
    if selection.is_all() {
        return table.clone();
    }
    table.retain_matching(|r| matches(r, selection))
}

pub fn matches(record: &TripRecord, selection: &FilterSelection) -> bool {
    month_matches(record, selection.month) && day_matches(record, selection.day)
}

fn month_matches(record: &TripRecord, month: MonthFilter) -> bool {
    match month {
        MonthFilter::All => true,
        MonthFilter::Only(m) => record.month.ordinal() == m.ordinal(),
    }
}

fn day_matches(record: &TripRecord, day: DayFilter) -> bool {
    match day {
        DayFilter::All => true,
        DayFilter::Only(d) => record.day_of_week == d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Schema};
    use chrono::{NaiveDate, Weekday};

    fn trip(month: u32, day: u32, station: &str) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        TripRecord::new(start, "", 100.0, station, "X", Some("Subscriber".into()))
    }

    // 2017-01-02 Mon, 2017-01-03 Tue, 2017-02-06 Mon, 2017-03-07 Tue, 2017-01-09 Mon
    fn sample() -> TripTable {
        TripTable::new(
            Schema::default(),
            vec![
                trip(1, 2, "a"),
                trip(1, 3, "b"),
                trip(2, 6, "c"),
                trip(3, 7, "d"),
                trip(1, 9, "e"),
            ],
        )
    }

    fn stations(t: &TripTable) -> Vec<&str> {
        t.iter().map(|r| r.start_station.as_str()).collect()
    }

    #[test]
    fn all_all_returns_the_same_table() {
        let table = sample();
        let out = filter(&table, &FilterSelection::all());
        assert_eq!(out, table);
        assert_eq!(filter(&out, &FilterSelection::all()), out);
    }

    #[test]
    fn month_only() {
        let sel = FilterSelection::new(MonthFilter::Only(Month::January), DayFilter::All);
        let out = filter(&sample(), &sel);
        assert_eq!(stations(&out), vec!["a", "b", "e"]);
        assert!(out.iter().all(|r| r.month == Month::January));
    }

    #[test]
    fn day_only() {
        let sel = FilterSelection::new(MonthFilter::All, DayFilter::Only(Weekday::Tue));
        let out = filter(&sample(), &sel);
        assert_eq!(stations(&out), vec!["b", "d"]);
    }

    #[test]
    fn month_and_day_is_the_intersection() {
        let table = sample();
        let month = filter(
            &table,
            &FilterSelection::new(MonthFilter::Only(Month::January), DayFilter::All),
        );
        let day = filter(
            &table,
            &FilterSelection::new(MonthFilter::All, DayFilter::Only(Weekday::Mon)),
        );
        let both = filter(
            &table,
            &FilterSelection::new(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Mon)),
        );

        let expected: Vec<&str> = stations(&month)
            .into_iter()
            .filter(|s| stations(&day).contains(s))
            .collect();
        assert_eq!(stations(&both), expected);
        assert_eq!(stations(&both), vec!["a", "e"]);
    }

    #[test]
    fn no_match_gives_an_empty_table() {
        let sel = FilterSelection::new(MonthFilter::Only(Month::June), DayFilter::All);
        let out = filter(&sample(), &sel);
        assert!(out.is_empty());
        assert_eq!(out.schema(), Schema::default());
    }
}
