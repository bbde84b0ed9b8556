//! Rider breakdown: user types, gender and birth years.
//!
//! Gender and birth-year sections exist only when the table's schema has
//! those columns; for a schema without them nothing is printed at all.

use super::{NO_DATA, Report, frequency};
use crate::models::TripTable;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
    pub most_common_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<CategoryCount>,
    /// `None` when the schema has no gender column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<CategoryCount>>,
    /// Outer `None`: no birth-year column. Inner `None`: column present, all cells empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_years: Option<Option<BirthYears>>,
}

/// Category counts in ascending value order; missing cells are not counted.
fn breakdown<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    frequency::tally(values.into_iter().flatten())
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_years(table: &TripTable) -> Option<BirthYears> {
    let years: Vec<i32> = table.iter().filter_map(|r| r.birth_year).collect();
    let earliest = years.iter().copied().min()?;
    let latest = years.iter().copied().max()?;
    let (most_common, most_common_count) = frequency::mode(years)?;

    Some(BirthYears {
        earliest,
        latest,
        most_common,
        most_common_count,
    })
}

pub fn compute(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let schema = table.schema();
    Some(UserStats {
        user_types: breakdown(table.iter().map(|r| r.user_type.as_deref())),
        genders: schema
            .gender
            .then(|| breakdown(table.iter().map(|r| r.gender.as_deref()))),
        birth_years: schema.birth_year.then(|| birth_years(table)),
    })
}

fn write_counts(out: &mut dyn Write, label: &str, counts: &[CategoryCount]) -> io::Result<()> {
    writeln!(out, "\n{:<11}: {:>6}", label, "Count")?;
    if counts.is_empty() {
        writeln!(out, "(no {} data)", label.to_lowercase())?;
    }
    for c in counts {
        writeln!(out, "{:<11}: {:>6}", c.value, c.count)?;
    }
    Ok(())
}

pub struct UserReport;

impl Report for UserReport {
    fn title(&self) -> &'static str {
        "Calculating User Stats..."
    }

    fn render(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<()> {
        let Some(stats) = compute(table) else {
            return writeln!(out, "{NO_DATA}");
        };

        write_counts(out, "User type", &stats.user_types)?;

        if let Some(genders) = &stats.genders {
            write_counts(out, "Gender", genders)?;
        }

        match &stats.birth_years {
            Some(Some(years)) => {
                writeln!(out, "\nEarliest year of birth:    {}", years.earliest)?;
                writeln!(out, "Latest year of birth:      {}", years.latest)?;
                writeln!(out, "Most common year of birth: {}", years.most_common)?;
            }
            Some(None) => writeln!(out, "\n(no year of birth data)")?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::test_support::{render_to_string, rider};
    use crate::models::Schema;

    fn chicago_like() -> TripTable {
        TripTable::new(
            Schema::full(),
            vec![
                rider(Some("Subscriber"), Some("Male"), Some(1992)),
                rider(Some("Customer"), None, None),
                rider(Some("Subscriber"), Some("Female"), Some(1981)),
                rider(Some("Subscriber"), Some("Male"), Some(1992)),
                rider(None, Some("Female"), Some(1981)),
                rider(Some("Dependent"), Some("Male"), Some(1955)),
            ],
        )
    }

    #[test]
    fn counts_are_listed_in_natural_order() {
        let stats = compute(&chicago_like()).unwrap();

        let types: Vec<(&str, usize)> = stats
            .user_types
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(
            types,
            vec![("Customer", 1), ("Dependent", 1), ("Subscriber", 3)]
        );

        let genders = stats.genders.unwrap();
        assert_eq!(genders[0].value, "Female");
        assert_eq!(genders[0].count, 2);
        assert_eq!(genders[1].value, "Male");
        assert_eq!(genders[1].count, 3);
    }

    #[test]
    fn birth_year_extremes_and_tied_mode() {
        let years = compute(&chicago_like()).unwrap().birth_years.unwrap().unwrap();
        assert_eq!(years.earliest, 1955);
        assert_eq!(years.latest, 1992);
        // 1981 and 1992 both appear twice
        assert_eq!(years.most_common, 1981);
        assert_eq!(years.most_common_count, 2);
    }

    #[test]
    fn optional_sections_absent_without_columns() {
        let table = TripTable::new(
            Schema::default(),
            vec![rider(Some("Subscriber"), Some("Male"), Some(1990))],
        );
        let stats = compute(&table).unwrap();
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);

        let text = render_to_string(&UserReport, &table);
        assert!(text.contains("Subscriber :      1"));
        assert!(!text.contains("Gender"));
        assert!(!text.contains("birth"));
    }

    #[test]
    fn full_schema_renders_every_section() {
        let text = render_to_string(&UserReport, &chicago_like());
        assert!(text.contains("User type  :  Count"));
        assert!(text.contains("Gender     :  Count"));
        assert!(text.contains("Earliest year of birth:    1955"));
        assert!(text.contains("Most common year of birth: 1981"));
    }

    #[test]
    fn empty_birth_year_column_is_reported_as_such() {
        let table = TripTable::new(Schema::full(), vec![rider(Some("Customer"), None, None)]);
        assert_eq!(compute(&table).unwrap().birth_years, Some(None));
        assert!(render_to_string(&UserReport, &table).contains("(no year of birth data)"));
    }

    #[test]
    fn empty_table_prints_no_data() {
        let text = render_to_string(&UserReport, &TripTable::default());
        assert_eq!(text.trim(), NO_DATA);
    }
}
