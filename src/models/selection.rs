use super::month::Month;
use super::weekday;
use crate::errors::AppError;
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Month restriction: everything, or one of January..June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

/// Weekday restriction: everything, or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

/// The (month, day) pair chosen for one report cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }

        match s.parse::<Month>() {
            Ok(m) if m.is_selectable() => Ok(MonthFilter::Only(m)),
            _ => Err(AppError::InvalidMonth(s.trim().to_string())),
        }
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }

        weekday::parse_full_name(s)
            .map(DayFilter::Only)
            .ok_or_else(|| AppError::InvalidDay(s.trim().to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all months"),
            MonthFilter::Only(m) => write!(f, "{m}"),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all days"),
            DayFilter::Only(d) => f.write_str(weekday::full_name(*d)),
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_filter_accepts_all_and_first_half() {
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "february".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::February)
        );
        assert!("july".parse::<MonthFilter>().is_err());
        assert!("smarch".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn day_filter_matches_full_names_only() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "friday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Fri)
        );
        assert!(matches!(
            "firday".parse::<DayFilter>(),
            Err(AppError::InvalidDay(_))
        ));
    }

    #[test]
    fn display_describes_the_selection() {
        let sel = FilterSelection::new(MonthFilter::Only(Month::March), DayFilter::All);
        assert_eq!(sel.to_string(), "March, all days");
        assert!(FilterSelection::all().is_all());
        assert!(!sel.is_all());
    }
}
