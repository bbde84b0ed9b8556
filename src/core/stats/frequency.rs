//! Frequency counting shared by the reports.
//!
//! Mode tie-break: highest count first, then the smallest value in the
//! value's `Ord`. Counting goes through a `BTreeMap`, so values come out in
//! ascending order and a stable sort by count keeps that order among ties.

use std::collections::BTreeMap;

/// Count per distinct value, in ascending value order.
pub fn tally<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Count per distinct value, most frequent first, ties by ascending value.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value and its count; `None` when there are no values.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_the_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2, 3, 1]), Some((3, 3)));
    }

    #[test]
    fn ties_resolve_to_the_smallest_value() {
        assert_eq!(mode([9, 4, 9, 4, 7]), Some((4, 2)));
        assert_eq!(mode(["b", "a", "b", "a"]), Some(("a", 2)));
        assert_eq!(mode([("A", "C"), ("A", "B")]), Some((("A", "B"), 1)));
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn value_counts_orders_by_count_then_value() {
        let counts = value_counts(["x", "y", "z", "y", "x", "w"]);
        assert_eq!(counts, vec![("x", 2), ("y", 2), ("w", 1), ("z", 1)]);
    }

    #[test]
    fn tally_is_sorted_by_value() {
        let t = tally(["Subscriber", "Customer", "Subscriber", "Dependent"]);
        let keys: Vec<_> = t.keys().copied().collect();
        assert_eq!(keys, vec!["Customer", "Dependent", "Subscriber"]);
        assert_eq!(t["Subscriber"], 2);
    }
}
