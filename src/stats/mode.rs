//! Mode and frequency-table helpers.
//!
//! Tie-break rule, applied everywhere a "most frequent" value is reported:
//! the smallest value among the most frequent wins. Smallest means numeric
//! order for months, hours, and birth years, Monday-first order for
//! weekdays, and lexicographic order for station names. Frequency tables
//! sort by descending count and keep ties in ascending value order.

use serde::Serialize;
use std::collections::BTreeMap;

/// A most-frequent value together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

/// Returns the most frequent value, or `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<Mode<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<Mode<T>> = None;

    // Ascending key order makes the first maximum the smallest value.
    for (value, count) in count_values(values) {
        match &best {
            Some(current) if count <= current.count => {}
            _ => best = Some(Mode { value, count }),
        }
    }

    best
}

/// Frequency table in descending count order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut table: Vec<(T, usize)> = count_values(values).into_iter().collect();
    // Stable sort keeps equal counts in ascending value order
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

fn count_values<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_of_empty_input() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_single_unique_value_counts_all() {
        let result = mode(vec![7u32, 7, 7, 7]).unwrap();
        assert_eq!(result.value, 7);
        assert_eq!(result.count, 4);
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        let result = mode(vec![3u32, 1, 3, 2, 3, 1]).unwrap();
        assert_eq!(result.value, 3);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_mode_tie_goes_to_smallest_value() {
        let result = mode(vec![6u32, 1, 6, 1]).unwrap();
        assert_eq!(result.value, 1);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_mode_tie_on_strings_is_lexicographic() {
        let result = mode(vec!["b", "a", "b", "a"]).unwrap();
        assert_eq!(result.value, "a");
    }

    #[test]
    fn test_value_counts_orders_by_count_then_value() {
        let table = value_counts(vec!["x", "y", "y", "z", "x", "y"]);
        assert_eq!(table, vec![("y", 3), ("x", 2), ("z", 1)]);

        let tied = value_counts(vec!["b", "a", "b", "a"]);
        assert_eq!(tied, vec![("a", 2), ("b", 2)]);
    }
}
