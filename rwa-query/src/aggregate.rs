//! Reducers over filtered rows.
//!
//! All helpers take the `&[&T]` slice a [`crate::Pipeline`] produces. Every
//! division is guarded: an empty input or a non-positive denominator yields
//! `0.0`.

use std::collections::BTreeMap;

pub fn sum_by<T>(rows: &[&T], field: impl Fn(&T) -> f64) -> f64 {
    rows.iter().copied().map(field).sum()
}

/// Arithmetic mean of `field`, or `0.0` for no rows.
pub fn mean_by<T>(rows: &[&T], field: impl Fn(&T) -> f64) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    sum_by(rows, field) / rows.len() as f64
}

pub fn count_where<T>(rows: &[&T], test: impl Fn(&T) -> bool) -> usize {
    rows.iter().copied().filter(|row| test(row)).count()
}

/// `part / whole`, or `0.0` when `whole` is not positive.
pub fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}

/// `part / whole * 100`, or `0.0` when `whole` is not positive.
pub fn percent(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Round half towards positive infinity, the way display code rounds.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Partition rows by key. Keys with no rows never appear.
pub fn group_by<'a, T, K: Ord>(rows: &[&'a T], key: impl Fn(&T) -> K) -> BTreeMap<K, Vec<&'a T>> {
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for row in rows.iter().copied() {
        groups.entry(key(row)).or_default().push(row);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        group: u8,
        value: f64,
    }

    fn samples() -> Vec<Sample> {
        vec![
            Sample { group: 2, value: 75.0 },
            Sample { group: 1, value: 45.0 },
            Sample { group: 2, value: 30.0 },
        ]
    }

    #[test]
    fn empty_input_reduces_to_zero() {
        let rows: Vec<&Sample> = Vec::new();
        assert_eq!(sum_by(&rows, |s| s.value), 0.0);
        assert_eq!(mean_by(&rows, |s| s.value), 0.0);
        assert_eq!(count_where(&rows, |_| true), 0);
        assert!(!mean_by(&rows, |s| s.value).is_nan());
    }

    #[test]
    fn mean_and_rounding_match_display_rules() {
        let data = samples();
        let rows: Vec<&Sample> = data.iter().collect();
        assert_eq!(round_half_up(mean_by(&rows, |s| s.value)), 50.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }

    #[test]
    fn percent_guards_zero_denominator() {
        assert_eq!(percent(5.0, 0.0), 0.0);
        assert_eq!(percent(5.0, -1.0), 0.0);
        assert!((percent(1.0, 4.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn group_by_omits_empty_buckets() {
        let data = samples();
        let rows: Vec<&Sample> = data.iter().collect();
        let groups = group_by(&rows, |s| s.group);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(groups[&2].len(), 2);
        assert!(!groups.contains_key(&3));
    }
}
