//! Comparison of two corpora.

use crate::driver;
use crate::input::{ConcordanceRecord, Year};
use crate::output::{
    self, AnalyticsSnapshot, CategoryComparison, ComparisonResult, DiffEntry, NameCount,
    PeriodBucket, PeriodDiff, TemporalComparison,
};
use crate::periods;
use log::{debug, info};
use std::collections::{BTreeSet, HashMap};

/// Relative change from `a` to `b` in percent, rounded to one decimal.
///
/// Zero if `a` is zero.
pub fn diff_percent(a: u64, b: u64) -> f64 {
    if a == 0 {
        return 0.0;
    }
    let pct = (b as f64 - a as f64) / a as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn signed_diff(a: u64, b: u64) -> i64 {
    b as i64 - a as i64
}

/// Classify the names of two distributions into common and exclusive ones.
pub fn compare_counts(a: &[NameCount], b: &[NameCount]) -> CategoryComparison {
    let map_a: HashMap<&str, u64> = a.iter().map(|c| (c.name.as_str(), c.value)).collect();
    let map_b: HashMap<&str, u64> = b.iter().map(|c| (c.name.as_str(), c.value)).collect();

    let mut common = vec![];
    let mut only_a = vec![];
    for c in a {
        match map_b.get(c.name.as_str()) {
            Some(&value_b) => common.push(DiffEntry {
                name: c.name.clone(),
                value_a: c.value,
                value_b,
                diff: signed_diff(c.value, value_b),
                diff_percent: diff_percent(c.value, value_b),
            }),
            None => only_a.push(c.clone()),
        }
    }
    let mut only_b = b
        .iter()
        .filter(|c| !map_a.contains_key(c.name.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    common.sort_by_key(|e| std::cmp::Reverse(e.diff.unsigned_abs()));
    only_a.sort_by(|x, y| y.value.cmp(&x.value));
    only_b.sort_by(|x, y| y.value.cmp(&x.value));
    CategoryComparison {
        total_common: common.len() as u64,
        total_only_a: only_a.len() as u64,
        total_only_b: only_b.len() as u64,
        common,
        only_a,
        only_b,
    }
}

/// Bucket-by-bucket differences and the date ranges of both corpora.
pub fn compare_periods(a: &[PeriodBucket], b: &[PeriodBucket]) -> TemporalComparison {
    let map_a: HashMap<Year, u64> = a.iter().map(|p| (p.period, p.count)).collect();
    let map_b: HashMap<Year, u64> = b.iter().map(|p| (p.period, p.count)).collect();
    let keys: BTreeSet<Year> = map_a.keys().chain(map_b.keys()).copied().collect();
    let differences = keys
        .into_iter()
        .map(|period| {
            let count_a = map_a.get(&period).copied().unwrap_or(0);
            let count_b = map_b.get(&period).copied().unwrap_or(0);
            PeriodDiff {
                period,
                count_a,
                count_b,
                diff: signed_diff(count_a, count_b),
                diff_percent: diff_percent(count_a, count_b),
            }
        })
        .collect();
    let range_a = periods::span(a);
    let range_b = periods::span(b);
    let temporal = TemporalComparison {
        differences,
        range_a,
        range_b,
        overlap_start: range_a.min.max(range_b.min),
        overlap_end: range_a.max.min(range_b.max),
    };
    if !temporal.overlaps() {
        debug!(
            target: "concordance",
            "no temporal overlap: {}-{} vs. {}-{}",
            range_a.min,
            range_a.max,
            range_b.min,
            range_b.max
        );
    }
    temporal
}

/// Compare two snapshots.
///
/// If either side is empty, the result is the all-empty comparison.
pub fn compare(a: &AnalyticsSnapshot, b: &AnalyticsSnapshot) -> ComparisonResult {
    if a.is_empty() || b.is_empty() {
        info!(target: "concordance", "comparison with an empty corpus");
        return ComparisonResult::default();
    }
    let result = ComparisonResult {
        domains: compare_counts(&a.domains, &b.domains),
        authors: compare_counts(&a.authors, &b.authors),
        places: compare_counts(&a.places, &b.places),
        temporal: compare_periods(&a.periods, &b.periods),
    };
    info!(
        target: "concordance",
        "compared {} vs. {} records: {} common domains, {} common authors, {} common places",
        a.total,
        b.total,
        result.domains.total_common,
        result.authors.total_common,
        result.places.total_common,
    );
    for (name, c) in [
        ("domains", &result.domains),
        ("authors", &result.authors),
        ("places", &result.places),
    ] {
        if let Some(e) = c.common.first() {
            debug!(
                target: "concordance",
                "{}: largest change: {} {}",
                name,
                e.name,
                output::pretty_diff(e.diff, e.diff_percent)
            );
        }
    }
    result
}

/// Analyze both record sets and compare the snapshots.
pub fn compare_records(a: &[ConcordanceRecord], b: &[ConcordanceRecord]) -> ComparisonResult {
    compare(&driver::analyze(a), &driver::analyze(b))
}
