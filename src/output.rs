//! Data structures for representing the output.
//!
//! These are plain values; exports serialize them verbatim.

use crate::errors::Result;
use crate::input::Year;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{error, fs, io};

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct NameCount {
    pub name: String,
    pub value: u64,
}

/// Number of distinct works whose year falls in `[period, period + BUCKET_WIDTH)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct PeriodBucket {
    pub period: Year,
    pub count: u64,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct KeyTerm {
    pub term: String,
    pub count: u64,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total: u64,
    pub domains: Vec<NameCount>,
    pub authors: Vec<NameCount>,
    pub periods: Vec<PeriodBucket>,
    pub places: Vec<NameCount>,
    pub key_terms: Vec<KeyTerm>,
}

impl AnalyticsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub name: String,
    pub value_a: u64,
    pub value_b: u64,
    pub diff: i64,
    pub diff_percent: f64,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub common: Vec<DiffEntry>,
    pub only_a: Vec<NameCount>,
    pub only_b: Vec<NameCount>,
    pub total_common: u64,
    pub total_only_a: u64,
    pub total_only_b: u64,
}

#[derive(Clone, Copy, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDiff {
    pub period: Year,
    pub count_a: u64,
    pub count_b: u64,
    pub diff: i64,
    pub diff_percent: f64,
}

/// Smallest and largest bucket key; `{0, 0}` for a corpus without dated works.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, Serialize)]
pub struct YearRange {
    pub min: Year,
    pub max: Year,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalComparison {
    pub differences: Vec<PeriodDiff>,
    pub range_a: YearRange,
    pub range_b: YearRange,
    pub overlap_start: Year,
    pub overlap_end: Year,
}

impl TemporalComparison {
    /// Do the two corpora share at least one bucket of their date ranges?
    ///
    /// `overlap_start..=overlap_end` is only meaningful when this holds.
    pub fn overlaps(&self) -> bool {
        self.overlap_start <= self.overlap_end
    }
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct ComparisonResult {
    pub domains: CategoryComparison,
    pub authors: CategoryComparison,
    pub places: CategoryComparison,
    pub temporal: TemporalComparison,
}

#[derive(Serialize)]
pub struct OError {
    pub error: String,
}

/// Report an error as a small JSON document, for callers that cannot read stderr.
pub fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

pub fn pretty_bucket(period: Year, width: Year) -> String {
    format!("{}-{}", period, period + width - 1)
}

pub fn pretty_buckets(periods: &[PeriodBucket], width: Year) -> String {
    if periods.len() >= 5 {
        pretty_buckets(&periods[0..2], width)
            + ", ..., "
            + &pretty_buckets(&periods[periods.len() - 1..], width)
    } else {
        periods
            .iter()
            .map(|p| pretty_bucket(p.period, width))
            .join(", ")
    }
}

pub fn pretty_diff(diff: i64, diff_percent: f64) -> String {
    format!("{diff:+} ({diff_percent:+.1}%)")
}
