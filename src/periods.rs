//! Temporal distribution of works.
//!
//! Records are first collapsed into works (distinct `(title, author)` pairs),
//! then each dated work is placed in a fixed-width bucket of years.

use crate::input::{ConcordanceRecord, Year};
use crate::output::{self, PeriodBucket, YearRange};
use log::{debug, trace};
use std::collections::{BTreeMap, HashSet};

/// Width of a bucket, in years.
pub const BUCKET_WIDTH: Year = 50;

/// Period values containing one of these are never dated, whatever digits they carry.
const UNKNOWN_PERIOD_MARKERS: [&str; 2] = ["unknown period", "période inconnue"];

/// The first run of four consecutive ASCII digits in a free-text period, as a year.
///
/// Returns `None` for periods without such a run and for the "unknown period" sentinel.
pub fn extract_year(period: &str) -> Option<Year> {
    let lower = period.to_lowercase();
    if UNKNOWN_PERIOD_MARKERS.iter().any(|m| lower.contains(m)) {
        return None;
    }
    period
        .as_bytes()
        .windows(4)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .map(|w| w.iter().fold(0, |y, d| y * 10 + Year::from(d - b'0')))
}

/// Lower bound of the bucket containing `year`.
pub fn bucket_of(year: Year) -> Year {
    year / BUCKET_WIDTH * BUCKET_WIDTH
}

/// One record per work: the first record seen for each `(title, author)` pair.
pub fn works(records: &[ConcordanceRecord]) -> Vec<&ConcordanceRecord> {
    let mut seen = HashSet::new();
    records.iter().filter(|r| seen.insert(r.work())).collect()
}

/// Number of distinct works per bucket, in chronological order.
///
/// Works whose period cannot be dated are left out.
pub fn bucket_works(records: &[ConcordanceRecord]) -> Vec<PeriodBucket> {
    let works = works(records);
    let mut buckets: BTreeMap<Year, u64> = BTreeMap::new();
    let mut undated = 0;
    for w in &works {
        match w.period.as_deref().and_then(extract_year) {
            Some(year) => *buckets.entry(bucket_of(year)).or_default() += 1,
            None => {
                trace!(target: "concordance", "undated work: {:?}", w.work());
                undated += 1;
            }
        }
    }
    let buckets = buckets
        .into_iter()
        .map(|(period, count)| PeriodBucket { period, count })
        .collect::<Vec<_>>();
    debug!(
        target: "concordance",
        "{} records, {} works, {} undated, buckets: {}",
        records.len(),
        works.len(),
        undated,
        output::pretty_buckets(&buckets, BUCKET_WIDTH)
    );
    buckets
}

/// First and last bucket key, or `{0, 0}` if there are no buckets.
pub fn span(periods: &[PeriodBucket]) -> YearRange {
    let mut range = None;
    for p in periods {
        range = match range {
            None => Some((p.period, p.period)),
            Some((a, b)) => Some((p.period.min(a), p.period.max(b))),
        };
    }
    match range {
        None => YearRange::default(),
        Some((min, max)) => YearRange { min, max },
    }
}
