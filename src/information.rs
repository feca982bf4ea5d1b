use crate::input::{ConcordanceRecord, Field};
use crate::periods;
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashSet;

fn distinct<'a>(records: &'a [ConcordanceRecord], field: Field) -> HashSet<&'a str> {
    records
        .iter()
        .filter_map(|r| field.get(r))
        .filter(|v| !v.is_empty())
        .collect()
}

fn explain_field(records: &[ConcordanceRecord], field: Field) -> String {
    let missing = records
        .iter()
        .filter(|r| field.get(r).is_none_or(str::is_empty))
        .count();
    format!(
        "{} = {} distinct, {} missing",
        field,
        distinct(records, field).len(),
        missing
    )
}

/// Log an overview of a record set before any calculation.
pub fn statistics(records: &[ConcordanceRecord]) {
    info!(target: "concordance", "records: {}", records.len());
    if records.is_empty() {
        return;
    }
    info!(target: "concordance", "works: {}", periods::works(records).len());
    info!(
        target: "concordance",
        "fields: {}",
        Field::ALL
            .iter()
            .map(|&f| explain_field(records, f))
            .join("; ")
    );
    let domains = distinct(records, Field::Domain)
        .into_iter()
        .sorted()
        .collect_vec();
    debug!(target: "concordance", "domains: {}", domains.join(", "));
}

/// Log what a restriction left behind.
pub fn post_statistics(before: usize, records: &[ConcordanceRecord]) {
    info!(
        target: "concordance",
        "after filtering: records: {} of {}",
        records.len(),
        before
    );
    info!(
        target: "concordance",
        "after filtering: works: {}",
        periods::works(records).len()
    );
}
