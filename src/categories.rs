//! Record filters of the form `field=value`.

use crate::errors::{self, Result};
use crate::information;
use crate::input::{ConcordanceRecord, Field};
use itertools::Itertools;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restriction {
    pub field: Field,
    pub value: String,
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

/// Does the record match?
///
/// Records with a missing value match the fallback label of the field.
pub fn matches(restriction: &Restriction, record: &ConcordanceRecord) -> bool {
    restriction.field.label(record) == restriction.value
}

pub fn parse_restriction(arg: &str) -> Result<Restriction> {
    let parts = arg.splitn(2, '=').collect_vec();
    if parts.len() != 2 || parts[1].is_empty() {
        return Err(errors::invalid_argument(format!(
            "restriction should be of the form 'field=value', got '{arg}'"
        )));
    }
    let field = parts[0].trim();
    if field.is_empty() {
        return Err(errors::invalid_argument_ref("restriction without a field name"));
    }
    Ok(Restriction {
        field: field.parse()?,
        value: parts[1].to_owned(),
    })
}

pub fn parse_restrictions(args: &[String]) -> Result<Vec<Restriction>> {
    args.iter().map(|a| parse_restriction(a)).collect()
}

/// Keep the records that match all restrictions.
pub fn restrict(
    records: &[ConcordanceRecord],
    restrictions: &[Restriction],
) -> Vec<ConcordanceRecord> {
    if restrictions.is_empty() {
        return records.to_vec();
    }
    let kept = records
        .iter()
        .filter(|r| restrictions.iter().all(|x| matches(x, r)))
        .cloned()
        .collect_vec();
    information::post_statistics(records.len(), &kept);
    kept
}
