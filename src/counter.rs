//! Frequency counting with a stable order.

use crate::input::{ConcordanceRecord, Field};
use crate::output::NameCount;
use std::collections::HashMap;
use std::hash::Hash;

/// Tally of labels that remembers in which order labels were first seen.
pub struct Counter<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, u64)>,
}

impl<K: Hash + Eq + Clone> Counter<K> {
    pub fn new() -> Counter<K> {
        Counter {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }

    pub fn feed(&mut self, label: K) {
        match self.index.get(&label) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(label.clone(), self.counts.len());
                self.counts.push((label, 1));
            }
        }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Labels by decreasing count; equal counts keep first-seen order.
    pub fn into_sorted(self) -> Vec<(K, u64)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<K: Hash + Eq + Clone> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count records by an arbitrary label.
pub fn count_by<'a, F>(records: &'a [ConcordanceRecord], label: F) -> Vec<NameCount>
where
    F: Fn(&'a ConcordanceRecord) -> &'a str,
{
    let mut counter = Counter::new();
    for r in records {
        counter.feed(label(r));
    }
    counter
        .into_sorted()
        .into_iter()
        .map(|(name, value)| NameCount {
            name: name.to_owned(),
            value,
        })
        .collect()
}

/// Count records by one categorical field.
///
/// Missing or empty values are counted under [Field::fallback], together with
/// any record that literally carries the fallback label.
pub fn count_field(records: &[ConcordanceRecord], field: Field) -> Vec<NameCount> {
    count_by(records, |r| field.label(r))
}

#[cfg(test)]
mod test {
    use super::*;

    fn nc(name: &str, value: u64) -> NameCount {
        NameCount {
            name: name.to_owned(),
            value,
        }
    }

    fn domain(d: Option<&str>) -> ConcordanceRecord {
        ConcordanceRecord {
            domain: d.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn count_domains() {
        let records = [
            domain(Some("Droit canonique")),
            domain(Some("Théologie")),
            domain(Some("Droit canonique")),
        ];
        assert_eq!(
            count_field(&records, Field::Domain),
            [nc("Droit canonique", 2), nc("Théologie", 1)]
        );
    }

    #[test]
    fn fallback_merges_with_literal_label() {
        let records = [
            domain(None),
            domain(Some("Domaine inconnu")),
            domain(Some("")),
            domain(Some("Liturgie")),
        ];
        assert_eq!(
            count_field(&records, Field::Domain),
            [nc("Domaine inconnu", 3), nc("Liturgie", 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = [
            domain(Some("c")),
            domain(Some("a")),
            domain(Some("b")),
            domain(Some("a")),
            domain(Some("b")),
            domain(Some("c")),
        ];
        assert_eq!(
            count_field(&records, Field::Domain),
            [nc("c", 2), nc("a", 2), nc("b", 2)]
        );
    }

    #[test]
    fn every_record_counted_once() {
        let records = [
            domain(Some("x")),
            domain(None),
            domain(Some("y")),
            domain(Some("x")),
        ];
        let total: u64 = count_field(&records, Field::Domain)
            .iter()
            .map(|c| c.value)
            .sum();
        assert_eq!(total, records.len() as u64);
        assert!(count_field(&[], Field::Place).is_empty());
    }

    #[test]
    fn counter_distinct() {
        let mut counter = Counter::new();
        counter.feed("a");
        counter.feed("b");
        counter.feed("a");
        assert_eq!(counter.distinct(), 2);
        assert_eq!(counter.into_sorted(), [("a", 2), ("b", 1)]);
    }
}
