//! Main entry point for calculating everything.

use crate::counter;
use crate::information;
use crate::input::{ConcordanceRecord, Field};
use crate::output::AnalyticsSnapshot;
use crate::periods;
use crate::terms;
use log::{Level, info, log_enabled};

/// Calculate the statistics snapshot of a record set.
///
/// This is the main entry point for the library. It never fails: records with
/// missing fields are counted under fallback labels, and undated works are
/// left out of the temporal distribution.
pub fn analyze(records: &[ConcordanceRecord]) -> AnalyticsSnapshot {
    if log_enabled!(target: "concordance", Level::Info) {
        information::statistics(records);
    }
    let snapshot = AnalyticsSnapshot {
        total: records.len() as u64,
        domains: counter::count_field(records, Field::Domain),
        authors: counter::count_field(records, Field::Author),
        periods: periods::bucket_works(records),
        places: counter::count_field(records, Field::Place),
        key_terms: terms::key_terms(records),
    };
    info!(
        target: "concordance",
        "snapshot: {} records, {} domains, {} authors, {} places, {} buckets, {} key terms",
        snapshot.total,
        snapshot.domains.len(),
        snapshot.authors.len(),
        snapshot.places.len(),
        snapshot.periods.len(),
        snapshot.key_terms.len(),
    );
    snapshot
}

/// Like [analyze], treating a missing record set as an empty one.
pub fn analyze_opt(records: Option<&[ConcordanceRecord]>) -> AnalyticsSnapshot {
    analyze(records.unwrap_or_default())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::output::NameCount;

    fn full(domain: &str, author: &str, title: &str, period: &str) -> ConcordanceRecord {
        ConcordanceRecord {
            domain: Some(domain.to_owned()),
            author: Some(author.to_owned()),
            title: Some(title.to_owned()),
            period: Some(period.to_owned()),
            place: Some("Bologne".to_owned()),
            left: Some("in".to_owned()),
            kwic: Some("ecclesia".to_owned()),
            right: Some("romana".to_owned()),
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(analyze(&[]), AnalyticsSnapshot::default());
        assert_eq!(analyze_opt(None), AnalyticsSnapshot::default());
        let s = analyze(&[]);
        assert_eq!(s.total, 0);
        assert!(s.domains.is_empty());
        assert!(s.authors.is_empty());
        assert!(s.periods.is_empty());
        assert!(s.places.is_empty());
        assert!(s.key_terms.is_empty());
    }

    #[test]
    fn all_null_records_still_counted() {
        let records = vec![ConcordanceRecord::default(); 3];
        let s = analyze(&records);
        assert_eq!(s.total, 3);
        assert_eq!(
            s.domains,
            [NameCount {
                name: "Domaine inconnu".to_owned(),
                value: 3
            }]
        );
        assert_eq!(s.authors[0].name, "Auteur inconnu");
        assert_eq!(s.places[0].name, "Lieu inconnu");
        assert!(s.periods.is_empty());
        assert!(s.key_terms.is_empty());
    }

    #[test]
    fn distributions_sum_to_total() {
        let records = [
            full("Droit canonique", "Gratien", "Decretum", "1140"),
            full("Droit canonique", "Gratien", "Decretum", "1140"),
            full("Théologie", "Pierre Lombard", "Sententiae", "1155"),
            ConcordanceRecord::default(),
        ];
        let s = analyze(&records);
        assert_eq!(s.total, 4);
        for dist in [&s.domains, &s.authors, &s.places] {
            assert_eq!(dist.iter().map(|c| c.value).sum::<u64>(), s.total);
        }
        assert_eq!(s.periods.len(), 2);
        assert_eq!(s.key_terms[0].term, "ecclesia");
        assert_eq!(s.key_terms[0].count, 3);
    }

    #[test]
    fn idempotent() {
        let records = [
            full("Droit canonique", "Gratien", "Decretum", "1140"),
            full("Théologie", "Pierre Lombard", "Sententiae", "1155"),
        ];
        assert_eq!(analyze(&records), analyze(&records.clone()));
    }

    #[test]
    fn quiet_without_logger() {
        assert!(!log_enabled!(target: "concordance", Level::Info));
        let records = [full("Droit canonique", "Gratien", "Decretum", "1140")];
        let s = analyze(&records);
        assert_eq!(s.total, 1);
        assert_eq!(s.periods.len(), 1);
    }
}
