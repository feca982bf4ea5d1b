use concordance_stats::cache::SnapshotCache;
use concordance_stats::categories;
use concordance_stats::compare;
use concordance_stats::driver;
use concordance_stats::export::{self, ExportFormat};
use concordance_stats::input::{self, Input};
use concordance_stats::output::{
    AnalyticsSnapshot, DiffEntry, KeyTerm, NameCount, PeriodBucket, PeriodDiff, YearRange,
};
use concordance_stats::terms;
use std::fs;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn sample_path(filename: &str) -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    path
}

fn load(filename: &str) -> Input {
    input::read_input(sample_path(filename).to_str().unwrap()).unwrap()
}

fn nc(name: &str, value: u64) -> NameCount {
    NameCount {
        name: name.to_owned(),
        value,
    }
}

fn kt(term: &str, count: u64) -> KeyTerm {
    KeyTerm {
        term: term.to_owned(),
        count,
    }
}

fn pb(period: u16, count: u64) -> PeriodBucket {
    PeriodBucket { period, count }
}

fn de(name: &str, value_a: u64, value_b: u64, diff: i64, diff_percent: f64) -> DiffEntry {
    DiffEntry {
        name: name.to_owned(),
        value_a,
        value_b,
        diff,
        diff_percent,
    }
}

#[test]
fn test_snapshot() {
    init();
    let input = load("sample-data/canon-law.json");
    let s = driver::analyze(&input.records);
    assert_eq!(
        s,
        AnalyticsSnapshot {
            total: 6,
            domains: vec![
                nc("Droit canonique", 4),
                nc("Théologie", 1),
                nc("Domaine inconnu", 1),
            ],
            authors: vec![
                nc("Gratien", 2),
                nc("Rufin", 1),
                nc("Huguccio", 1),
                nc("Bernard de Clairvaux", 1),
                nc("Auteur inconnu", 1),
            ],
            periods: vec![pb(1100, 2), pb(1150, 2)],
            places: vec![
                nc("Bologne", 3),
                nc("Pise", 1),
                nc("Clairvaux", 1),
                nc("Lieu inconnu", 1),
            ],
            key_terms: vec![
                kt("ecclesia", 5),
                kt("sancta", 2),
                kt("romana", 2),
                kt("docet", 2),
                kt("statuitur", 1),
                kt("catholica", 1),
                kt("potestate", 1),
                kt("ecclesiae", 1),
                kt("romanae", 1),
            ],
        }
    );
    assert_eq!(
        terms::word_frequency(&input.records, None),
        [nc("ecclesia", 5), nc("ecclesiae", 1)]
    );
}

#[test]
fn test_comparison() {
    init();
    let a = load("sample-data/canon-law.json");
    let b = load("sample-data/theology.json");
    let r = compare::compare_records(&a.records, &b.records);

    assert_eq!(
        r.domains.common,
        [
            de("Droit canonique", 4, 1, -3, -75.0),
            de("Théologie", 1, 4, 3, 300.0),
        ]
    );
    assert_eq!(r.domains.only_a, [nc("Domaine inconnu", 1)]);
    assert!(r.domains.only_b.is_empty());

    assert_eq!(
        r.authors.common,
        [
            de("Gratien", 2, 1, -1, -50.0),
            de("Bernard de Clairvaux", 1, 1, 0, 0.0),
        ]
    );
    assert_eq!(
        r.authors.only_a,
        [nc("Rufin", 1), nc("Huguccio", 1), nc("Auteur inconnu", 1)]
    );
    assert_eq!(
        r.authors.only_b,
        [nc("Pierre Lombard", 2), nc("Thomas d'Aquin", 1)]
    );
    let a_ = &r.authors;
    assert_eq!(a_.total_common + a_.total_only_a + a_.total_only_b, 7);

    assert_eq!(r.places.common[0], de("Bologne", 3, 1, -2, -66.7));
    assert_eq!(r.places.only_b, [nc("Paris", 3)]);

    let t = &r.temporal;
    assert_eq!(
        t.differences,
        [
            PeriodDiff {
                period: 1100,
                count_a: 2,
                count_b: 2,
                diff: 0,
                diff_percent: 0.0
            },
            PeriodDiff {
                period: 1150,
                count_a: 2,
                count_b: 1,
                diff: -1,
                diff_percent: -50.0
            },
            PeriodDiff {
                period: 1250,
                count_a: 0,
                count_b: 1,
                diff: 1,
                diff_percent: 0.0
            },
        ]
    );
    assert_eq!(
        t.range_a,
        YearRange {
            min: 1100,
            max: 1150
        }
    );
    assert_eq!(
        t.range_b,
        YearRange {
            min: 1100,
            max: 1250
        }
    );
    assert_eq!((t.overlap_start, t.overlap_end), (1100, 1150));
}

#[test]
fn test_restricted() {
    init();
    let input = load("sample-data/theology.json");
    let restriction = categories::parse_restriction("place=Paris").unwrap();
    let records = categories::restrict(&input.records, &[restriction]);
    let s = driver::analyze(&records);
    assert_eq!(s.total, 3);
    assert_eq!(s.domains, [nc("Théologie", 3)]);
    assert_eq!(s.periods, [pb(1150, 1), pb(1250, 1)]);
}

#[test]
fn test_cache_matches_driver() {
    init();
    let input = load("sample-data/canon-law.json");
    let mut cache = SnapshotCache::default();
    let cached = cache.get_or_compute(&input.records).clone();
    assert_eq!(cached, driver::analyze(&input.records));
    cache.get_or_compute(&input.records.clone());
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_json_export() {
    init();
    let input = load("sample-data/theology.json");
    let s = driver::analyze(&input.records);
    let mut path = std::env::temp_dir();
    path.push(format!("concordance-stats-{}.json", std::process::id()));
    let outfile = path.to_str().unwrap();
    let written = export::export(&s, outfile, ExportFormat::Json, false).unwrap();
    assert_eq!(written, [path.clone()]);
    let back: AnalyticsSnapshot =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(back, s);
}
