//! Key terms from the textual context of concordance lines.

use crate::counter::Counter;
use crate::input::ConcordanceRecord;
use crate::output::{KeyTerm, NameCount};
use log::debug;

/// Maximum number of key terms reported.
pub const KEY_TERM_LIMIT: usize = 15;

/// Tokens shorter than this (in characters) are never key terms.
pub const MIN_TERM_CHARS: usize = 4;

/// Latin and French function words. Shorter ones are already dropped by length.
const STOPWORDS: &[&str] = &[
    // Latin
    "quod", "quae", "quem", "quam", "quia", "quibus", "quorum", "quarum", "esse", "sunt", "erat",
    "erant", "fuit", "enim", "autem", "etiam", "sicut", "eius", "eorum", "earum", "ipse", "ipsa",
    "ipsum", "ille", "illa", "illud", "nisi", "vero", "tamen", "unde", "inter", "super", "contra",
    "propter", "sive", "seve", "quoque", "nunc", "ergo", "idem", "eadem", "omnia", "omnes",
    "omnibus", "aliquid", "aliquis", "ideo", "item", "cuius", "haec", "huius", "sibi", "atque",
    "neque", "nobis", "vobis", "quasi", "apud", "post", "ante", "secundum", "sine",
    // French
    "dans", "pour", "avec", "sont", "cette", "elle", "elles", "leur", "leurs", "plus", "comme",
    "mais", "nous", "vous", "aussi", "tout", "tous", "toute", "toutes", "être", "avoir", "fait",
    "sans", "sous", "entre", "donc", "dont", "ainsi", "avait", "était", "ceux", "celle", "celui",
    "autre", "autres", "même", "très", "encore", "alors", "quand", "puis",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercased whitespace-separated tokens of the left context, pivot and right context.
pub fn tokenize(record: &ConcordanceRecord) -> Vec<String> {
    [&record.left, &record.kwic, &record.right]
        .into_iter()
        .flatten()
        .flat_map(|text| text.split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

fn is_term(token: &str) -> bool {
    token.chars().count() >= MIN_TERM_CHARS && !is_stopword(token)
}

/// The most frequent non-stopword tokens, at most [KEY_TERM_LIMIT] of them.
///
/// Equal counts keep the order in which the terms were first seen.
pub fn key_terms(records: &[ConcordanceRecord]) -> Vec<KeyTerm> {
    let mut counter = Counter::new();
    for r in records {
        for token in tokenize(r) {
            if is_term(&token) {
                counter.feed(token);
            }
        }
    }
    debug!(target: "concordance", "distinct terms: {}", counter.distinct());
    counter
        .into_sorted()
        .into_iter()
        .take(KEY_TERM_LIMIT)
        .map(|(term, count)| KeyTerm { term, count })
        .collect()
}

/// Frequencies of words for a word cloud.
///
/// Words are merged after trimming and lowercasing, empty words are skipped,
/// and at most `limit` entries are returned if a limit is given.
pub fn count_words<'a, I>(words: I, limit: Option<usize>) -> Vec<NameCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = Counter::new();
    for w in words {
        let w = w.trim();
        if !w.is_empty() {
            counter.feed(w.to_lowercase());
        }
    }
    counter
        .into_sorted()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(name, value)| NameCount { name, value })
        .collect()
}

/// Word cloud of the pivot terms.
pub fn word_frequency(records: &[ConcordanceRecord], limit: Option<usize>) -> Vec<NameCount> {
    count_words(records.iter().filter_map(|r| r.kwic.as_deref()), limit)
}
