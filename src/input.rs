//! Data structures for representing the input.

use crate::errors::{self, Result};
use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, fs, str};

pub type Year = u16;

/// One occurrence of a term in its textual context.
///
/// Every field is optional; the records come from spreadsheets and XML
/// exports of varying quality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ConcordanceRecord {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub kwic: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

impl ConcordanceRecord {
    /// The (title, author) pair that identifies the work this record belongs to.
    pub fn work(&self) -> (Option<&str>, Option<&str>) {
        (self.title.as_deref(), self.author.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Input {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<ConcordanceRecord>,
}

fn null_as_empty<'de, D>(d: D) -> std::result::Result<Vec<ConcordanceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ConcordanceRecord>>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Bare(Vec<ConcordanceRecord>),
    Wrapped(Input),
}

/// Parse records from JSON.
///
/// Accepts either a bare array of records or an object with a `records` key.
/// A `null` document or a `null` record list is an empty input.
pub fn parse_input(data: &str) -> Result<Input> {
    let raw: Option<RawInput> = serde_json::from_str(data)
        .map_err(|e| errors::invalid_input(format!("cannot parse records: {e}")))?;
    Ok(match raw {
        None => Input::default(),
        Some(RawInput::Bare(records)) => Input { records },
        Some(RawInput::Wrapped(input)) => input,
    })
}

/// Read and parse a JSON file of records.
pub fn read_input(filename: &str) -> Result<Input> {
    info!(target: "concordance", "read: {}", filename);
    let data = fs::read_to_string(filename)?;
    let input = parse_input(&data)?;
    info!(target: "concordance", "{}: {} records", filename, input.records.len());
    Ok(input)
}

/// Categorical record fields that can be counted or used as filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Author,
    Domain,
    Period,
    Place,
    Title,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Author,
        Field::Domain,
        Field::Period,
        Field::Place,
        Field::Title,
    ];

    pub fn get<'a>(&self, record: &'a ConcordanceRecord) -> Option<&'a str> {
        match self {
            Field::Author => record.author.as_deref(),
            Field::Domain => record.domain.as_deref(),
            Field::Period => record.period.as_deref(),
            Field::Place => record.place.as_deref(),
            Field::Title => record.title.as_deref(),
        }
    }

    /// Label used for records where this field is missing or empty.
    pub fn fallback(&self) -> &'static str {
        match self {
            Field::Author => "Auteur inconnu",
            Field::Domain => "Domaine inconnu",
            Field::Period => "Période inconnue",
            Field::Place => "Lieu inconnu",
            Field::Title => "Titre inconnu",
        }
    }

    /// The value of this field, with missing and empty values replaced by [Field::fallback].
    pub fn label<'a>(&self, record: &'a ConcordanceRecord) -> &'a str {
        match self.get(record) {
            Some(v) if !v.is_empty() => v,
            _ => self.fallback(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Author => write!(f, "author"),
            Field::Domain => write!(f, "domain"),
            Field::Period => write!(f, "period"),
            Field::Place => write!(f, "place"),
            Field::Title => write!(f, "title"),
        }
    }
}

impl str::FromStr for Field {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| {
                errors::invalid_argument(format!(
                    "unknown field '{s}', expected one of: author, domain, period, place, title"
                ))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_bare_and_wrapped() {
        let bare = parse_input(r#"[{"author": "Gratien", "domain": null}, {}]"#).unwrap();
        assert_eq!(bare.records.len(), 2);
        assert_eq!(bare.records[0].author.as_deref(), Some("Gratien"));
        assert_eq!(bare.records[0].domain, None);
        assert_eq!(bare.records[1], ConcordanceRecord::default());

        let wrapped = parse_input(r#"{"records": [{"kwic": "ecclesia"}]}"#).unwrap();
        assert_eq!(wrapped.records.len(), 1);
        assert_eq!(wrapped.records[0].kwic.as_deref(), Some("ecclesia"));
    }

    #[test]
    fn parse_null_is_empty() {
        assert!(parse_input("null").unwrap().records.is_empty());
        let null_records = parse_input(r#"{"records": null}"#).unwrap();
        assert!(null_records.records.is_empty());
        assert!(parse_input("{}").unwrap().records.is_empty());
        assert!(parse_input("[]").unwrap().records.is_empty());
    }

    #[test]
    fn parse_garbage() {
        assert!(parse_input("[1, 2").is_err());
        assert!(parse_input(r#""records""#).is_err());
    }

    #[test]
    fn labels() {
        let r = ConcordanceRecord {
            domain: Some("Théologie".to_owned()),
            place: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(Field::Domain.label(&r), "Théologie");
        assert_eq!(Field::Place.label(&r), "Lieu inconnu");
        assert_eq!(Field::Author.label(&r), "Auteur inconnu");
    }

    #[test]
    fn field_names() {
        for f in Field::ALL {
            assert_eq!(f.to_string().parse::<Field>().unwrap(), f);
        }
        assert!("kwic".parse::<Field>().is_err());
    }
}
