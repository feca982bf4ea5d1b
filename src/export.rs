//! Writing snapshots and comparisons to files.
//!
//! JSON output is the data structure itself. CSV and XLSX output flatten it
//! into one table per distribution; nothing is added that is not in the data.

use crate::errors::{self, Result};
use crate::output::{
    AnalyticsSnapshot, CategoryComparison, ComparisonResult, KeyTerm, NameCount, PeriodBucket,
};
use clap::ValueEnum;
use log::info;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Int(x) => write!(f, "{x}"),
            Cell::Float(x) => write!(f, "{x}"),
        }
    }
}

fn text(s: &str) -> Cell {
    Cell::Text(s.to_owned())
}

fn int(x: impl Into<i64>) -> Cell {
    Cell::Int(x.into())
}

fn count(x: u64) -> Cell {
    Cell::Int(x as i64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub name: String,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// Values that can be flattened into tables.
pub trait Tabular {
    fn tables(&self) -> Vec<Table>;
}

fn name_counts(name: &str, counts: &[NameCount]) -> Table {
    Table {
        name: name.to_owned(),
        header: vec!["name", "value"],
        rows: counts
            .iter()
            .map(|c| vec![text(&c.name), count(c.value)])
            .collect(),
    }
}

fn buckets(periods: &[PeriodBucket]) -> Table {
    Table {
        name: "periods".to_owned(),
        header: vec!["period", "count"],
        rows: periods
            .iter()
            .map(|p| vec![int(p.period), count(p.count)])
            .collect(),
    }
}

fn key_terms(terms: &[KeyTerm]) -> Table {
    Table {
        name: "keyTerms".to_owned(),
        header: vec!["term", "count"],
        rows: terms
            .iter()
            .map(|t| vec![text(&t.term), count(t.count)])
            .collect(),
    }
}

fn category_tables(name: &str, c: &CategoryComparison) -> Vec<Table> {
    let common = Table {
        name: format!("{name}_common"),
        header: vec!["name", "valueA", "valueB", "diff", "diffPercent"],
        rows: c
            .common
            .iter()
            .map(|e| {
                vec![
                    text(&e.name),
                    count(e.value_a),
                    count(e.value_b),
                    Cell::Int(e.diff),
                    Cell::Float(e.diff_percent),
                ]
            })
            .collect(),
    };
    vec![
        common,
        name_counts(&format!("{name}_onlyA"), &c.only_a),
        name_counts(&format!("{name}_onlyB"), &c.only_b),
    ]
}

impl Tabular for AnalyticsSnapshot {
    fn tables(&self) -> Vec<Table> {
        vec![
            Table {
                name: "summary".to_owned(),
                header: vec!["total"],
                rows: vec![vec![count(self.total)]],
            },
            name_counts("domains", &self.domains),
            name_counts("authors", &self.authors),
            buckets(&self.periods),
            name_counts("places", &self.places),
            key_terms(&self.key_terms),
        ]
    }
}

impl Tabular for ComparisonResult {
    fn tables(&self) -> Vec<Table> {
        let mut tables = vec![];
        tables.extend(category_tables("domains", &self.domains));
        tables.extend(category_tables("authors", &self.authors));
        tables.extend(category_tables("places", &self.places));
        let t = &self.temporal;
        tables.push(Table {
            name: "temporal".to_owned(),
            header: vec!["period", "countA", "countB", "diff", "diffPercent"],
            rows: t
                .differences
                .iter()
                .map(|d| {
                    vec![
                        int(d.period),
                        count(d.count_a),
                        count(d.count_b),
                        Cell::Int(d.diff),
                        Cell::Float(d.diff_percent),
                    ]
                })
                .collect(),
        });
        tables.push(Table {
            name: "temporal_ranges".to_owned(),
            header: vec!["range", "start", "end"],
            rows: vec![
                vec![text("rangeA"), int(t.range_a.min), int(t.range_a.max)],
                vec![text("rangeB"), int(t.range_b.min), int(t.range_b.max)],
                vec![text("overlap"), int(t.overlap_start), int(t.overlap_end)],
            ],
        });
        tables
    }
}

pub fn write_json<T: Serialize, W: io::Write>(value: &T, writer: W, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(writer, value)?;
    } else {
        serde_json::to_writer_pretty(writer, value)?;
    }
    Ok(())
}

pub fn write_csv<W: io::Write>(table: &Table, writer: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(&table.header)?;
    for row in &table.rows {
        w.write_record(row.iter().map(|c| c.to_string()))?;
    }
    w.flush()?;
    Ok(())
}

/// A workbook with one worksheet per table.
pub fn build_workbook(tables: &[Table]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&table.name)
            .map_err(|e| errors::export_failed(&table.name, e))?;
        for (col, h) in table.header.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *h, &bold)?;
        }
        for (i, row) in table.rows.iter().enumerate() {
            let r = i as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                let c = col as u16;
                match cell {
                    Cell::Text(s) => sheet.write_string(r, c, s)?,
                    Cell::Int(x) => sheet.write_number(r, c, *x as f64)?,
                    Cell::Float(x) => sheet.write_number(r, c, *x)?,
                };
            }
        }
    }
    Ok(workbook)
}

/// Path of the CSV file that holds one table, next to `outfile`.
pub fn csv_path(outfile: &Path, table: &str) -> PathBuf {
    let stem = outfile
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    outfile.with_file_name(format!("{stem}_{table}.csv"))
}

/// Write `value` in the given format and return the files written.
///
/// CSV output goes to one file per table, named after `outfile`.
pub fn export<T>(
    value: &T,
    outfile: &str,
    format: ExportFormat,
    compact: bool,
) -> Result<Vec<PathBuf>>
where
    T: Serialize + Tabular,
{
    let outfile = Path::new(outfile);
    let written = match format {
        ExportFormat::Json => {
            let file = fs::File::create(outfile)?;
            write_json(value, io::BufWriter::new(file), compact)?;
            vec![outfile.to_path_buf()]
        }
        ExportFormat::Csv => {
            let mut written = vec![];
            for table in value.tables() {
                let path = csv_path(outfile, &table.name);
                let file = fs::File::create(&path)?;
                write_csv(&table, io::BufWriter::new(file))?;
                written.push(path);
            }
            written
        }
        ExportFormat::Xlsx => {
            let mut workbook = build_workbook(&value.tables())?;
            workbook
                .save(outfile)
                .map_err(|e| errors::export_failed(&outfile.to_string_lossy(), e))?;
            vec![outfile.to_path_buf()]
        }
    };
    for path in &written {
        info!(target: "concordance", "wrote: {}", path.display());
    }
    Ok(written)
}
