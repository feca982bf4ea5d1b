use anyhow::{Context, Result};
use clap::Parser;
use cliclack::log;
use concordance_stats::input::{self, ConcordanceRecord, Field, Input};
use concordance_stats::periods;
use itertools::Itertools;
use std::collections::HashMap;
use std::{fs, io};

/// Interactively select which concordance records to keep
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input file (JSON)
    infile: String,
    /// Output file (JSON)
    outfile: String,
}

#[derive(Clone, PartialEq, Eq)]
enum How {
    Remove,
    Keep,
}

#[derive(Clone, PartialEq, Eq)]
enum Action {
    Undo,
    Restrict(How),
    Save,
    Quit,
}

struct FieldSelection {
    field: Field,
    values: Vec<String>,
}

fn select_values(records: &[ConcordanceRecord]) -> Result<Option<FieldSelection>> {
    let nrecords = records.len();
    loop {
        let mut items = vec![];
        items.push((None, "Oops, go back".to_owned(), ""));
        for field in Field::ALL {
            let distinct = records.iter().map(|r| field.label(r)).unique().count();
            items.push((Some(field), format!("{field} ({distinct} values)"), ""));
        }
        let choice = cliclack::select("Select by which field?")
            .items(&items)
            .interact()?;
        match choice {
            None => return Ok(None),
            Some(field) => {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for r in records {
                    *counts.entry(field.label(r)).or_default() += 1;
                }
                let mut items = vec![];
                for (&val, &count) in counts.iter().sorted() {
                    items.push((val, format!("{val} ({count}/{nrecords} records)"), ""));
                }
                let choices = cliclack::multiselect("Select which values (or none to go back)?")
                    .items(&items)
                    .required(false)
                    .interact()?;
                if !choices.is_empty() {
                    return Ok(Some(FieldSelection {
                        field,
                        values: choices.iter().map(|&s| s.to_owned()).collect_vec(),
                    }));
                }
            }
        }
    }
}

fn summarize(records: &[ConcordanceRecord]) -> String {
    let nrecords = records.len();
    let nworks = periods::works(records).len();
    format!("{nrecords} records in {nworks} works")
}

fn matches(sel: &FieldSelection, record: &ConcordanceRecord) -> bool {
    let label = sel.field.label(record);
    sel.values.iter().any(|v| v == label)
}

fn restrict_records(
    how: &How,
    sel: &FieldSelection,
    records: Vec<ConcordanceRecord>,
) -> Vec<ConcordanceRecord> {
    records
        .into_iter()
        .filter(|r| {
            let m = matches(sel, r);
            match how {
                How::Keep => m,
                How::Remove => !m,
            }
        })
        .collect_vec()
}

fn main() -> Result<()> {
    let args = Args::parse();
    cliclack::intro("concordance-filter")?;
    log::info(format!("Reading {}...", args.infile))?;
    let indata =
        fs::read_to_string(&args.infile).with_context(|| format!("cannot read {}", args.infile))?;
    let input = input::parse_input(&indata)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("cannot parse {}", args.infile))?;
    let mut restrictions: Vec<(How, FieldSelection)> = vec![];
    loop {
        let mut records = input.records.clone();
        let mut stack = vec![];
        let options = textwrap::Options::new(70).subsequent_indent(" ");
        stack.push(format!("{} ← input", summarize(&records)));
        for (how, sel) in &restrictions {
            records = restrict_records(how, sel, records);
            let line = format!(
                "{} ← {} records where {} is {}",
                summarize(&records),
                match how {
                    How::Keep => "keep",
                    How::Remove => "remove",
                },
                sel.field,
                sel.values.iter().map(|x| format!("'{x}'")).join(" or "),
            );
            stack.push(textwrap::fill(&line, &options));
        }

        cliclack::note("Restrictions", stack.join("\n"))?;

        let mut items = vec![];
        if !restrictions.is_empty() {
            items.push((Action::Undo, "Remove last restriction", ""));
        }
        items.push((
            Action::Restrict(How::Remove),
            "Select which records to remove",
            "",
        ));
        items.push((
            Action::Restrict(How::Keep),
            "Select which records to keep",
            "",
        ));
        items.push((
            Action::Save,
            "Write current restrictions to the output file",
            "",
        ));
        items.push((Action::Quit, "Quit", ""));
        let choice = cliclack::select("Action?").items(&items).interact()?;
        match choice {
            Action::Quit => break,
            Action::Undo => {
                restrictions.pop();
            }
            Action::Save => {
                let filename: String = cliclack::input("file name")
                    .default_input(&args.outfile)
                    .interact()?;
                let file = fs::File::create(&filename)?;
                let writer = io::BufWriter::new(file);
                let new_input = Input { records };
                serde_json::to_writer_pretty(writer, &new_input)?;
                log::info(format!("Wrote to {}", filename))?;
            }
            Action::Restrict(how) => match select_values(&records)? {
                None => (),
                Some(sel) => restrictions.push((how, sel)),
            },
        }
    }
    cliclack::outro("Bye!")?;
    Ok(())
}
