use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use concordance_stats::categories;
use concordance_stats::driver;
use concordance_stats::errors::Result;
use concordance_stats::input;
use concordance_stats::output::{self, NameCount};
use concordance_stats::periods::{self, BUCKET_WIDTH};
use concordance_stats::terms;
use itertools::Itertools;
use log::error;
use std::process;

/// Print a summary of a concordance
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (JSON)
    infile: String,
    /// Only consider records with field=value; repeatable
    #[arg(long)]
    restrict: Vec<String>,
    /// How many entries to show per category
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Word cloud term limit
    #[arg(long, default_value_t = 30)]
    words: usize,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn print_counts(title: &str, counts: &[NameCount], top: usize) {
    println!("{}: {} distinct", title, counts.len());
    for c in counts.iter().take(top) {
        println!("- {}: {}", c.name, c.value);
    }
    if counts.len() > top {
        println!("- ...");
    }
}

fn fill(line: &str) -> String {
    let options = textwrap::Options::new(78).subsequent_indent("  ");
    textwrap::fill(line, &options)
}

fn stat(args: &Args) -> Result<()> {
    let restrictions = categories::parse_restrictions(&args.restrict)?;
    let input = input::read_input(&args.infile)?;
    let records = categories::restrict(&input.records, &restrictions);
    let snapshot = driver::analyze(&records);

    println!("records: {}", snapshot.total);
    println!("works: {}", periods::works(&records).len());
    let range = periods::span(&snapshot.periods);
    if snapshot.periods.is_empty() {
        println!("periods: none dated");
    } else {
        println!(
            "periods: {} to {}",
            output::pretty_bucket(range.min, BUCKET_WIDTH),
            output::pretty_bucket(range.max, BUCKET_WIDTH)
        );
        for p in &snapshot.periods {
            println!(
                "- {}: {} works",
                output::pretty_bucket(p.period, BUCKET_WIDTH),
                p.count
            );
        }
    }
    print_counts("domains", &snapshot.domains, args.top);
    print_counts("authors", &snapshot.authors, args.top);
    print_counts("places", &snapshot.places, args.top);

    let key_terms = snapshot
        .key_terms
        .iter()
        .map(|t| format!("{} ({})", t.term, t.count))
        .join(", ");
    println!("{}", fill(&format!("key terms: {key_terms}")));

    let cloud = terms::word_frequency(&records, Some(args.words))
        .iter()
        .map(|c| format!("{} ({})", c.name, c.value))
        .join(", ");
    println!("{}", fill(&format!("word cloud: {cloud}")));
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match stat(&args) {
        Ok(()) => (),
        Err(e) => {
            error!(target: "concordance", "{e}");
            process::exit(1);
        }
    }
}
