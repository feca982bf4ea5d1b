use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use concordance_stats::categories;
use concordance_stats::driver;
use concordance_stats::errors::Result;
use concordance_stats::export::{self, ExportFormat};
use concordance_stats::input;
use concordance_stats::output;
use log::{error, info};
use std::process;

/// Statistics of a concordance: domains, authors, places, periods and key terms
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (JSON)
    infile: String,
    /// Output file
    outfile: String,
    /// Only consider records with field=value (author, domain, period, place or title); repeatable
    #[arg(long)]
    restrict: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    let restrictions = categories::parse_restrictions(&args.restrict)?;
    let input = input::read_input(&args.infile)?;
    let records = categories::restrict(&input.records, &restrictions);
    let snapshot = driver::analyze(&records);
    export::export(&snapshot, &args.outfile, args.format, args.compact)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match output::store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "concordance", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "concordance", "{e}");
                        error!(target: "concordance", "{e2}");
                    }
                },
                None => error!(target: "concordance", "{e}"),
            }
            process::exit(1);
        }
    }
}
