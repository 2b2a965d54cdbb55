//! CLI entry point for feature-finder.
//!
//! Loads the gene and region tables, sweeps them and writes one line per
//! overlapping pair.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use feature_finder::config::{Config, OverlapRule, SweepStrategy};
use feature_finder::matcher::find_features_with_observer;
use feature_finder::matcher::sweep::LogObserver;
use feature_finder::output::{write_results, OutputFormat};
use feature_finder::parser::{parse_genes, parse_regions};

/// Annotate genomic regions with overlapping reference genes.
///
/// Both inputs are tab-delimited tables with a '#'-prefixed header line.
#[derive(Parser, Debug)]
#[command(name = "feature-finder")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gene annotation table (refGene-style, required)
    #[arg(short = 'g', long = "genes")]
    genes: PathBuf,

    /// Region table (required)
    #[arg(short = 'r', long = "regions")]
    regions: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Sweep strategy: cursor or active-set
    #[arg(short = 's', long = "strategy", default_value = "cursor")]
    strategy: String,

    /// Overlap rule: strict or inclusive
    #[arg(short = 'm', long = "overlap", default_value = "strict")]
    overlap: String,

    /// Output format: tsv or summary
    #[arg(short = 'f', long = "format", default_value = "tsv")]
    format: String,

    /// Also report regions without overlapping genes (tsv only)
    #[arg(long = "all-regions")]
    all_regions: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still takes precedence when set
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Validate inputs
    if !args.genes.exists() {
        bail!("Gene file not found: {}", args.genes.display());
    }
    if !args.regions.exists() {
        bail!("Region file not found: {}", args.regions.display());
    }

    let strategy = SweepStrategy::from_str(&args.strategy)
        .context("Strategy can only be one of the following: cursor or active-set")?;
    let overlap_rule = OverlapRule::from_str(&args.overlap)
        .context("Overlap rule can only be one of the following: strict or inclusive")?;
    let format = OutputFormat::from_str(&args.format)
        .context("Format can only be one of the following: tsv or summary")?;

    let config = Config::new()
        .with_strategy(strategy)
        .with_overlap_rule(overlap_rule);

    info!("Parsing gene file: {}", args.genes.display());
    let genes = parse_genes(&args.genes)?;
    info!("Loaded {} genes", genes.len());

    info!("Parsing region file: {}", args.regions.display());
    let regions = parse_regions(&args.regions)?;
    info!("Loaded {} regions", regions.len());

    let started = Instant::now();
    let found = find_features_with_observer(&regions, &genes, config, LogObserver);
    info!(
        "Found {} overlapping pairs in {:.2} ms ({:?} sweep)",
        found.pair_count(),
        started.elapsed().as_secs_f64() * 1000.0,
        config.strategy
    );

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            Box::new(File::create(path).context("Failed to create output file")?)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    let lines = write_results(
        &mut writer,
        &regions,
        &genes,
        &found,
        format,
        args.all_regions,
    )?;
    writer.flush()?;

    info!("Done! ({} lines)", lines);
    Ok(())
}
