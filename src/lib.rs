//! feature-finder - annotate genomic regions with overlapping genes.
//!
//! Given a list of regions of interest and a reference gene annotation, both
//! sorted by `(chromosome, start, end)`, this library reports for every
//! region the genes overlapping it and by how many base pairs.
//!
//! # Features
//!
//! - Header-driven parsing of region and refGene-style gene tables (with gzip support)
//! - Linear sweep over both sorted lists, no all-pairs comparison
//! - Optional active-set sweep that also reports genes nested in wider genes
//! - Pluggable observer for tracing sweep checkpoints
//! - TSV and plain-sentence output
//!
//! # Example
//!
//! ```ignore
//! use feature_finder::config::Config;
//! use feature_finder::matcher::find_features;
//! use feature_finder::output::format_overlap_info;
//! use feature_finder::parser::{parse_genes, parse_regions};
//! use std::path::Path;
//!
//! let genes = parse_genes(Path::new("genes.txt"))?;
//! let regions = parse_regions(Path::new("regions.txt"))?;
//!
//! let found = find_features(&regions, &genes, Config::default());
//! for (index, _) in found.iter() {
//!     for (gene, _) in found.genes_for(index, &genes) {
//!         println!("{}", format_overlap_info(&regions[index], gene));
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod types;

pub use config::{Config, OverlapRule, SweepStrategy};
pub use error::ParseError;
pub use matcher::{find_features, FeatureMap, Hit};
pub use types::{Exon, Feature, Gene, GenomicInterval, Interval, Region, Strand};
