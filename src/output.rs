//! Output formatting for feature-finder results.
//!
//! Two formats are supported: a tab-separated table with one line per
//! region/gene pair, and plain sentences of the form
//! "`<region> overlaps <gene> by <N> base pairs`".

use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::matcher::relation::overlap_length;
use crate::matcher::sweep::FeatureMap;
use crate::types::{Gene, GenomicInterval, Region};

const HEADER: &str = "Region\tChromosome\tStart\tEnd\tGene\tRefSeq\tStrand\tGeneStart\tGeneEnd\tOverlap";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Summary,
}

/// Error type for parsing output format from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputFormatError;

impl fmt::Display for ParseOutputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid output format: expected 'tsv' or 'summary'")
    }
}

impl std::error::Error for ParseOutputFormatError {}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(ParseOutputFormatError),
        }
    }
}

/// Human-readable description of one overlapping pair.
pub fn format_overlap_info<R, G>(region: &R, gene: &G) -> String
where
    R: GenomicInterval + ?Sized,
    G: GenomicInterval + ?Sized,
{
    format!(
        "{} overlaps {} by {} base pairs",
        region.name(),
        gene.name(),
        overlap_length(region, gene)
    )
}

/// Write the TSV header.
pub fn write_header<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    Ok(())
}

/// Format a single TSV line for a region-gene pair.
pub fn format_output_line(region: &Region, gene: &Gene, overlap: i64) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        region.name(),
        region.chrom(),
        region.left(),
        region.right(),
        gene.name(),
        gene.refseq,
        gene.strand,
        gene.left(),
        gene.right(),
        overlap
    )
}

/// TSV line for a region without overlapping genes.
pub fn format_unmatched_line(region: &Region) -> String {
    format!(
        "{}\t{}\t{}\t{}\t.\t.\t.\t.\t.\t0",
        region.name(),
        region.chrom(),
        region.left(),
        region.right()
    )
}

/// Write all results in region order, returning the number of lines written
/// (header excluded).
///
/// With `all_regions`, TSV output includes a placeholder line for every region
/// without hits; summary output ignores it.
pub fn write_results<W: Write>(
    writer: &mut W,
    regions: &[Region],
    genes: &[Gene],
    found: &FeatureMap,
    format: OutputFormat,
    all_regions: bool,
) -> Result<usize> {
    if format == OutputFormat::Tsv {
        write_header(writer)?;
    }

    let mut lines = 0;
    for (index, hits) in found.iter() {
        let region = &regions[index];

        if hits.is_empty() {
            if all_regions && format == OutputFormat::Tsv {
                writeln!(writer, "{}", format_unmatched_line(region))?;
                lines += 1;
            }
            continue;
        }

        for (gene, overlap) in found.genes_for(index, genes) {
            match format {
                OutputFormat::Tsv => {
                    writeln!(writer, "{}", format_output_line(region, gene, overlap))?
                }
                OutputFormat::Summary => writeln!(writer, "{}", format_overlap_info(region, gene))?,
            }
            lines += 1;
        }
    }

    Ok(lines)
}
