//! Gene annotation table parser.
//!
//! Reads UCSC refGene-style tables exported with a `#` header line. Columns
//! are located by name, so their order in the file does not matter.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::BufRead;
use std::path::Path;

use crate::error::ParseError;
use crate::matcher::relation::sort_intervals;
use crate::parser::util::{open_reader, Columns, Record};
use crate::types::{Exon, Gene, Interval, Strand};

struct GeneColumns {
    chrom: usize,
    strand: usize,
    tx_start: usize,
    tx_end: usize,
    exon_count: usize,
    exon_starts: usize,
    exon_ends: usize,
    gene_symbol: usize,
    refseq: usize,
}

impl GeneColumns {
    fn locate(columns: &Columns) -> Result<Self, ParseError> {
        Ok(GeneColumns {
            chrom: columns.require("chrom")?,
            strand: columns.require("strand")?,
            tx_start: columns.require("txStart")?,
            tx_end: columns.require("txEnd")?,
            exon_count: columns.require("exonCount")?,
            exon_starts: columns.require("exonStarts")?,
            exon_ends: columns.require("exonEnds")?,
            gene_symbol: columns.require("geneSymbol")?,
            refseq: columns.require("refseq")?,
        })
    }
}

/// Parse a gene table and return its genes sorted by position.
///
/// Supports both plain text and gzip-compressed files.
pub fn parse_genes(path: &Path) -> Result<Vec<Gene>> {
    let reader = open_reader(path, "gene")?;
    parse_gene_reader(reader)
        .with_context(|| format!("Failed to parse gene file: {}", path.display()))
}

/// Parse a gene table from a reader.
///
/// The first line must be the `#` header.
pub fn parse_gene_reader<R: BufRead>(reader: R) -> Result<Vec<Gene>, ParseError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(ParseError::MissingHeader),
    };
    if !header.starts_with('#') {
        return Err(ParseError::MissingHeader);
    }
    let columns = GeneColumns::locate(&Columns::from_header(&header, true))?;

    let mut genes = Vec::new();
    for (i, line_result) in lines.enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        let record = Record::new(&line, i + 2);
        genes.push(parse_gene(&record, &columns)?);
    }

    debug!("Parsed {} genes", genes.len());
    sort_intervals(&mut genes);
    Ok(genes)
}

fn parse_gene(record: &Record<'_>, columns: &GeneColumns) -> Result<Gene, ParseError> {
    let line = record.line();

    let chrom = record.field(columns.chrom)?;
    let strand_str = record.field(columns.strand)?;
    let strand: Strand = strand_str
        .parse()
        .map_err(|_| ParseError::malformed(line, format!("invalid strand '{}'", strand_str)))?;
    let left = record.integer(columns.tx_start, "txStart")?;
    let right = record.integer(columns.tx_end, "txEnd")?;

    let exon_count = record.integer(columns.exon_count, "exonCount")?;
    let starts = parse_coordinate_list(record.field(columns.exon_starts)?, line, "exonStarts")?;
    let ends = parse_coordinate_list(record.field(columns.exon_ends)?, line, "exonEnds")?;

    if starts.len() != ends.len() {
        return Err(ParseError::malformed(
            line,
            format!(
                "{} exon starts but {} exon ends",
                starts.len(),
                ends.len()
            ),
        ));
    }
    if exon_count < 0 || exon_count as usize != starts.len() {
        return Err(ParseError::malformed(
            line,
            format!(
                "exonCount {} does not match {} exons listed",
                exon_count,
                starts.len()
            ),
        ));
    }

    let name = record.field(columns.gene_symbol)?.trim_end_matches(',');
    let refseq = record.field(columns.refseq)?.trim_end_matches(',');

    if left > right {
        warn!("Gene {} at line {} has txStart > txEnd", name, line);
    }

    let exons = starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| Exon::new(start, end))
        .collect();

    Ok(Gene::new(
        Interval::new(chrom, left, right, name),
        strand,
        exon_count as usize,
        exons,
        refseq,
    ))
}

/// Parse a comma-separated coordinate list such as "10,16,".
fn parse_coordinate_list(field: &str, line: usize, what: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = field.trim().trim_end_matches(',');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|value| {
            value.trim().parse().map_err(|_| {
                ParseError::malformed(line, format!("{} value '{}' is not an integer", what, value))
            })
        })
        .collect()
}
