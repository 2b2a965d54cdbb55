//! Core data structures for feature-finder.
//!
//! Every interval kind embeds a plain [`Interval`] value and exposes it
//! through the [`GenomicInterval`] trait, which is all the sweep engine needs.

use std::fmt;
use std::str::FromStr;

/// Strand orientation for genomic features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Positive,
    Negative,
}

/// Error type for parsing strand from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrandError;

impl fmt::Display for ParseStrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid strand: expected '+' or '-'")
    }
}

impl std::error::Error for ParseStrandError {}

impl FromStr for Strand {
    type Err = ParseStrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Positive),
            "-" => Ok(Strand::Negative),
            _ => Err(ParseStrandError),
        }
    }
}

impl Strand {
    /// Convert strand to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Positive => "+",
            Strand::Negative => "-",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named genomic range on one chromosome.
///
/// Coordinates are not validated: `left <= right` is expected of the input
/// but never checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub chrom: String,
    pub left: i64,
    pub right: i64,
    pub name: String,
}

impl Interval {
    /// Create a new interval.
    pub fn new(chrom: impl Into<String>, left: i64, right: i64, name: impl Into<String>) -> Self {
        Interval {
            chrom: chrom.into(),
            left,
            right,
            name: name.into(),
        }
    }
}

/// Anything that occupies a genomic interval.
///
/// Implementors only provide [`GenomicInterval::interval`]; the accessors and
/// the ordering key are derived from it.
pub trait GenomicInterval {
    fn interval(&self) -> &Interval;

    fn chrom(&self) -> &str {
        &self.interval().chrom
    }

    fn left(&self) -> i64 {
        self.interval().left
    }

    fn right(&self) -> i64 {
        self.interval().right
    }

    fn name(&self) -> &str {
        &self.interval().name
    }

    /// Key used for sorting: chromosome compared as a plain string, so
    /// "chr10" sorts before "chr2".
    fn sort_key(&self) -> (&str, i64, i64) {
        let iv = self.interval();
        (iv.chrom.as_str(), iv.left, iv.right)
    }
}

impl GenomicInterval for Interval {
    fn interval(&self) -> &Interval {
        self
    }
}

/// A user-supplied region of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub interval: Interval,
}

impl Region {
    /// Create a new region.
    pub fn new(chrom: impl Into<String>, left: i64, right: i64, name: impl Into<String>) -> Self {
        Region {
            interval: Interval::new(chrom, left, right, name),
        }
    }
}

impl GenomicInterval for Region {
    fn interval(&self) -> &Interval {
        &self.interval
    }
}

/// An exon within a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exon {
    pub start: i64,
    pub end: i64,
}

impl Exon {
    /// Create a new exon with start and end coordinates.
    pub fn new(start: i64, end: i64) -> Self {
        Exon { start, end }
    }
}

/// A reference gene annotation.
///
/// The interval spans the transcript (`txStart`..`txEnd`) and is named after
/// the gene symbol. Exons are carried along untouched by the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    pub interval: Interval,
    pub strand: Strand,
    pub exon_count: usize,
    pub exons: Vec<Exon>,
    pub refseq: String,
}

impl Gene {
    /// Create a new gene. `exons.len()` is expected to equal `exon_count`.
    pub fn new(
        interval: Interval,
        strand: Strand,
        exon_count: usize,
        exons: Vec<Exon>,
        refseq: impl Into<String>,
    ) -> Self {
        Gene {
            interval,
            strand,
            exon_count,
            exons,
            refseq: refseq.into(),
        }
    }
}

impl GenomicInterval for Gene {
    fn interval(&self) -> &Interval {
        &self.interval
    }
}

/// The closed set of reference feature kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// A feature with no substructure.
    Bare(Interval),
    Gene(Gene),
}

impl Feature {
    /// Create a bare feature.
    pub fn bare(chrom: impl Into<String>, left: i64, right: i64, name: impl Into<String>) -> Self {
        Feature::Bare(Interval::new(chrom, left, right, name))
    }

    fn kind(&self) -> &'static str {
        match self {
            Feature::Bare(_) => "Feature",
            Feature::Gene(_) => "Gene",
        }
    }
}

impl GenomicInterval for Feature {
    fn interval(&self) -> &Interval {
        match self {
            Feature::Bare(interval) => interval,
            Feature::Gene(gene) => &gene.interval,
        }
    }
}

impl From<Gene> for Feature {
    fn from(gene: Gene) -> Self {
        Feature::Gene(gene)
    }
}

fn write_interval(f: &mut fmt::Formatter<'_>, kind: &str, iv: &Interval) -> fmt::Result {
    write!(
        f,
        "{} {} @ {} ({},{})",
        kind, iv.name, iv.chrom, iv.left, iv.right
    )
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(f, "Interval", self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(f, "Region", &self.interval)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(f, "Gene", &self.interval)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(f, self.kind(), self.interval())
    }
}
