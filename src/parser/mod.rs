//! Parsers for the region and gene tables.

pub mod genes;
pub mod regions;
pub mod util;

pub use genes::{parse_gene_reader, parse_genes};
pub use regions::{parse_region_reader, parse_regions};
