//! Region table parser.
//!
//! Any preamble before the first `#` line is ignored; that line names the
//! columns and everything after it is data.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::BufRead;
use std::path::Path;

use crate::error::ParseError;
use crate::matcher::relation::sort_intervals;
use crate::parser::util::{open_reader, Columns, Record};
use crate::types::Region;

/// Parse a region table and return its regions sorted by position.
///
/// Supports both plain text and gzip-compressed files.
pub fn parse_regions(path: &Path) -> Result<Vec<Region>> {
    let reader = open_reader(path, "region")?;
    parse_region_reader(reader)
        .with_context(|| format!("Failed to parse region file: {}", path.display()))
}

/// Parse a region table from a reader.
pub fn parse_region_reader<R: BufRead>(reader: R) -> Result<Vec<Region>, ParseError> {
    let mut lines = reader.lines().enumerate();

    let columns = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if line.starts_with('#') {
                    break Columns::from_header(&line, false);
                }
            }
            None => return Err(ParseError::MissingHeader),
        }
    };
    let chrom = columns.require("Chromosome")?;
    let start = columns.require("StartPosition")?;
    let end = columns.require("EndPosition")?;
    let name = columns.require("RegionName")?;

    let mut regions = Vec::new();
    for (i, line_result) in lines {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::new(&line, i + 1);
        let region = Region::new(
            record.field(chrom)?,
            record.integer(start, "StartPosition")?,
            record.integer(end, "EndPosition")?,
            record.field(name)?,
        );
        if region.interval.left > region.interval.right {
            warn!(
                "Region {} at line {} has StartPosition > EndPosition",
                region.interval.name,
                record.line()
            );
        }
        regions.push(region);
    }

    debug!("Parsed {} regions", regions.len());
    sort_intervals(&mut regions);
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomicInterval;
    use std::io::BufReader;

    fn parse(content: &str) -> Result<Vec<Region>, ParseError> {
        parse_region_reader(BufReader::new(content.as_bytes()))
    }

    #[test]
    fn test_parse_regions_with_preamble() {
        let content = "track name=peaks\nsome other note\n\
                       #Chromosome\tStartPosition\tEndPosition\tRegionName\n\
                       chr1\t100\t200\tRegion_100_200\n\
                       chr1\t40\t142\tRegion_40_142\n";
        let regions = parse(content).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name(), "Region_40_142");
        assert_eq!(regions[0].sort_key(), ("chr1", 40, 142));
        assert_eq!(regions[1].name(), "Region_100_200");
    }

    #[test]
    fn test_parse_regions_extra_columns() {
        let content = "#RegionName\tScore\tChromosome\tStartPosition\tEndPosition\n\
                       peak1\t9.5\tchr2\t10\t20\n";
        let regions = parse(content).unwrap();
        assert_eq!(regions[0], Region::new("chr2", 10, 20, "peak1"));
    }

    #[test]
    fn test_missing_header() {
        let err = parse("chr1\t100\t200\tr1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader));
    }

    #[test]
    fn test_unknown_column() {
        let err = parse("#Chromosome\tStart\tEnd\tRegionName\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownColumn(ref c) if c == "StartPosition"));
    }

    #[test]
    fn test_malformed_coordinate_line_number() {
        let content = "note\n#Chromosome\tStartPosition\tEndPosition\tRegionName\n\
                       chr1\t1\t2\tok\n\
                       chr1\tx\t2\tbad\n";
        let err = parse(content).unwrap_err();
        assert!(matches!(err, ParseError::MalformedInterval { line: 4, .. }));
    }
}
