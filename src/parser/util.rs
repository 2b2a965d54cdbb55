//! Shared helpers for the tab-delimited loaders.

use ahash::AHashMap;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ParseError;

/// Creates a buffered reader that automatically handles gzip-compressed files.
///
/// Files whose name ends in ".gz" are wrapped in a GzDecoder.
pub fn create_buffered_reader(file: File, path: &Path) -> Box<dyn BufRead + Send> {
    if path.to_string_lossy().ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Open `path` for buffered reading, labelling failures with `what`.
pub fn open_reader(path: &Path, what: &str) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", what, path.display()))?;
    Ok(create_buffered_reader(file, path))
}

/// Column positions taken from a `#`-prefixed header line.
#[derive(Debug, Clone)]
pub(crate) struct Columns {
    index: AHashMap<String, usize>,
}

impl Columns {
    /// Build the column map. With `strip_qualifier`, only the text after the
    /// last '.' of each entry is kept ("hg19.refGene.strand" -> "strand").
    /// The first occurrence of a repeated name wins.
    pub(crate) fn from_header(line: &str, strip_qualifier: bool) -> Self {
        let header = line.trim().trim_start_matches('#').trim();
        let mut index = AHashMap::new();

        for (i, entry) in header.split('\t').enumerate() {
            let name = if strip_qualifier {
                entry.rsplit('.').next().unwrap_or(entry)
            } else {
                entry
            };
            index.entry(name.to_string()).or_insert(i);
        }

        Columns { index }
    }

    pub(crate) fn require(&self, name: &str) -> Result<usize, ParseError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ParseError::UnknownColumn(name.to_string()))
    }
}

/// The fields of one data line, with its 1-based line number for errors.
pub(crate) struct Record<'a> {
    fields: Vec<&'a str>,
    line: usize,
}

impl<'a> Record<'a> {
    pub(crate) fn new(text: &'a str, line: usize) -> Self {
        Record {
            fields: text.trim().split('\t').collect(),
            line,
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn field(&self, column: usize) -> Result<&'a str, ParseError> {
        self.fields.get(column).copied().ok_or_else(|| {
            ParseError::malformed(
                self.line,
                format!("expected at least {} fields, found {}", column + 1, self.fields.len()),
            )
        })
    }

    pub(crate) fn integer(&self, column: usize, what: &str) -> Result<i64, ParseError> {
        let raw = self.field(column)?;
        raw.trim().parse().map_err(|_| {
            ParseError::malformed(self.line, format!("{} '{}' is not an integer", what, raw))
        })
    }
}
