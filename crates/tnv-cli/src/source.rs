//! Column extraction from delimited spreadsheet exports
//!
//! The validator consumes one column of values identified by its header
//! title. That capability is an interface so other file formats (xlsx
//! exports, database extracts) can slot in without touching the commands.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// A source of spreadsheet-like rows addressable by column header.
pub trait NamedColumnSource {
    /// Every value in the column whose header cell equals `title`, in file
    /// order. Blank cells are returned as empty strings so that row
    /// positions survive into the report.
    fn rows_for_header(&self, title: &str) -> Result<Vec<String>>;
}

/// Column source over a delimited text file (CSV, TSV).
///
/// The header row does not have to be the first row of the file; the
/// first row containing a cell equal to `title` is treated as the header,
/// and everything below it as data. Sheets exported from spreadsheet
/// tools often carry banner rows above the real header.
#[derive(Debug, Clone)]
pub struct DelimitedColumnSource {
    path: PathBuf,
    delimiter: u8,
}

impl DelimitedColumnSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

impl NamedColumnSource for DelimitedColumnSource {
    fn rows_for_header(&self, title: &str) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut column: Option<usize> = None;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            match column {
                Some(i) => rows.push(record.get(i).unwrap_or("").to_string()),
                None => column = record.iter().position(|cell| cell == title),
            }
        }

        match column {
            Some(_) => Ok(rows),
            None => Err(CliError::ColumnNotFound {
                column: title.to_string(),
                path: self.path.clone(),
            }),
        }
    }
}
