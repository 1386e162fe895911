//! Report writers for validation results
//!
//! Three renderings of the same row results: a delimited report (one
//! record per input row, for downstream highlighting), a JSON document
//! with a run summary, and a plain list of accepted canonical names for
//! building spreadsheet lookup ranges.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::Table;
use serde::Serialize;
use tnv_common::types::{LineageStatus, RowClassification, RowResult, TaxId};

use crate::error::Result;

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One delimited record per input row
    #[default]
    Csv,
    /// Full document with run metadata and summary counts
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Per-classification row counts for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub counts: BTreeMap<RowClassification, usize>,
}

impl Summary {
    pub fn from_rows(rows: &[RowResult]) -> Self {
        let mut counts = BTreeMap::new();
        for row in rows {
            *counts.entry(row.classification).or_insert(0) += 1;
        }
        Self {
            total: rows.len(),
            counts,
        }
    }
}

/// JSON report document.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub target: TaxId,
    pub summary: Summary,
    pub rows: &'a [RowResult],
}

impl<'a> Report<'a> {
    pub fn new(target: TaxId, rows: &'a [RowResult]) -> Self {
        Self {
            generated_at: Utc::now(),
            target,
            summary: Summary::from_rows(rows),
            rows,
        }
    }
}

/// Write the delimited report. Row numbers are 1-based data-row positions
/// so they line up with what a reviewer sees below the header in the
/// source sheet.
pub fn write_csv<W: Write>(rows: &[RowResult], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([
        "row",
        "input",
        "classification",
        "taxid",
        "canonical_name",
        "suggestions",
    ])?;

    for row in rows {
        out.write_record([
            (row.row + 1).to_string(),
            row.input.clone(),
            row.classification.to_string(),
            row.outcome
                .resolved_taxid()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            row.outcome.canonical_name().unwrap_or("").to_string(),
            row.outcome.suggestions().join("; "),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Write the JSON report document.
pub fn write_json<W: Write>(report: &Report<'_>, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Sorted, de-duplicated canonical names of every row that resolved and
/// passed lineage verification.
pub fn accepted_names(rows: &[RowResult]) -> Vec<&str> {
    let mut names: Vec<&str> = rows
        .iter()
        .filter(|r| r.lineage == LineageStatus::Pass)
        .filter_map(|r| r.outcome.canonical_name())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Write the accepted-names list, one name per line.
pub fn write_accepted_list<W: Write>(rows: &[RowResult], mut writer: W) -> Result<()> {
    for name in accepted_names(rows) {
        writeln!(writer, "{name}")?;
    }
    Ok(())
}

/// Print the run summary to stderr, keeping stdout free for the report.
pub fn print_summary(rows: &[RowResult]) {
    let summary = Summary::from_rows(rows);
    let acceptable = rows
        .iter()
        .filter(|r| r.classification.is_acceptable())
        .count();

    let mut table = Table::new();
    table.set_header(vec!["Classification", "Rows"]);
    for (classification, count) in &summary.counts {
        table.add_row(vec![classification.to_string(), count.to_string()]);
    }

    eprintln!();
    eprintln!("{}", "Validation Summary:".cyan().bold());
    eprintln!("{table}");
    eprintln!(
        "  {} of {} rows acceptable without review",
        acceptable.to_string().green().bold(),
        summary.total
    );
}
