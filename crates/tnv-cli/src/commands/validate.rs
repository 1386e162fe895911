//! `tnv validate` command implementation
//!
//! Batch validation of one column of a delimited file. Per-row misses are
//! data, not failures: the command exits nonzero only when the reference
//! data is unsound or the input cannot be read.

use std::fs::File;
use std::io::BufWriter;

use tracing::info;

use crate::error::{CliError, Result};
use crate::report::{self, Report, ReportFormat};
use crate::source::{DelimitedColumnSource, NamedColumnSource};
use crate::ValidateArgs;

/// Validate the requested column and write the report.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let validator = super::build_validator(
        &args.nodes,
        &args.names,
        args.target_taxid,
        args.scorer,
    )?;

    let source = DelimitedColumnSource::new(&args.input, delimiter_byte(args.delimiter)?);
    let values = source.rows_for_header(&args.column)?;
    info!(
        rows = values.len(),
        column = %args.column,
        input = %args.input.display(),
        "column extracted"
    );

    let results = validator.validate_batch(&values)?;

    match &args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            write_report(args, &results, writer)?;
            info!(report = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            write_report(args, &results, stdout.lock())?;
        }
    }

    if let Some(path) = &args.accepted_list {
        let writer = BufWriter::new(File::create(path)?);
        report::write_accepted_list(&results, writer)?;
        info!(accepted_list = %path.display(), "accepted names written");
    }

    report::print_summary(&results);
    Ok(())
}

fn write_report<W: std::io::Write>(
    args: &ValidateArgs,
    results: &[tnv_common::types::RowResult],
    writer: W,
) -> Result<()> {
    match args.format {
        ReportFormat::Csv => report::write_csv(results, writer),
        ReportFormat::Json => {
            let report = Report::new(tnv_common::types::TaxId(args.target_taxid), results);
            report::write_json(&report, writer)
        }
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CliError::config(format!(
            "delimiter must be a single ASCII character, got {delimiter:?}"
        )))
    }
}
