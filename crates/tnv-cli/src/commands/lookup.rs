//! `tnv lookup` command implementation
//!
//! Resolves names given on the command line and prints one verdict per
//! line, colorized the same way a highlighted spreadsheet would be.

use colored::Colorize;
use tnv_common::types::{MatchOutcome, RowClassification, RowResult};

use crate::error::Result;
use crate::LookupArgs;

/// Resolve each query and print its verdict.
pub fn run(args: &LookupArgs) -> Result<()> {
    let validator = super::build_validator(
        &args.nodes,
        &args.names,
        args.target_taxid,
        args.scorer,
    )?;

    for (i, query) in args.queries.iter().enumerate() {
        let result = validator.validate_one(i, query)?;
        println!("{}", render(&result));
    }

    Ok(())
}

fn render(result: &RowResult) -> String {
    let input = &result.input;
    match result.classification {
        RowClassification::ExactValid => {
            format!("{} \"{}\"", "valid".green().bold(), input)
        }
        RowClassification::ExactWrongBranch => {
            format!(
                "{} \"{}\" is not on the required branch",
                "wrong-branch".red().bold(),
                input
            )
        }
        RowClassification::AutoCorrectable => format!(
            "{} \"{}\" with \"{}\"",
            "replace".blue().bold(),
            input,
            result.outcome.canonical_name().unwrap_or("")
        ),
        RowClassification::WrongBranchAfterCorrection => format!(
            "{} \"{}\" resolves to \"{}\", which is not on the required branch",
            "wrong-branch".red().bold(),
            input,
            result.outcome.canonical_name().unwrap_or("")
        ),
        RowClassification::NeedsManualReview => {
            let candidates = match &result.outcome {
                MatchOutcome::Ambiguous { candidates } => candidates
                    .iter()
                    .map(|c| format!("\"{}\" ({})", c.canonical, c.taxid))
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => String::new(),
            };
            format!(
                "{} \"{}\" could be any of: {}",
                "ambiguous".yellow().bold(),
                input,
                candidates
            )
        }
        RowClassification::SuggestedCandidate => format!(
            "{} \"{}\" instead of \"{}\"",
            "suggest".yellow().bold(),
            result.outcome.canonical_name().unwrap_or(""),
            input
        ),
        RowClassification::SuggestedWrongBranch => format!(
            "{} \"{}\" resembles \"{}\", which is not on the required branch",
            "wrong-branch".red().bold(),
            input,
            result.outcome.canonical_name().unwrap_or("")
        ),
        RowClassification::Unrecognized => {
            format!("{} \"{}\"", "no-match".red().bold(), input)
        }
    }
}
