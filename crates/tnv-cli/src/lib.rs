//! TNV CLI Library
//!
//! Command-line interface for validating taxon names against the NCBI
//! reference taxonomy.
//!
//! # Overview
//!
//! - **Batch validation**: check one column of a delimited spreadsheet
//!   export and produce a per-row report (`tnv validate`)
//! - **Ad-hoc lookup**: resolve names given on the command line
//!   (`tnv lookup`)
//!
//! Reference data comes from the NCBI taxdump flat files; download from
//! <https://ftp.ncbi.nih.gov/pub/taxonomy/taxdmp.zip>.

pub mod commands;
pub mod error;
pub mod report;
pub mod source;

// Re-export commonly used types
pub use error::{CliError, Result};
pub use report::ReportFormat;
pub use source::{DelimitedColumnSource, NamedColumnSource};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tnv_core::score::{CandidateScorer, ContainmentScorer, JaroWinklerScorer};

/// TNV - Taxon Name Validator
#[derive(Parser, Debug)]
#[command(name = "tnv")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one column of a delimited spreadsheet export
    Validate(ValidateArgs),

    /// Resolve names given on the command line
    Lookup(LookupArgs),
}

/// Arguments for `tnv validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The NCBI nodes.dmp file
    pub nodes: PathBuf,

    /// The NCBI names.dmp file
    pub names: PathBuf,

    /// The delimited file to check
    pub input: PathBuf,

    /// Header title of the column to validate
    #[arg(long, env = "TNV_COLUMN", default_value = "Virus Strain")]
    pub column: String,

    /// Required ancestor taxid (default: the Viruses superkingdom)
    #[arg(long, env = "TNV_TARGET_TAXID", default_value_t = 10239)]
    pub target_taxid: u32,

    /// Fuzzy-matching strategy for near misses
    #[arg(long, value_enum, default_value_t = ScorerKind::Containment)]
    pub scorer: ScorerKind,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Report file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the accepted canonical names, one per line, to this file
    #[arg(long)]
    pub accepted_list: Option<PathBuf>,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

/// Arguments for `tnv lookup`
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// The NCBI nodes.dmp file
    pub nodes: PathBuf,

    /// The NCBI names.dmp file
    pub names: PathBuf,

    /// Names to resolve
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Required ancestor taxid (default: the Viruses superkingdom)
    #[arg(long, env = "TNV_TARGET_TAXID", default_value_t = 10239)]
    pub target_taxid: u32,

    /// Fuzzy-matching strategy for near misses
    #[arg(long, value_enum, default_value_t = ScorerKind::Containment)]
    pub scorer: ScorerKind,
}

/// Fuzzy scoring strategy selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    /// Substring containment, ranked by length ratio
    #[default]
    Containment,
    /// Jaro-Winkler similarity for misspellings
    JaroWinkler,
}

impl ScorerKind {
    /// Instantiate the selected strategy.
    pub fn build(self) -> Box<dyn CandidateScorer + Send + Sync> {
        match self {
            ScorerKind::Containment => Box::new(ContainmentScorer),
            ScorerKind::JaroWinkler => Box::new(JaroWinklerScorer::default()),
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScorerKind::Containment => write!(f, "containment"),
            ScorerKind::JaroWinkler => write!(f, "jaro-winkler"),
        }
    }
}
