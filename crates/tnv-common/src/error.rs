//! Error types for TNV

use crate::types::TaxId;
use thiserror::Error;

/// Result type alias for TNV operations
pub type Result<T> = std::result::Result<T, TnvError>;

/// Main error type for TNV
#[derive(Error, Debug)]
pub enum TnvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Reference(#[from] ReferenceDataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Structural faults in the reference taxonomy.
///
/// Any of these invalidates classification for the whole run: the
/// orchestrator aborts instead of guessing, because match results are only
/// as sound as the taxonomy they are checked against. Dangling references
/// are caught when the index is built; cycles can only be caught on the
/// specific ancestor path that exhibits them, so depth overflow is a
/// runtime fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDataError {
    #[error("taxon {taxid} appears more than once in the reference data")]
    DuplicateTaxon { taxid: TaxId },

    #[error("taxon {child} references parent {parent}, which is not in the reference data")]
    DanglingParent { child: TaxId, parent: TaxId },

    #[error("name \"{name}\" references taxon {taxid}, which is not in the reference data")]
    UnknownNameTaxon { name: String, taxid: TaxId },

    #[error("taxon {taxid} is not present in the taxonomy index")]
    UnknownTaxon { taxid: TaxId },

    #[error(
        "ancestor chain of taxon {taxid} exceeds {limit} hops; the reference data likely contains a cycle"
    )]
    AncestryDepthExceeded { taxid: TaxId, limit: usize },
}
