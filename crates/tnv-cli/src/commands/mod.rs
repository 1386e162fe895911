//! CLI command implementations

pub mod lookup;
pub mod validate;

use tnv_common::types::TaxId;
use tnv_core::index::TaxonomyIndex;
use tnv_core::orchestrate::Validator;

use crate::error::Result;
use crate::ScorerKind;

/// Load the taxdump, build the index, and wire up a validator.
/// Shared by every command that resolves names.
pub(crate) fn build_validator(
    nodes: &std::path::Path,
    names: &std::path::Path,
    target_taxid: u32,
    scorer: ScorerKind,
) -> Result<Validator> {
    let (records, entries) = tnv_ingest::load_taxdump(nodes, names)?;
    let index = TaxonomyIndex::build(records, entries)?;
    let validator = Validator::with_scorer(index, TaxId(target_taxid), scorer.build())?;
    Ok(validator)
}
