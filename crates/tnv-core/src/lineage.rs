//! Lineage Checker
//!
//! Confirms that a resolved taxon sits on the required taxonomic branch by
//! walking its ancestor chain.

use tnv_common::types::{LineageStatus, TaxId};
use tnv_common::ReferenceDataError;

use crate::index::TaxonomyIndex;

/// Verify that `resolved` lies under `target`.
///
/// `None` means no taxon was resolved and there is nothing to check. The
/// walk is capped by the index's ancestry depth guard; exceeding it is a
/// reference-data fault, not a quiet failure.
pub fn verify(
    index: &TaxonomyIndex,
    resolved: Option<TaxId>,
    target: TaxId,
) -> Result<LineageStatus, ReferenceDataError> {
    let Some(taxid) = resolved else {
        return Ok(LineageStatus::NotApplicable);
    };

    if index.is_within(taxid, target)? {
        Ok(LineageStatus::Pass)
    } else {
        Ok(LineageStatus::Fail)
    }
}
