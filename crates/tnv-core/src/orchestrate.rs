//! Validation Orchestrator
//!
//! Applies normalize -> resolve -> lineage-check to every name in a batch
//! and folds the two verdicts into the final per-row classification. The
//! orchestrator is the only component callers need to touch directly.

use tnv_common::types::{
    LineageStatus, MatchOutcome, RowClassification, RowResult, TaxId,
};
use tnv_common::ReferenceDataError;

use crate::index::TaxonomyIndex;
use crate::lineage;
use crate::resolve::resolve;
use crate::score::{CandidateScorer, ContainmentScorer};

/// Batch validator over an immutable taxonomy index.
///
/// Rows are independent of each other: validation carries no cross-row
/// state, and output order always equals input order. Per-row misses and
/// ambiguities are ordinary results; only structural reference-data faults
/// abort a batch.
pub struct Validator {
    index: TaxonomyIndex,
    target: TaxId,
    scorer: Box<dyn CandidateScorer + Send + Sync>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("index", &self.index)
            .field("target", &self.target)
            .field("scorer", &"<dyn CandidateScorer>")
            .finish()
    }
}

impl Validator {
    /// Create a validator with the default containment scorer.
    pub fn new(index: TaxonomyIndex, target: TaxId) -> Result<Self, ReferenceDataError> {
        Self::with_scorer(index, target, Box::new(ContainmentScorer))
    }

    /// Create a validator with an explicit fuzzy-scoring strategy.
    /// Fails if the target ancestor is not present in the index.
    pub fn with_scorer(
        index: TaxonomyIndex,
        target: TaxId,
        scorer: Box<dyn CandidateScorer + Send + Sync>,
    ) -> Result<Self, ReferenceDataError> {
        if index.record(target).is_none() {
            return Err(ReferenceDataError::UnknownTaxon { taxid: target });
        }
        Ok(Self {
            index,
            target,
            scorer,
        })
    }

    pub fn index(&self) -> &TaxonomyIndex {
        &self.index
    }

    pub fn target(&self) -> TaxId {
        self.target
    }

    /// Validate a single name as the given row position.
    pub fn validate_one(&self, row: usize, raw: &str) -> Result<RowResult, ReferenceDataError> {
        let outcome = resolve(&self.index, raw, self.target, self.scorer.as_ref())?;
        let lineage = lineage::verify(&self.index, outcome.resolved_taxid(), self.target)?;
        let classification = classify(&outcome, lineage);

        tracing::debug!(
            row,
            input = raw,
            classification = %classification,
            "row validated"
        );

        Ok(RowResult {
            row,
            input: raw.to_string(),
            outcome,
            lineage,
            classification,
        })
    }

    /// Validate a batch of names, one result per input in input order.
    pub fn validate_batch<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<RowResult>, ReferenceDataError> {
        let mut results = Vec::with_capacity(names.len());
        for (row, name) in names.iter().enumerate() {
            results.push(self.validate_one(row, name.as_ref())?);
        }

        tracing::info!(
            rows = results.len(),
            acceptable = results
                .iter()
                .filter(|r| r.classification.is_acceptable())
                .count(),
            "batch validated"
        );

        Ok(results)
    }
}

/// Joint classification table over match outcome and lineage verdict.
///
/// | outcome      | lineage | classification                |
/// |--------------|---------|-------------------------------|
/// | exact        | pass    | exact-valid                   |
/// | exact        | fail    | exact-wrong-branch            |
/// | replacement  | pass    | auto-correctable              |
/// | replacement  | fail    | wrong-branch-after-correction |
/// | ambiguous    | any     | needs-manual-review           |
/// | suggested    | pass    | suggested-candidate           |
/// | suggested    | fail    | suggested-wrong-branch        |
/// | unrecognized | any     | unrecognized                  |
pub fn classify(outcome: &MatchOutcome, lineage: LineageStatus) -> RowClassification {
    use LineageStatus::Pass;

    match (outcome, lineage) {
        (MatchOutcome::Exact { .. }, Pass) => RowClassification::ExactValid,
        (MatchOutcome::Exact { .. }, _) => RowClassification::ExactWrongBranch,
        (MatchOutcome::Replacement { .. }, Pass) => RowClassification::AutoCorrectable,
        (MatchOutcome::Replacement { .. }, _) => RowClassification::WrongBranchAfterCorrection,
        (MatchOutcome::Ambiguous { .. }, _) => RowClassification::NeedsManualReview,
        (MatchOutcome::Suggested { .. }, Pass) => RowClassification::SuggestedCandidate,
        (MatchOutcome::Suggested { .. }, _) => RowClassification::SuggestedWrongBranch,
        (MatchOutcome::Unrecognized, _) => RowClassification::Unrecognized,
    }
}
