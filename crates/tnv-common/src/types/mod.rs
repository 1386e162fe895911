//! Common domain types used across TNV

use serde::{Deserialize, Serialize};

/// NCBI taxonomy identifier.
///
/// An opaque integer key. The well-known identifiers used throughout the
/// project are `1` (the taxonomy root) and `10239` (Viruses).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaxId(pub u32);

impl TaxId {
    /// The NCBI taxonomy root node.
    pub const ROOT: TaxId = TaxId(1);

    /// The Viruses superkingdom node.
    pub const VIRUSES: TaxId = TaxId(10239);
}

impl From<u32> for TaxId {
    fn from(value: u32) -> Self {
        TaxId(value)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaxId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(TaxId)
    }
}

/// Taxonomic rank of a node, as named in the `nodes.dmp` rank field.
///
/// The NCBI dump uses several dozen rank strings; the common ones get their
/// own variant and everything else is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Superkingdom,
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
    Subspecies,
    Strain,
    #[default]
    NoRank,
    Other(String),
}

impl Rank {
    /// Parse a rank string from the dump file. Never fails; unknown rank
    /// names are preserved as `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "superkingdom" => Rank::Superkingdom,
            "kingdom" => Rank::Kingdom,
            "phylum" => Rank::Phylum,
            "class" => Rank::Class,
            "order" => Rank::Order,
            "family" => Rank::Family,
            "genus" => Rank::Genus,
            "species" => Rank::Species,
            "subspecies" => Rank::Subspecies,
            "strain" => Rank::Strain,
            "no rank" | "" => Rank::NoRank,
            other => Rank::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Superkingdom => write!(f, "superkingdom"),
            Rank::Kingdom => write!(f, "kingdom"),
            Rank::Phylum => write!(f, "phylum"),
            Rank::Class => write!(f, "class"),
            Rank::Order => write!(f, "order"),
            Rank::Family => write!(f, "family"),
            Rank::Genus => write!(f, "genus"),
            Rank::Species => write!(f, "species"),
            Rank::Subspecies => write!(f, "subspecies"),
            Rank::Strain => write!(f, "strain"),
            Rank::NoRank => write!(f, "no rank"),
            Rank::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A single node of the reference taxonomy.
///
/// Immutable once loaded. `parent` is `None` only for declared roots; the
/// dump lists the root as its own parent and the loader converts that
/// self-reference to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonRecord {
    /// Unique taxonomy identifier
    pub taxid: TaxId,

    /// The single canonical name NCBI assigns to this taxon
    pub scientific_name: String,

    /// Parent node, or `None` for a declared root
    pub parent: Option<TaxId>,

    /// Taxonomic rank (species, genus, ...)
    pub rank: Rank,
}

/// Class of a name string in `names.dmp`.
///
/// Every non-scientific class in the dump (synonym, equivalent name,
/// common name, acronym, ...) is folded into `Synonym`: they are all
/// alternate spellings that should resolve to the canonical name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NameClass {
    Scientific,
    Synonym,
}

/// A (name string, taxon) pair: either the scientific name of a taxon or
/// one of its synonyms. A single name string may map to several taxa; the
/// resolver treats that as ambiguity, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub taxid: TaxId,
    pub class: NameClass,
}

/// A replacement candidate surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub taxid: TaxId,
    pub canonical: String,
}

/// Outcome of resolving one input name against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MatchOutcome {
    /// The input is the scientific name of exactly one taxon. `canonical`
    /// is that name in its canonical spelling, which may differ from the
    /// raw input by case or whitespace.
    Exact { taxid: TaxId, canonical: String },

    /// The input reached exactly one taxon through a synonym or spelling
    /// variant; `canonical` is the name it should be replaced with.
    Replacement { taxid: TaxId, canonical: String },

    /// The input matched more than one distinct taxon. Candidates carry
    /// the canonical names a reviewer must choose between.
    Ambiguous { candidates: Vec<Candidate> },

    /// A fuzzy pass found a single plausible candidate.
    Suggested { taxid: TaxId, canonical: String },

    /// Nothing in the reference taxonomy matches the input.
    Unrecognized,
}

impl MatchOutcome {
    /// The taxon this outcome resolved to, when it resolved to one.
    pub fn resolved_taxid(&self) -> Option<TaxId> {
        match self {
            MatchOutcome::Exact { taxid, .. }
            | MatchOutcome::Replacement { taxid, .. }
            | MatchOutcome::Suggested { taxid, .. } => Some(*taxid),
            MatchOutcome::Ambiguous { .. } | MatchOutcome::Unrecognized => None,
        }
    }

    /// The canonical name of the resolved taxon, when one resolved.
    pub fn canonical_name(&self) -> Option<&str> {
        match self {
            MatchOutcome::Exact { canonical, .. }
            | MatchOutcome::Replacement { canonical, .. }
            | MatchOutcome::Suggested { canonical, .. } => Some(canonical),
            MatchOutcome::Ambiguous { .. } | MatchOutcome::Unrecognized => None,
        }
    }

    /// Replacement names to surface for this row, ordered by relevance.
    /// Empty for exact and unrecognized outcomes.
    pub fn suggestions(&self) -> Vec<&str> {
        match self {
            MatchOutcome::Exact { .. } | MatchOutcome::Unrecognized => Vec::new(),
            MatchOutcome::Replacement { canonical, .. }
            | MatchOutcome::Suggested { canonical, .. } => vec![canonical.as_str()],
            MatchOutcome::Ambiguous { candidates } => {
                candidates.iter().map(|c| c.canonical.as_str()).collect()
            }
        }
    }
}

/// Result of the lineage walk for a resolved taxon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineageStatus {
    /// The target ancestor appears in the ancestor chain.
    Pass,
    /// The walk reached a root without meeting the target ancestor.
    Fail,
    /// No taxon was resolved, so there is nothing to check.
    NotApplicable,
}

/// Final per-row classification: the joint outcome of match confidence and
/// lineage verification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RowClassification {
    ExactValid,
    ExactWrongBranch,
    AutoCorrectable,
    WrongBranchAfterCorrection,
    NeedsManualReview,
    SuggestedCandidate,
    SuggestedWrongBranch,
    Unrecognized,
}

impl RowClassification {
    /// Stable tag used in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            RowClassification::ExactValid => "exact-valid",
            RowClassification::ExactWrongBranch => "exact-wrong-branch",
            RowClassification::AutoCorrectable => "auto-correctable",
            RowClassification::WrongBranchAfterCorrection => "wrong-branch-after-correction",
            RowClassification::NeedsManualReview => "needs-manual-review",
            RowClassification::SuggestedCandidate => "suggested-candidate",
            RowClassification::SuggestedWrongBranch => "suggested-wrong-branch",
            RowClassification::Unrecognized => "unrecognized",
        }
    }

    /// Whether the row's value can be kept or replaced without a human in
    /// the loop.
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self,
            RowClassification::ExactValid | RowClassification::AutoCorrectable
        )
    }
}

impl std::fmt::Display for RowClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Everything known about one validated input row. Output order always
/// matches input order; `row` is the zero-based input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowResult {
    pub row: usize,
    pub input: String,
    pub outcome: MatchOutcome,
    pub lineage: LineageStatus,
    pub classification: RowClassification,
}
