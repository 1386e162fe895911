//! TNV Core Engine
//!
//! Name-resolution and classification engine for taxon-name validation.
//!
//! # Overview
//!
//! Given a raw name string and an immutable [`index::TaxonomyIndex`], the
//! engine determines the best matching canonical entry, classifies match
//! confidence into a fixed outcome set, and verifies that the match lies
//! on the required taxonomic branch:
//!
//! - [`normalize`]: canonical comparison form for all lookups
//! - [`index`]: taxid and name lookup tables plus ancestor walks
//! - [`resolve`]: exact / synonym / ambiguous / fuzzy match resolution
//! - [`score`]: pluggable scoring strategies for the fuzzy fallback
//! - [`lineage`]: subtree membership verification with cycle protection
//! - [`orchestrate`]: batch driver combining the above per input row
//!
//! # Example
//!
//! ```
//! use tnv_common::types::{NameClass, NameEntry, Rank, TaxId, TaxonRecord};
//! use tnv_core::index::TaxonomyIndex;
//! use tnv_core::orchestrate::Validator;
//!
//! let records = vec![
//!     TaxonRecord {
//!         taxid: TaxId::ROOT,
//!         scientific_name: "root".into(),
//!         parent: None,
//!         rank: Rank::NoRank,
//!     },
//!     TaxonRecord {
//!         taxid: TaxId::VIRUSES,
//!         scientific_name: "Viruses".into(),
//!         parent: Some(TaxId::ROOT),
//!         rank: Rank::Superkingdom,
//!     },
//!     TaxonRecord {
//!         taxid: TaxId(11320),
//!         scientific_name: "Influenza A virus".into(),
//!         parent: Some(TaxId::VIRUSES),
//!         rank: Rank::Species,
//!     },
//! ];
//! let index = TaxonomyIndex::build(records, vec![])?;
//! let validator = Validator::new(index, TaxId::VIRUSES)?;
//!
//! let results = validator.validate_batch(&["influenza a virus"])?;
//! assert_eq!(results[0].classification.tag(), "exact-valid");
//! # Ok::<(), tnv_common::ReferenceDataError>(())
//! ```

pub mod index;
pub mod lineage;
pub mod normalize;
pub mod orchestrate;
pub mod resolve;
pub mod score;

// Re-export commonly used items
pub use index::{TaxonomyIndex, MAX_ANCESTRY_DEPTH};
pub use normalize::normalize;
pub use orchestrate::{classify, Validator};
pub use resolve::resolve;
pub use score::{CandidateScorer, ContainmentScorer, JaroWinklerScorer};
