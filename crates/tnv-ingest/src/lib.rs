//! TNV Ingest Library
//!
//! Reference-data loader for the validation engine: parses the NCBI
//! taxdump flat files (`nodes.dmp`, `names.dmp`) into the domain
//! collections the taxonomy index is built from.
//!
//! Download NCBI Taxonomy data from
//! <https://ftp.ncbi.nih.gov/pub/taxonomy/taxdmp.zip>.
//!
//! # Example
//!
//! ```no_run
//! use tnv_ingest::dmp;
//!
//! fn main() -> Result<(), tnv_ingest::IngestError> {
//!     let (records, entries) = dmp::load_taxdump("nodes.dmp", "names.dmp")?;
//!     println!("{} taxa, {} names", records.len(), entries.len());
//!     Ok(())
//! }
//! ```

pub mod dmp;

// Re-export commonly used types
pub use dmp::{load_taxdump, IngestError};
