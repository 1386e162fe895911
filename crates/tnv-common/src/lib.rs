//! TNV Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//!
//! Shared types, utilities, and error handling for the TNV project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all TNV workspace
//! members:
//!
//! - **Types**: The taxonomy domain model (`TaxId`, `TaxonRecord`,
//!   `NameEntry`) and the validation outcome model (`MatchOutcome`,
//!   `LineageStatus`, `RowClassification`, `RowResult`)
//! - **Error Handling**: `TnvError` plus the reference-data fault taxonomy
//! - **Logging**: tracing subscriber setup shared by every binary

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{ReferenceDataError, Result, TnvError};
