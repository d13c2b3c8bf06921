//! # Core data model for genoreport.
//!
//! Holds the records that flow through a report run: parsed user genotypes,
//! the two reference annotation shapes (ClinVar and SNPedia), match results
//! and the flat report mutations. Also carries the shared error type and a
//! couple of reader helpers used by the io crate and the CLI.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
