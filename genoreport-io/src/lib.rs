//! # Input parsing for genoreport.
//!
//! Turns the raw inputs of a report run into the in-memory maps the matcher
//! works on: consumer genotype exports (23andMe style), the ClinVar flat
//! export and the nested SNPedia export. Also reads the TOML report config.
//!
//! The loaders over already-parsed JSON are pure; only the `*_from_path`
//! helpers touch the filesystem.
//!
pub mod clinvar;
pub mod config;
pub mod doctree;
pub mod genome;
pub mod snpedia;

// re-expose core functions
pub use clinvar::*;
pub use config::*;
pub use genome::*;
pub use snpedia::*;
