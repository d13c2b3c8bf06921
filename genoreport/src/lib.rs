//! # genoreport
//!
//! Turns a consumer genotype export (23andMe style) into a list of clinically
//! annotated variants and a set of supplementary risk scores.
//!
//! Each stage lives in its own crate and is re-exported here behind a feature:
//!
//! - `core`: data model, error type and shared readers
//! - `io`: genome file parser, ClinVar and SNPedia loaders, report config
//! - `matching`: genotype classification, variant intersection, mutation projection
//! - `scoring`: polygenic risk scores and the Pooled Cohort Equations
//!
#[cfg(feature = "core")]
#[doc(inline)]
pub use genoreport_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use genoreport_io as io;

#[cfg(feature = "matching")]
#[doc(inline)]
pub use genoreport_matching as matching;

#[cfg(feature = "scoring")]
#[doc(inline)]
pub use genoreport_scoring as scoring;
