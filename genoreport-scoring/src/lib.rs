//! # Supplementary risk scores for genoreport.
//!
//! Two independent calculators that sit next to the variant matcher:
//!
//! - [calculate_all_prs] sums effect-allele dosages over a shared rsid index
//!   for every configured polygenic risk score and classifies each result
//! - [calculate_ascvd_risk] evaluates the 2013 Pooled Cohort Equations for
//!   10-year atherosclerotic cardiovascular disease risk
//!
//! The static PRS assets (`prs_config.json`, `prs_weights.json` and the rsid
//! index) are read with the helpers in [files].
//!
pub mod ascvd;
pub mod consts;
pub mod files;
pub mod models;
pub mod prs;

// re-exports
pub use ascvd::*;
pub use files::*;
pub use models::*;
pub use prs::*;
