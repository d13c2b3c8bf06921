use serde::{Deserialize, Serialize};

use super::database_variant::Source;

pub const DEFAULT_EVIDENCE_LEVEL: &str = "1 Star";
pub const UNKNOWN_CHROM: &str = "Unknown";

///
/// Report-ready projection of a match. Every mutation has a non-empty gene
/// name and a non-empty phenotype.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub rsid: String,
    pub evidence_level: String,
    pub gene_name: String,
    pub phenotype: String,
    pub chrom: String,
    pub position: u64,
    pub reference_allele: String,
    pub alternative_allele: String,
    pub source: Source,
}
