use fxhash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

///
/// One genotyped marker from a consumer genotype export.
///
/// `rsid` keeps the casing found in the file; the map holding these records
/// is keyed by the lowercased rsid.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputVariant {
    pub rsid: String,
    pub chromosome: String,
    pub position: u64,
    /// Raw genotype call: two alleles (`AG`), one allele on hemizygous
    /// chromosomes, or one of `II`, `DD`, `ID`, `DI`, `--`.
    pub genotype: String,
}

/// User variants keyed by lowercased rsid.
pub type VariantMap = HashMap<String, InputVariant>;
