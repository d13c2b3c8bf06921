use std::fmt::{self, Display};
use std::str::FromStr;

use fxhash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::utils::is_blank;

///
/// Reference database a record came from. ClinVar orders before SNPedia.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Clinvar,
    Snpedia,
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Clinvar => write!(f, "clinvar"),
            Source::Snpedia => write!(f, "snpedia"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clinvar" => Ok(Source::Clinvar),
            "snpedia" => Ok(Source::Snpedia),
            _ => Err(format!("Unknown reference source: {}", s)),
        }
    }
}

///
/// A ClinVar annotation, one per rsid.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinvarRecord {
    pub rsid: String,
    pub reference_allele: String,
    pub alternative_allele: String,
    pub evidence_level: Option<String>,
    pub gene_name: Option<String>,
    pub phenotype: Option<String>,
    pub chrom: Option<String>,
    pub position: Option<u64>,
}

///
/// One genotype page of a SNPedia entry, e.g. `Rs1015362(C;C)`.
///
/// Alleles are always stored on the plus strand.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnpediaGenotype {
    pub name: String,
    pub allele1: String,
    pub allele2: String,
    pub magnitude: String,
    pub repute: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl SnpediaGenotype {
    /// Unordered comparison of the stored allele pair with `(a, b)`.
    pub fn matches_alleles(&self, a: &str, b: &str) -> bool {
        let (x, y) = (self.allele1.as_str(), self.allele2.as_str());
        (x.eq_ignore_ascii_case(a) && y.eq_ignore_ascii_case(b))
            || (x.eq_ignore_ascii_case(b) && y.eq_ignore_ascii_case(a))
    }

    pub fn is_homozygous(&self) -> bool {
        self.allele1.eq_ignore_ascii_case(&self.allele2)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnpediaTags {
    pub medicines: Vec<String>,
    pub topics: Vec<String>,
    pub conditions: Vec<String>,
}

///
/// A SNPedia entry flattened out of the nested wiki document.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnpediaRecord {
    pub rsid: String,
    pub reference_allele: Option<String>,
    pub alternative_allele: Option<String>,
    /// Set when the alleles above were read off the genotype pages rather
    /// than given by the export. Zygosity then comes from the matched page.
    #[serde(default, skip_serializing)]
    pub alleles_inferred: bool,
    pub gene_name: Option<String>,
    pub description: String,
    pub tags: SnpediaTags,
    pub orientation: Option<String>,
    pub stabilized: Option<String>,
    pub chrom: Option<String>,
    pub position: Option<u64>,
    pub genotypes: Vec<SnpediaGenotype>,
}

impl SnpediaRecord {
    ///
    /// Whether user genotypes must be complemented before comparing them
    /// with the stored genotype pages.
    ///
    pub fn is_minus_strand(&self) -> bool {
        [&self.orientation, &self.stabilized]
            .iter()
            .any(|flag| flag.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("minus")))
    }

    /// Condition tags joined into one display string.
    pub fn diseases(&self) -> String {
        self.tags.conditions.join(", ")
    }
}

pub type ClinvarDb = HashMap<String, ClinvarRecord>;
pub type SnpediaDb = HashMap<String, SnpediaRecord>;

///
/// A reference annotation from either database.
///
/// Field semantics diverge between the two shapes, so callers branch on the
/// variant (or use the accessors below) rather than assuming a common layout.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DatabaseVariant {
    Clinvar(ClinvarRecord),
    Snpedia(SnpediaRecord),
}

impl DatabaseVariant {
    pub fn source(&self) -> Source {
        match self {
            DatabaseVariant::Clinvar(_) => Source::Clinvar,
            DatabaseVariant::Snpedia(_) => Source::Snpedia,
        }
    }

    pub fn rsid(&self) -> &str {
        match self {
            DatabaseVariant::Clinvar(r) => &r.rsid,
            DatabaseVariant::Snpedia(r) => &r.rsid,
        }
    }

    pub fn gene_name(&self) -> Option<&str> {
        match self {
            DatabaseVariant::Clinvar(r) => r.gene_name.as_deref(),
            DatabaseVariant::Snpedia(r) => r.gene_name.as_deref(),
        }
    }

    ///
    /// The condition text: ClinVar `phenotype`, SNPedia `diseases`.
    /// Returns `None` when blank.
    ///
    pub fn condition(&self) -> Option<String> {
        let text = match self {
            DatabaseVariant::Clinvar(r) => r.phenotype.clone(),
            DatabaseVariant::Snpedia(r) => Some(r.diseases()),
        };
        text.filter(|t| !is_blank(Some(t.as_str())))
    }

    pub fn has_condition(&self) -> bool {
        self.condition().is_some()
    }

    pub fn reference_allele(&self) -> Option<&str> {
        match self {
            DatabaseVariant::Clinvar(r) => Some(r.reference_allele.as_str()),
            DatabaseVariant::Snpedia(r) => r.reference_allele.as_deref(),
        }
    }

    pub fn alternative_allele(&self) -> Option<&str> {
        match self {
            DatabaseVariant::Clinvar(r) => Some(r.alternative_allele.as_str()),
            DatabaseVariant::Snpedia(r) => r.alternative_allele.as_deref(),
        }
    }

    /// SNPedia carries no formal evidence tier.
    pub fn evidence_level(&self) -> Option<&str> {
        match self {
            DatabaseVariant::Clinvar(r) => r.evidence_level.as_deref(),
            DatabaseVariant::Snpedia(_) => None,
        }
    }

    pub fn chrom(&self) -> Option<&str> {
        match self {
            DatabaseVariant::Clinvar(r) => r.chrom.as_deref(),
            DatabaseVariant::Snpedia(r) => r.chrom.as_deref(),
        }
    }

    pub fn position(&self) -> Option<u64> {
        match self {
            DatabaseVariant::Clinvar(r) => r.position,
            DatabaseVariant::Snpedia(r) => r.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn snpedia_record() -> SnpediaRecord {
        SnpediaRecord {
            rsid: "rs1015362".to_string(),
            reference_allele: Some("A".to_string()),
            alternative_allele: Some("G".to_string()),
            alleles_inferred: false,
            gene_name: Some("ASIP".to_string()),
            description: "Pigmentation marker.".to_string(),
            tags: SnpediaTags {
                medicines: vec![],
                topics: vec!["Pigmentation".to_string()],
                conditions: vec!["Freckles".to_string(), "Sunburn".to_string()],
            },
            orientation: Some("minus".to_string()),
            stabilized: None,
            chrom: Some("20".to_string()),
            position: Some(32738612),
            genotypes: vec![],
        }
    }

    #[rstest]
    fn test_source_ordering_and_display() {
        assert!(Source::Clinvar < Source::Snpedia);
        assert_eq!(Source::Snpedia.to_string(), "snpedia");
        assert_eq!("ClinVar".parse::<Source>().unwrap(), Source::Clinvar);
        assert!("dbsnp".parse::<Source>().is_err());
    }

    #[rstest]
    fn test_minus_strand_flags(mut snpedia_record: SnpediaRecord) {
        assert!(snpedia_record.is_minus_strand());

        snpedia_record.orientation = Some("plus".to_string());
        assert!(!snpedia_record.is_minus_strand());

        snpedia_record.stabilized = Some("Minus".to_string());
        assert!(snpedia_record.is_minus_strand());
    }

    #[rstest]
    fn test_snpedia_condition_is_joined_diseases(snpedia_record: SnpediaRecord) {
        let variant = DatabaseVariant::Snpedia(snpedia_record);
        assert_eq!(variant.condition().as_deref(), Some("Freckles, Sunburn"));
        assert_eq!(variant.evidence_level(), None);
        assert_eq!(variant.source(), Source::Snpedia);
    }

    #[rstest]
    fn test_blank_clinvar_phenotype_is_no_condition() {
        let variant = DatabaseVariant::Clinvar(ClinvarRecord {
            rsid: "rs7412".to_string(),
            reference_allele: "C".to_string(),
            alternative_allele: "T".to_string(),
            evidence_level: Some("4 Stars".to_string()),
            gene_name: Some("APOE".to_string()),
            phenotype: Some("  ".to_string()),
            chrom: None,
            position: None,
        });
        assert!(!variant.has_condition());
    }

    #[rstest]
    #[case("A", "G", true)]
    #[case("G", "A", true)]
    #[case("g", "a", true)]
    #[case("A", "A", false)]
    fn test_genotype_pair_is_unordered(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        let genotype = SnpediaGenotype {
            name: "Rs1(A;G)".to_string(),
            allele1: "A".to_string(),
            allele2: "G".to_string(),
            magnitude: "0".to_string(),
            repute: "Unknown".to_string(),
            summary: String::new(),
            tags: vec![],
        };
        assert_eq!(genotype.matches_alleles(a, b), expected);
    }

    #[rstest]
    fn test_serializes_with_source_tag(snpedia_record: SnpediaRecord) {
        let value = serde_json::to_value(DatabaseVariant::Snpedia(snpedia_record)).unwrap();
        assert_eq!(value["source"], "snpedia");
        assert_eq!(value["rsid"], "rs1015362");
    }
}
