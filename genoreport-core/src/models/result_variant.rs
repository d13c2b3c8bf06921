use serde::{Serialize, Serializer};

use super::database_variant::{DatabaseVariant, SnpediaGenotype, Source};

///
/// Zygosity of a reported match. Homozygous-reference calls never produce a
/// match, so only the two carrier states exist here.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zygosity {
    Heterozygous,
    HomozygousAlt,
}

impl Zygosity {
    /// Numeric genotype code: 1 = heterozygous, 2 = homozygous alternative.
    pub fn code(&self) -> u8 {
        match self {
            Zygosity::Heterozygous => 1,
            Zygosity::HomozygousAlt => 2,
        }
    }
}

impl Serialize for Zygosity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

///
/// A user variant that carries at least one non-reference allele for a
/// reference record.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultVariant {
    #[serde(flatten)]
    pub variant: DatabaseVariant,
    pub genotype: Zygosity,
    /// SNPedia only: the genotype page matching the user's (strand corrected) alleles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_genotype: Option<SnpediaGenotype>,
    /// SNPedia only: the raw genotype string from the user's file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_allele: Option<String>,
}

impl ResultVariant {
    pub fn rsid(&self) -> &str {
        self.variant.rsid()
    }

    pub fn source(&self) -> Source {
        self.variant.source()
    }

    pub fn has_condition(&self) -> bool {
        self.variant.has_condition()
    }
}
