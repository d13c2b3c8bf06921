//! Matching of a user's genotypes against reference annotations.
//!
//! - [match_genotype] classifies one genotype call against a reference/
//!   alternative allele pair (hom-ref, het, hom-alt or unclassifiable)
//! - [find_shared_variants] joins the user's variants with the ClinVar and
//!   SNPedia lookups and orders the matches for reporting
//! - [convert_to_mutations] projects matches into flat report records
//!
//! # Example
//!
//! ```no_run
//! use genoreport_io::{GenomeFile, load_clinvar_from_path, load_snpedia_from_path};
//! use genoreport_matching::{convert_to_mutations, find_shared_variants};
//! use std::path::Path;
//!
//! let genome = GenomeFile::try_from("genome.txt").unwrap();
//! let clinvar = load_clinvar_from_path(Path::new("clinvar.json")).unwrap();
//! let snpedia = load_snpedia_from_path(Path::new("snpedia.json")).unwrap();
//!
//! let matches = find_shared_variants(&genome.variants, &clinvar, &snpedia);
//! let mutations = convert_to_mutations(&matches);
//! ```

pub mod genotype;
pub mod intersect;
pub mod projection;

// re-exports
pub use genotype::{GenotypeCall, complement_genotype, match_genotype};
pub use intersect::{MatchCounts, find_shared_variants};
pub use projection::convert_to_mutations;
