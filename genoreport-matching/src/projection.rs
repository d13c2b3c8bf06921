use genoreport_core::models::mutation::{DEFAULT_EVIDENCE_LEVEL, UNKNOWN_CHROM};
use genoreport_core::models::{Mutation, ResultVariant};
use genoreport_core::utils::is_blank;

///
/// Project matches into report mutations.
///
/// Matches without a condition (ClinVar `phenotype`, SNPedia `diseases`) or
/// without a gene name are dropped. Order is kept.
///
pub fn convert_to_mutations(results: &[ResultVariant]) -> Vec<Mutation> {
    results.iter().filter_map(to_mutation).collect()
}

fn to_mutation(result: &ResultVariant) -> Option<Mutation> {
    let variant = &result.variant;
    let phenotype = variant.condition()?;
    let gene_name = variant.gene_name().filter(|g| !is_blank(Some(*g)))?;

    Some(Mutation {
        rsid: result.rsid().to_string(),
        evidence_level: variant
            .evidence_level()
            .filter(|e| !is_blank(Some(*e)))
            .unwrap_or(DEFAULT_EVIDENCE_LEVEL)
            .to_string(),
        gene_name: gene_name.to_string(),
        phenotype,
        chrom: variant
            .chrom()
            .filter(|c| !is_blank(Some(*c)))
            .unwrap_or(UNKNOWN_CHROM)
            .to_string(),
        position: variant.position().unwrap_or(0),
        reference_allele: variant.reference_allele().unwrap_or_default().to_string(),
        alternative_allele: variant.alternative_allele().unwrap_or_default().to_string(),
        source: result.source(),
    })
}
