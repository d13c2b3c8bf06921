use log::debug;
use serde::Serialize;

use genoreport_core::models::{
    ClinvarDb, ClinvarRecord, DatabaseVariant, InputVariant, ResultVariant, SnpediaDb,
    SnpediaGenotype, SnpediaRecord, Source, VariantMap, Zygosity,
};

use crate::genotype::{allele_pair, complement_genotype, is_unreliable_call, match_genotype};

/// Number of matches per reference source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub clinvar: usize,
    pub snpedia: usize,
}

impl MatchCounts {
    pub fn from_results(results: &[ResultVariant]) -> Self {
        results
            .iter()
            .fold(MatchCounts::default(), |mut counts, r| {
                match r.source() {
                    Source::Clinvar => counts.clinvar += 1,
                    Source::Snpedia => counts.snpedia += 1,
                }
                counts
            })
    }
}

///
/// Join the user's variants with both reference lookups.
///
/// Each source is matched on its own, so one rsid can yield a ClinVar and a
/// SNPedia result. Only carriers of a non-reference allele are reported.
///
/// Results are ordered by source (ClinVar first), then entries with a
/// condition before those without, then by rsid.
///
pub fn find_shared_variants(
    user_variants: &VariantMap,
    clinvar: &ClinvarDb,
    snpedia: &SnpediaDb,
) -> Vec<ResultVariant> {
    let mut results = Vec::new();

    for (rsid, input) in user_variants {
        if let Some(record) = clinvar.get(rsid) {
            results.extend(match_clinvar(input, record));
        }
        if let Some(record) = snpedia.get(rsid) {
            results.extend(match_snpedia(input, record));
        }
    }

    sort_results(&mut results);

    let counts = MatchCounts::from_results(&results);
    debug!(
        "Matched {} ClinVar and {} SNPedia variants out of {} user variants",
        counts.clinvar,
        counts.snpedia,
        user_variants.len()
    );

    results
}

fn match_clinvar(input: &InputVariant, record: &ClinvarRecord) -> Option<ResultVariant> {
    let zygosity = match_genotype(
        &input.genotype,
        &record.reference_allele,
        &record.alternative_allele,
    )
    .zygosity()?;

    Some(ResultVariant {
        variant: DatabaseVariant::Clinvar(record.clone()),
        genotype: zygosity,
        matched_genotype: None,
        user_allele: None,
    })
}

///
/// SNPedia stores genotype pages on the plus strand, so minus strand calls
/// are complemented before any comparison.
///
fn match_snpedia(input: &InputVariant, record: &SnpediaRecord) -> Option<ResultVariant> {
    let processed = if record.is_minus_strand() {
        complement_genotype(&input.genotype)
    } else {
        input.genotype.clone()
    };

    let matched_genotype = matching_genotype_page(&processed, &record.genotypes);
    let zygosity = snpedia_zygosity(&processed, record, matched_genotype)?;

    let matched_genotype = matched_genotype.cloned();
    let has_annotation = matched_genotype.is_some()
        || !record.diseases().trim().is_empty()
        || !record.description.trim().is_empty();
    if !has_annotation {
        return None;
    }

    Some(ResultVariant {
        variant: DatabaseVariant::Snpedia(record.clone()),
        genotype: zygosity,
        matched_genotype,
        user_allele: Some(input.genotype.clone()),
    })
}

///
/// Records with explicit alleles are classified against them. Records whose
/// alleles were inferred are classified from the matched genotype page: a
/// heterozygous page is a carrier, a homozygous page is one unless it is the
/// inferred reference. Without a matched page the inferred alleles are used.
///
fn snpedia_zygosity(
    processed: &str,
    record: &SnpediaRecord,
    page: Option<&SnpediaGenotype>,
) -> Option<Zygosity> {
    let by_alleles = || {
        match_genotype(
            processed,
            record.reference_allele.as_deref()?,
            record.alternative_allele.as_deref()?,
        )
        .zygosity()
    };

    if !record.alleles_inferred || is_unreliable_call(processed) {
        return by_alleles();
    }

    match page {
        Some(page) if !page.is_homozygous() => Some(Zygosity::Heterozygous),
        Some(page) => {
            let is_reference = record
                .reference_allele
                .as_deref()
                .is_some_and(|r| page.allele1.eq_ignore_ascii_case(r));
            (!is_reference).then_some(Zygosity::HomozygousAlt)
        }
        None => by_alleles(),
    }
}

fn matching_genotype_page<'a>(
    genotype: &str,
    pages: &'a [SnpediaGenotype],
) -> Option<&'a SnpediaGenotype> {
    let (a, b) = allele_pair(genotype)?;
    pages.iter().find(|page| page.matches_alleles(a, b))
}

fn sort_results(results: &mut [ResultVariant]) {
    results.sort_by_cached_key(|r| (r.source(), !r.has_condition(), r.rsid().to_string()));
}
