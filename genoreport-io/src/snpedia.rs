use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

use genoreport_core::errors::{GenoreportError, Result};
use genoreport_core::models::{SnpediaDb, SnpediaGenotype, SnpediaRecord, SnpediaTags};
use genoreport_core::utils::{canonical_rsid, read_json_value};

use crate::doctree::{field_string, scalar_u64, sentences, string_list, templates_named};

/// Sentences stop being appended once the description passes this length.
pub const DESCRIPTION_SOFT_LIMIT: usize = 500;

pub const DEFAULT_MAGNITUDE: &str = "0";
pub const DEFAULT_REPUTE: &str = "Unknown";

///
/// Build the SNPedia lookup from the nested export: a JSON object keyed by
/// SNP page name (`Rs1015362`), each value holding wiki `sections` and the
/// per-genotype pages under `genotypes`.
///
/// Pages that don't resolve to an `rs` identifier are skipped. A document
/// that isn't an object is rejected.
///
pub fn load_snpedia_database(raw: &Value) -> Result<SnpediaDb> {
    let pages = raw.as_object().ok_or_else(|| {
        GenoreportError::InvalidReferenceData(
            "SNPedia export must be a JSON object keyed by SNP name".to_string(),
        )
    })?;

    let mut db = SnpediaDb::default();
    let mut skipped = 0usize;
    for (name, page) in pages {
        match snpedia_record(name, page) {
            Some(record) => {
                db.insert(record.rsid.clone(), record);
            }
            None => skipped += 1,
        }
    }

    debug!("SNPedia: {} pages skipped without an rs identifier", skipped);
    info!("Loaded {} SNPedia records", db.len());

    Ok(db)
}

///
/// Read and load a SNPedia export from disk (`.gz` is decompressed).
///
pub fn load_snpedia_from_path(path: &Path) -> Result<SnpediaDb> {
    let raw = read_json_value(path)?;
    load_snpedia_database(&raw)
}

fn snpedia_record(name: &str, page: &Value) -> Option<SnpediaRecord> {
    let empty = Map::new();
    let sections = page.get("sections").unwrap_or(&Value::Null);
    let rsnum = templates_named(sections, "rsnum")
        .into_iter()
        .next()
        .unwrap_or(&empty);

    let rsid = match field_string(rsnum, "rsid") {
        Some(id) if id.to_lowercase().starts_with("rs") => canonical_rsid(&id),
        Some(id) => canonical_rsid(&format!("rs{}", id)),
        None => canonical_rsid(name),
    }?;

    let page_obj = page.as_object().unwrap_or(&empty);
    let genotypes = genotype_entries(page.get("genotypes"));
    let (reference_allele, alternative_allele, alleles_inferred) = resolve_alleles(
        field_string(page_obj, "reference_allele").or_else(|| field_string(rsnum, "reference_allele")),
        field_string(page_obj, "alternative_allele")
            .or_else(|| field_string(rsnum, "alternative_allele")),
        &genotypes,
    );

    Some(SnpediaRecord {
        rsid,
        reference_allele,
        alternative_allele,
        alleles_inferred,
        gene_name: field_string(rsnum, "gene"),
        description: description(sections),
        tags: page_tags(page.get("tags")),
        orientation: field_string(rsnum, "orientation"),
        stabilized: field_string(rsnum, "stabilizedorientation")
            .or_else(|| field_string(rsnum, "stabilized")),
        chrom: field_string(rsnum, "chromosome"),
        position: rsnum.get("position").and_then(scalar_u64),
        genotypes,
    })
}

///
/// Join sentence texts with spaces, stopping once the text passes
/// [DESCRIPTION_SOFT_LIMIT]. Sentences are never cut.
///
fn description(sections: &Value) -> String {
    let mut text = String::new();
    for sentence in sentences(sections) {
        if text.len() > DESCRIPTION_SOFT_LIMIT {
            break;
        }
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(sentence);
    }
    text
}

fn page_tags(tags: Option<&Value>) -> SnpediaTags {
    match tags {
        Some(Value::Object(obj)) => SnpediaTags {
            medicines: string_list(obj.get("medicines")),
            topics: string_list(obj.get("topics")),
            conditions: string_list(obj.get("conditions")),
        },
        _ => SnpediaTags::default(),
    }
}

///
/// Genotype pages, as an object keyed by page name or as an array of pages.
/// Order in the export is kept.
///
fn genotype_entries(genotypes: Option<&Value>) -> Vec<SnpediaGenotype> {
    let mut entries = Vec::new();
    match genotypes {
        Some(Value::Object(pages)) => {
            for (name, page) in pages {
                entries.extend(genotype_page(name, page));
            }
        }
        Some(Value::Array(pages)) => {
            for page in pages {
                let name = page
                    .as_object()
                    .and_then(|p| field_string(p, "title").or_else(|| field_string(p, "name")))
                    .unwrap_or_default();
                entries.extend(genotype_page(&name, page));
            }
        }
        _ => {}
    }
    entries
}

fn genotype_page(name: &str, page: &Value) -> Vec<SnpediaGenotype> {
    let tags = string_list(page.get("tags"));
    let root = page.get("sections").unwrap_or(page);

    templates_named(root, "genotype")
        .into_iter()
        .filter_map(|t| {
            let allele1 = field_string(t, "allele1")?;
            let allele2 = field_string(t, "allele2")?;
            Some(SnpediaGenotype {
                name: name.to_string(),
                allele1,
                allele2,
                magnitude: field_string(t, "magnitude")
                    .unwrap_or_else(|| DEFAULT_MAGNITUDE.to_string()),
                repute: field_string(t, "repute").unwrap_or_else(|| DEFAULT_REPUTE.to_string()),
                summary: field_string(t, "summary").unwrap_or_default(),
                tags: tags.clone(),
            })
        })
        .collect()
}

///
/// Fill in missing reference/alternative alleles from the genotype pages.
///
/// The reference is the homozygous page with the lowest magnitude, and is
/// only inferred when at least two homozygous pages disagree. Ties go to the
/// alphabetically first allele so export order never matters. The
/// alternative is the first other allele, alphabetically.
///
/// The flag is set when either allele was not given explicitly.
///
fn resolve_alleles(
    reference: Option<String>,
    alternative: Option<String>,
    genotypes: &[SnpediaGenotype],
) -> (Option<String>, Option<String>, bool) {
    let inferred = reference.is_none() || alternative.is_none();

    let reference = reference.or_else(|| {
        let homozygous: Vec<(f64, String)> = genotypes
            .iter()
            .filter(|g| g.is_homozygous())
            .map(|g| (magnitude_value(&g.magnitude), g.allele1.to_uppercase()))
            .collect();

        let distinct: BTreeSet<&str> = homozygous.iter().map(|(_, a)| a.as_str()).collect();
        if distinct.len() < 2 {
            return None;
        }
        homozygous
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
            .map(|(_, allele)| allele.clone())
    });

    let alternative = alternative.or_else(|| {
        let reference = reference.as_deref()?;
        genotypes
            .iter()
            .flat_map(|g| [g.allele1.to_uppercase(), g.allele2.to_uppercase()])
            .filter(|a| !a.eq_ignore_ascii_case(reference))
            .min()
    });

    (reference, alternative, inferred)
}

/// Unparsable magnitudes sort last.
fn magnitude_value(magnitude: &str) -> f64 {
    magnitude.trim().parse().unwrap_or(f64::INFINITY)
}
