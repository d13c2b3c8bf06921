use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use genoreport_core::errors::{GenoreportError, Result};
use genoreport_core::models::{ClinvarDb, ClinvarRecord};
use genoreport_core::utils::read_json_value;

use crate::doctree::{field_string, scalar_u64};

///
/// Build the ClinVar lookup from the flat JSON export (an array of objects).
///
/// Entries without an `rs` identifier are skipped; a later entry for the same
/// rsid replaces an earlier one. A document that isn't an array is rejected.
///
pub fn load_clinvar_database(raw: &Value) -> Result<ClinvarDb> {
    let entries = raw.as_array().ok_or_else(|| {
        GenoreportError::InvalidReferenceData(
            "ClinVar export must be a JSON array of variant objects".to_string(),
        )
    })?;

    let mut db = ClinvarDb::default();
    let mut skipped = 0usize;
    for entry in entries {
        match clinvar_record(entry) {
            Some(record) => {
                db.insert(record.rsid.clone(), record);
            }
            None => skipped += 1,
        }
    }

    debug!("ClinVar: {} entries skipped without an rs identifier", skipped);
    info!("Loaded {} ClinVar records", db.len());

    Ok(db)
}

///
/// Read and load a ClinVar export from disk (`.gz` is decompressed).
///
pub fn load_clinvar_from_path(path: &Path) -> Result<ClinvarDb> {
    let raw = read_json_value(path)?;
    load_clinvar_database(&raw)
}

fn clinvar_record(entry: &Value) -> Option<ClinvarRecord> {
    let obj = entry.as_object()?;
    let rsid = field_string(obj, "rsid")?;
    if !rsid.starts_with("rs") {
        return None;
    }

    Some(ClinvarRecord {
        rsid: rsid.to_lowercase(),
        reference_allele: field_string(obj, "reference_allele").unwrap_or_default(),
        alternative_allele: field_string(obj, "alternative_allele").unwrap_or_default(),
        evidence_level: field_string(obj, "evidence_level"),
        gene_name: field_string(obj, "gene_name"),
        phenotype: field_string(obj, "phenotype"),
        chrom: field_string(obj, "chrom"),
        position: obj.get("position").and_then(scalar_u64),
    })
}
