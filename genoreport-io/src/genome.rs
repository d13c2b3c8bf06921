use std::io::BufRead;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use genoreport_core::errors::{GenoreportError, Result};
use genoreport_core::models::{InputVariant, VariantMap};
use genoreport_core::utils::get_dynamic_reader_w_stdin;

/// Reference genome build declared in the export header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GenomeBuild {
    /// GRCh37 / hg19
    GRCh37,
    /// GRCh38 / hg38
    GRCh38,
    #[default]
    Unknown,
}

impl GenomeBuild {
    fn from_header(line: &str) -> Option<GenomeBuild> {
        let lower = line.to_lowercase();
        if lower.contains("build 37") || lower.contains("grch37") || lower.contains("hg19") {
            Some(GenomeBuild::GRCh37)
        } else if lower.contains("build 38") || lower.contains("grch38") || lower.contains("hg38") {
            Some(GenomeBuild::GRCh38)
        } else {
            None
        }
    }
}

/// Counters collected while parsing a genotype export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseSummary {
    /// Non-comment, non-blank lines.
    pub data_lines: usize,
    /// Data lines dropped for too few columns, a non-`rs` id or a bad position.
    pub skipped_lines: usize,
    /// Lines whose rsid replaced an earlier line with the same rsid.
    pub duplicate_rsids: usize,
    /// Kept lines with a `--` genotype.
    pub no_calls: usize,
    pub build: GenomeBuild,
}

/// A parsed genotype export.
#[derive(Debug, Clone, Default)]
pub struct GenomeFile {
    pub variants: VariantMap,
    pub summary: ParseSummary,
}

impl GenomeFile {
    fn ingest_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if trimmed.starts_with('#') {
            if self.summary.build == GenomeBuild::Unknown {
                if let Some(build) = GenomeBuild::from_header(trimmed) {
                    self.summary.build = build;
                }
            }
            return;
        }

        self.summary.data_lines += 1;
        match parse_genome_line(trimmed) {
            Some(variant) => {
                if variant.genotype == "--" {
                    self.summary.no_calls += 1;
                }
                let key = variant.rsid.to_lowercase();
                if self.variants.insert(key, variant).is_some() {
                    self.summary.duplicate_rsids += 1;
                }
            }
            None => {
                self.summary.skipped_lines += 1;
            }
        }
    }

    /// Number of distinct rsids kept.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl TryFrom<&Path> for GenomeFile {
    type Error = GenoreportError;

    ///
    /// Read a genotype export from disk (`.gz` is decompressed, `-` is stdin).
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let path = value.to_str().ok_or_else(|| {
            GenoreportError::FileReadError(format!("path is not valid UTF-8: {:?}", value))
        })?;
        let reader = get_dynamic_reader_w_stdin(path)?;
        parse_genome_reader(reader)
    }
}

impl TryFrom<&str> for GenomeFile {
    type Error = GenoreportError;

    fn try_from(value: &str) -> Result<Self> {
        GenomeFile::try_from(Path::new(value))
    }
}

///
/// Parse one data line: `rsid chromosome position genotype`, whitespace
/// separated. Extra columns are ignored. Returns `None` for lines that can't
/// be used.
///
fn parse_genome_line(line: &str) -> Option<InputVariant> {
    let mut fields = line.split_whitespace();
    let rsid = fields.next()?;
    let chromosome = fields.next()?;
    let position = fields.next()?;
    let genotype = fields.next()?;

    // case sensitive: internal vendor ids (i3000001) and odd casings are dropped
    if !rsid.starts_with("rs") {
        return None;
    }
    let position = match position.parse::<u64>() {
        Ok(p) => p,
        Err(_) => {
            debug!("Skipping {}: non-numeric position {:?}", rsid, position);
            return None;
        }
    };

    Some(InputVariant {
        rsid: rsid.to_string(),
        chromosome: chromosome.to_string(),
        position,
        genotype: genotype.to_string(),
    })
}

///
/// Parse the text of a genotype export into a map keyed by lowercased rsid.
///
/// Best effort: malformed lines are skipped, and when an rsid repeats the
/// last line wins.
///
pub fn parse_genome_file(content: &str) -> VariantMap {
    let mut genome = GenomeFile::default();
    for line in content.lines() {
        genome.ingest_line(line);
    }
    genome.variants
}

///
/// Parse a genotype export from a reader, keeping the parse counters.
///
/// Only read errors are returned; malformed content is skipped like in
/// [parse_genome_file].
///
pub fn parse_genome_reader<R: BufRead>(reader: R) -> Result<GenomeFile> {
    let mut genome = GenomeFile::default();
    for line in reader.lines() {
        let line = line?;
        genome.ingest_line(&line);
    }

    info!(
        "Parsed {} variants from {} data lines ({} skipped, {} no-calls, build {:?})",
        genome.len(),
        genome.summary.data_lines,
        genome.summary.skipped_lines,
        genome.summary.no_calls,
        genome.summary.build
    );

    Ok(genome)
}
