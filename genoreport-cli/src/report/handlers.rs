use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use genoreport_core::models::{ClinvarDb, Mutation, ResultVariant, SnpediaDb};
use genoreport_io::{
    GenomeFile, ParseSummary, PrsAssetPaths, ReportConfig, load_clinvar_from_path,
    load_snpedia_from_path,
};
use genoreport_matching::{MatchCounts, convert_to_mutations, find_shared_variants};
use genoreport_scoring::{PrsAssets, PrsResult, calculate_all_prs};

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub genome: ParseSummary,
    pub variants: usize,
    pub clinvar_entries: usize,
    pub snpedia_entries: usize,
    pub matches: MatchCounts,
    pub mutations: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub mutations: Vec<Mutation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prs: Option<Vec<PrsResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<ResultVariant>>,
}

///
/// Overlay command line paths on top of the (optional) config file.
///
fn resolve_config(matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ReportConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read report config {}", path))?,
        None => ReportConfig::default(),
    };

    let flag = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);

    if let Some(genome) = flag("genome") {
        config.genome = Some(genome);
    }
    if let Some(clinvar) = flag("clinvar") {
        config.clinvar = Some(clinvar);
    }
    if let Some(snpedia) = flag("snpedia") {
        config.snpedia = Some(snpedia);
    }
    if let Some(output) = flag("output") {
        config.output = Some(output);
    }

    let prs_flags = (flag("prs-config"), flag("prs-weights"), flag("prs-index"));
    match prs_flags {
        (Some(config_path), Some(weights), Some(index)) => {
            config.prs = Some(PrsAssetPaths {
                config: config_path,
                weights,
                index,
            });
        }
        (None, None, None) => {}
        _ => anyhow::bail!("--prs-config, --prs-weights and --prs-index must be given together"),
    }

    config.validate()?;
    Ok(config)
}

pub fn load_prs_assets(paths: &PrsAssetPaths) -> Result<PrsAssets> {
    PrsAssets::load(&paths.config, &paths.weights, &paths.index)
        .context("Failed to load PRS assets")
}

pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn build_report(config: &ReportConfig, include_matches: bool) -> Result<Report> {
    let genome_path = config
        .genome
        .as_deref()
        .context("A genotype file is required (--genome or `genome` in the config)")?;
    let genome = GenomeFile::try_from(genome_path)
        .with_context(|| format!("Failed to read genotype file {}", genome_path.display()))?;

    let clinvar = match &config.clinvar {
        Some(path) => load_clinvar_from_path(path)
            .with_context(|| format!("Failed to load ClinVar from {}", path.display()))?,
        None => ClinvarDb::default(),
    };
    let snpedia = match &config.snpedia {
        Some(path) => load_snpedia_from_path(path)
            .with_context(|| format!("Failed to load SNPedia from {}", path.display()))?,
        None => SnpediaDb::default(),
    };

    let results = find_shared_variants(&genome.variants, &clinvar, &snpedia);
    let mutations = convert_to_mutations(&results);

    let prs = match &config.prs {
        Some(paths) => {
            let assets = load_prs_assets(paths)?;
            Some(calculate_all_prs(
                &genome.variants,
                &assets.index,
                &assets.configs,
                &assets.weights,
            ))
        }
        None => None,
    };

    info!(
        "{} variants, {} matches, {} mutations",
        genome.len(),
        results.len(),
        mutations.len()
    );

    Ok(Report {
        summary: ReportSummary {
            genome: genome.summary.clone(),
            variants: genome.len(),
            clinvar_entries: clinvar.len(),
            snpedia_entries: snpedia.len(),
            matches: MatchCounts::from_results(&results),
            mutations: mutations.len(),
        },
        mutations,
        prs,
        matches: include_matches.then_some(results),
    })
}

pub fn run_report(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let report = build_report(&config, matches.get_flag("all-matches"))?;
    write_json(&report, config.output.as_deref())
}
