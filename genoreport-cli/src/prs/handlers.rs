use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use genoreport_io::{GenomeFile, PrsAssetPaths};
use genoreport_scoring::calculate_all_prs;

use crate::report::handlers::{load_prs_assets, write_json};

pub fn run_prs(matches: &ArgMatches) -> Result<()> {
    let genome = matches
        .get_one::<String>("genome")
        .expect("A genotype file is required.");

    let path_arg = |id: &str| {
        matches
            .get_one::<String>(id)
            .map(PathBuf::from)
            .expect("All three PRS assets are required.")
    };
    let paths = PrsAssetPaths {
        config: path_arg("prs-config"),
        weights: path_arg("prs-weights"),
        index: path_arg("prs-index"),
    };
    let output = matches.get_one::<String>("output").map(Path::new);

    let genome = GenomeFile::try_from(genome.as_str())
        .with_context(|| format!("Failed to read genotype file {}", genome))?;
    let assets = load_prs_assets(&paths)?;

    let results = calculate_all_prs(&genome.variants, &assets.index, &assets.configs, &assets.weights);

    write_json(&results, output)
}
