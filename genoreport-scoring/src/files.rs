use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use genoreport_core::errors::{GenoreportError, Result};
use genoreport_core::utils::get_dynamic_reader;

use crate::models::{PrsConfig, PrsConfigFile, PrsWeights};
use crate::prs::RsidIndex;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = get_dynamic_reader(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Read the `prs_list` of a `prs_config.json`.
pub fn load_prs_configs(path: &Path) -> Result<Vec<PrsConfig>> {
    let file: PrsConfigFile = read_json(path)?;
    Ok(file.prs_list)
}

/// Read `prs_weights.json`, one weight table per configured model.
pub fn load_prs_weights(path: &Path) -> Result<Vec<PrsWeights>> {
    read_json(path)
}

/// Read the rsid → weight-index map. Keys are lowercased.
pub fn load_rsid_index(path: &Path) -> Result<RsidIndex> {
    let raw: RsidIndex = read_json(path)?;
    Ok(raw
        .into_iter()
        .map(|(rsid, idx)| (rsid.to_lowercase(), idx))
        .collect())
}

///
/// The three static PRS assets, loaded together so the configs and weight
/// tables are known to line up.
///
#[derive(Debug, Clone)]
pub struct PrsAssets {
    pub configs: Vec<PrsConfig>,
    pub weights: Vec<PrsWeights>,
    pub index: RsidIndex,
}

impl PrsAssets {
    pub fn load(config_path: &Path, weights_path: &Path, index_path: &Path) -> Result<Self> {
        let configs = load_prs_configs(config_path)?;
        let weights = load_prs_weights(weights_path)?;
        let index = load_rsid_index(index_path)?;

        if configs.len() != weights.len() {
            return Err(GenoreportError::InvalidReferenceData(format!(
                "{} lists {} PRS models but {} has {} weight tables",
                config_path.display(),
                configs.len(),
                weights_path.display(),
                weights.len()
            )));
        }

        info!(
            "Loaded {} PRS models over {} indexed variants",
            configs.len(),
            index.len()
        );

        Ok(PrsAssets {
            configs,
            weights,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use genoreport_core::models::InputVariant;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::{PrsRisk, RiskTier};
    use crate::prs::calculate_all_prs;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/prs")
            .join(file_name)
    }

    #[fixture]
    fn assets() -> PrsAssets {
        PrsAssets::load(
            &get_test_path("prs_config.json"),
            &get_test_path("prs_weights.json"),
            &get_test_path("rsid_index.json"),
        )
        .unwrap()
    }

    #[rstest]
    fn test_load_configs_with_defaults(assets: PrsAssets) {
        let names: Vec<&str> = assets.configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Coronary artery disease", "Height", "Breast cancer"]);

        assert!(assets.configs[0].lower_is_better);
        assert!(!assets.configs[2].lower_is_better);
        assert_eq!(assets.configs[1].lower_cutoff, None);
        assert_eq!(assets.configs[2].sex.as_deref(), Some("female"));
    }

    #[rstest]
    fn test_index_keys_are_lowercased(assets: PrsAssets) {
        assert_eq!(assets.index.get("rs1015362"), Some(&2));
        assert!(!assets.index.contains_key("Rs1015362"));
        assert_eq!(assets.weights[1].weights[4], (0.75, "G".to_string()));
    }

    #[rstest]
    fn test_scores_over_fixture_assets(assets: PrsAssets) {
        let input: genoreport_core::models::VariantMap = [
            ("rs429358", "TC"),
            ("rs4680", "AG"),
            ("rs1015362", "CC"),
            ("rs7412", "CC"),
            ("rs12913832", "GG"),
            ("rs53576", "AG"),
        ]
        .iter()
        .map(|(rsid, genotype)| {
            (
                rsid.to_string(),
                InputVariant {
                    rsid: rsid.to_string(),
                    chromosome: "1".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            )
        })
        .collect();

        let results = calculate_all_prs(&input, &assets.index, &assets.configs, &assets.weights);

        assert_eq!(results.len(), 3);
        assert!((results[0].score - 0.4).abs() < 1e-9);
        assert_eq!(results[0].risk, PrsRisk::Tier(RiskTier::Normal));
        assert!((results[1].score - 3.5).abs() < 1e-9);
        assert!(matches!(results[1].risk, PrsRisk::Score(s) if (s - 3.5).abs() < 1e-9));
        assert!((results[2].score - 0.05).abs() < 1e-9);
        assert_eq!(results[2].risk, PrsRisk::Tier(RiskTier::High));
    }

    #[rstest]
    fn test_mismatched_weight_tables_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().join("weights.json");
        std::fs::write(&weights, r#"[{"weights": [[0.1, "A"]]}]"#).unwrap();

        let result = PrsAssets::load(
            &get_test_path("prs_config.json"),
            &weights,
            &get_test_path("rsid_index.json"),
        );
        assert!(matches!(result, Err(GenoreportError::InvalidReferenceData(_))));
    }

    #[rstest]
    fn test_missing_file_is_a_read_error() {
        let result = load_prs_weights(&get_test_path("does_not_exist.json"));
        assert!(matches!(result, Err(GenoreportError::FileReadError(_))));
    }
}
