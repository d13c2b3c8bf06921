use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use genoreport_core::errors::{GenoreportError, Result};

/// Locations of the three static PRS assets.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PrsAssetPaths {
    pub config: PathBuf,
    pub weights: PathBuf,
    pub index: PathBuf,
}

///
/// Inputs of a report run, read from a TOML file. Relative paths are taken
/// relative to the directory holding the config file.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub genome: Option<PathBuf>,
    pub clinvar: Option<PathBuf>,
    pub snpedia: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prs: Option<PrsAssetPaths>,
}

impl ReportConfig {
    fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };

        self.genome = self.genome.map(resolve);
        self.clinvar = self.clinvar.map(resolve);
        self.snpedia = self.snpedia.map(resolve);
        self.output = self.output.map(resolve);
        self.prs = self.prs.map(|prs| PrsAssetPaths {
            config: resolve(prs.config),
            weights: resolve(prs.weights),
            index: resolve(prs.index),
        });
        self
    }

    ///
    /// A report needs at least one reference database.
    ///
    pub fn validate(&self) -> Result<()> {
        if self.clinvar.is_none() && self.snpedia.is_none() {
            return Err(GenoreportError::InvalidConfig(
                "at least one of `clinvar` or `snpedia` must be set".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for ReportConfig {
    type Error = GenoreportError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)
            .map_err(|e| GenoreportError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let config: ReportConfig = toml::from_str(&toml_str)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }
}
