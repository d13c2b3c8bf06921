use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One entry of `prs_config.json`'s `prs_list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrsConfig {
    pub name: String,
    #[serde(default)]
    pub lower_cutoff: Option<f64>,
    #[serde(default)]
    pub upper_cutoff: Option<f64>,
    /// When false (the default) a higher raw score means lower risk.
    #[serde(default)]
    pub lower_is_better: bool,
    #[serde(default)]
    pub pgs_id: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
}

/// Top level of `prs_config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrsConfigFile {
    pub prs_list: Vec<PrsConfig>,
}

///
/// Flat weight table of one PRS model. Entry `i` is the
/// `(effect_weight, effect_allele)` pair for the rsid the index maps to `i`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrsWeights {
    pub weights: Vec<(f64, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Normal,
    High,
}

impl Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Normal => write!(f, "normal"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

///
/// A tier when both cutoffs are configured, otherwise the raw score.
/// Serializes as `"low"`/`"normal"`/`"high"` or as a bare number.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrsRisk {
    Tier(RiskTier),
    Score(f64),
}

impl Display for PrsRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrsRisk::Tier(tier) => write!(f, "{}", tier),
            PrsRisk::Score(score) => write!(f, "{:.4}", score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrsResult {
    pub name: String,
    pub score: f64,
    pub risk: PrsRisk,
    pub lower_cutoff: Option<f64>,
    pub upper_cutoff: Option<f64>,
    pub lower_is_better: bool,
    pub pgs_id: Option<String>,
    pub sex: Option<String>,
}

///
/// Clinical inputs of the Pooled Cohort Equations. Cholesterol values are in
/// mg/dL, blood pressure in mmHg.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscvdFactors {
    pub age: f64,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub systolic_bp: f64,
    /// Whether the systolic pressure is under treatment.
    pub is_hypertensive: bool,
    pub is_smoker: bool,
    pub is_diabetic: bool,
    pub is_black: bool,
    pub is_male: bool,
}

/// Coefficient set of one race/sex group. Terms are natural logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PooledCohortCoefficients {
    pub ln_age: f64,
    pub ln_age_squared: f64,
    pub ln_total_cholesterol: f64,
    pub ln_age_x_ln_total_cholesterol: f64,
    pub ln_hdl: f64,
    pub ln_age_x_ln_hdl: f64,
    pub ln_treated_sbp: f64,
    pub ln_age_x_ln_treated_sbp: f64,
    pub ln_untreated_sbp: f64,
    pub ln_age_x_ln_untreated_sbp: f64,
    pub smoker: f64,
    pub ln_age_x_smoker: f64,
    pub diabetes: f64,
    pub baseline_survival: f64,
    pub mean_sum: f64,
}
