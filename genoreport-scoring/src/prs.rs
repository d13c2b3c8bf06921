use fxhash::FxHashMap as HashMap;
use log::{debug, warn};

use genoreport_core::models::VariantMap;

use crate::models::{PrsConfig, PrsResult, PrsRisk, PrsWeights, RiskTier};

/// rsid (lowercase) → position in every model's weight table.
pub type RsidIndex = HashMap<String, usize>;

///
/// Number of effect alleles the genotype carries: 2 when both alleles are
/// the effect allele, 1 when the call merely contains it.
///
pub fn effect_allele_dosage(genotype: &str, effect_allele: &str) -> u8 {
    if effect_allele.is_empty() {
        return 0;
    }
    if genotype.len() == 2 * effect_allele.len()
        && genotype.starts_with(effect_allele)
        && genotype.ends_with(effect_allele)
    {
        2
    } else if genotype.contains(effect_allele) {
        1
    } else {
        0
    }
}

///
/// Map a raw score onto a tier. `None` when either cutoff is missing.
///
pub fn classify_risk(score: f64, config: &PrsConfig) -> Option<RiskTier> {
    let (lower, upper) = (config.lower_cutoff?, config.upper_cutoff?);

    let tier = if score <= lower {
        if config.lower_is_better {
            RiskTier::Low
        } else {
            RiskTier::High
        }
    } else if score <= upper {
        RiskTier::Normal
    } else if config.lower_is_better {
        RiskTier::High
    } else {
        RiskTier::Low
    };

    Some(tier)
}

///
/// Score every configured PRS model against the user's genotypes.
///
/// `all_weights[j]` holds the weight table of `configs[j]`; both lists are
/// expected to be parallel. Each user rsid found in `index_map` contributes
/// `dosage × effect_weight` to every model. Indices past the end of a
/// model's table are ignored for that model.
///
/// Variants are visited in rsid order so the floating point sums are the
/// same on every run.
///
pub fn calculate_all_prs(
    input: &VariantMap,
    index_map: &RsidIndex,
    configs: &[PrsConfig],
    all_weights: &[PrsWeights],
) -> Vec<PrsResult> {
    if configs.len() != all_weights.len() {
        warn!(
            "{} PRS configs but {} weight tables, scoring the first {}",
            configs.len(),
            all_weights.len(),
            configs.len().min(all_weights.len())
        );
    }

    let mut indexed: Vec<(&str, usize)> = input
        .iter()
        .filter_map(|(rsid, _)| index_map.get(rsid).map(|&idx| (rsid.as_str(), idx)))
        .collect();
    indexed.sort_unstable();

    debug!(
        "{} of {} user variants are present in the PRS index",
        indexed.len(),
        input.len()
    );

    let mut scores = vec![0.0_f64; configs.len().min(all_weights.len())];

    for (rsid, idx) in indexed {
        let genotype = &input[rsid].genotype;
        for (score, model) in scores.iter_mut().zip(all_weights) {
            let Some((effect_weight, effect_allele)) = model.weights.get(idx) else {
                continue;
            };
            *score += f64::from(effect_allele_dosage(genotype, effect_allele)) * effect_weight;
        }
    }

    configs
        .iter()
        .zip(scores)
        .map(|(config, score)| {
            let risk = match classify_risk(score, config) {
                Some(tier) => PrsRisk::Tier(tier),
                None => PrsRisk::Score(score),
            };
            PrsResult {
                name: config.name.clone(),
                score,
                risk,
                lower_cutoff: config.lower_cutoff,
                upper_cutoff: config.upper_cutoff,
                lower_is_better: config.lower_is_better,
                pgs_id: config.pgs_id.clone(),
                sex: config.sex.clone(),
            }
        })
        .collect()
}
