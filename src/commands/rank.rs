use super::GlobalOptions;
use crate::aggregation::rank_schools;
use crate::cli::{OutputArgs, WeightArgs};
use crate::rarity::RarityLookup;
use crate::scoring::{CompositeScorer, ScoringWeights};
use anyhow::Result;

/// Apply per-component CLI overrides on top of the configured weights.
pub fn apply_weight_overrides(base: ScoringWeights, overrides: &WeightArgs) -> ScoringWeights {
    ScoringWeights {
        cards: overrides.cards.unwrap_or(base.cards),
        talents: overrides.talents.unwrap_or(base.talents),
        derby: overrides.derby.unwrap_or(base.derby),
        pedigree: overrides.pedigree.unwrap_or(base.pedigree),
        attributes: overrides.attributes.unwrap_or(base.attributes),
    }
}

pub fn handle_rank(globals: &GlobalOptions, weights: &WeightArgs, output: &OutputArgs) -> Result<()> {
    let config = globals.load_config()?;
    let weights = apply_weight_overrides(config.weights(), weights);
    if let Err(e) = weights.validate() {
        anyhow::bail!("Invalid weight on the command line: {}", e);
    }

    let dataset = globals.load_dataset(&config)?;
    let lookup = RarityLookup::from_catalog(&dataset.abilities);
    let scorer = CompositeScorer::new(&lookup, &weights);
    let report = rank_schools(&dataset.pets, &scorer);
    log::info!(
        "Ranked {} schools from {} pets",
        report.schools.len(),
        report.total_pets
    );

    let mut writer = globals.writer(output)?;
    writer.write_ranking(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_components() {
        let merged = apply_weight_overrides(
            ScoringWeights::default(),
            &WeightArgs {
                talents: Some(0.0),
                attributes: Some(2.0),
                ..WeightArgs::default()
            },
        );
        assert_eq!(merged, ScoringWeights::new(0.3, 0.0, 0.1, 0.2, 2.0));
    }
}
