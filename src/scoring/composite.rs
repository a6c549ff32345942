use super::sub_scores::SubScores;
use super::weights::{NormalizedWeights, ScoringWeights};
use super::NEUTRAL_SCORE;
use crate::core::PetRecord;
use crate::rarity::RarityLookup;
use serde::Serialize;

/// Weighted sum of sub-scores, each missing sub-score replaced by the
/// neutral value on its own.
///
/// The degenerate all-zero weight set scores every pet as neutral.
pub fn composite_from_sub_scores(scores: &SubScores, weights: &NormalizedWeights) -> f64 {
    if weights.is_degenerate() {
        return NEUTRAL_SCORE;
    }
    let val = |s: Option<f64>| s.unwrap_or(NEUTRAL_SCORE);

    weights.cards() * val(scores.cards)
        + weights.talents() * val(scores.talents)
        + weights.derby() * val(scores.derby)
        + weights.pedigree() * val(scores.pedigree)
        + weights.attributes() * val(scores.attributes)
}

/// Composite score of a single pet.
pub fn compute_composite_score(
    pet: &PetRecord,
    weights: &NormalizedWeights,
    lookup: &RarityLookup,
) -> f64 {
    composite_from_sub_scores(&SubScores::for_pet(pet, lookup), weights)
}

/// Per-pet score together with the parts it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub sub_scores: SubScores,
    pub composite: f64,
}

/// Scores pets against a fixed rarity lookup and weight set.
///
/// The lookup is borrowed, so one catalog can back any number of scorers
/// (one per weight setting) without being rebuilt.
#[derive(Debug, Clone, Copy)]
pub struct CompositeScorer<'a> {
    lookup: &'a RarityLookup,
    weights: NormalizedWeights,
}

impl<'a> CompositeScorer<'a> {
    pub fn new(lookup: &'a RarityLookup, weights: &ScoringWeights) -> Self {
        Self {
            lookup,
            weights: weights.normalize(),
        }
    }

    pub fn weights(&self) -> &NormalizedWeights {
        &self.weights
    }

    pub fn sub_scores(&self, pet: &PetRecord) -> SubScores {
        SubScores::for_pet(pet, self.lookup)
    }

    pub fn score(&self, pet: &PetRecord) -> f64 {
        composite_from_sub_scores(&self.sub_scores(pet), &self.weights)
    }

    pub fn breakdown(&self, pet: &PetRecord) -> ScoreBreakdown {
        let sub_scores = self.sub_scores(pet);
        ScoreBreakdown {
            sub_scores,
            composite: composite_from_sub_scores(&sub_scores, &self.weights),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::option;
    use proptest::prelude::*;

    fn sub_score() -> impl Strategy<Value = Option<f64>> {
        option::of(0.0..=100.0f64)
    }

    proptest! {
        #[test]
        fn composite_stays_in_range(
            cards in sub_score(), talents in sub_score(), derby in sub_score(),
            pedigree in sub_score(), attributes in sub_score(),
            w in proptest::array::uniform5(0.0..1.0f64),
        ) {
            let scores = SubScores { cards, talents, derby, pedigree, attributes };
            let weights = ScoringWeights::new(w[0], w[1], w[2], w[3], w[4]).normalize();
            let s = composite_from_sub_scores(&scores, &weights);
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&s));
        }

        #[test]
        fn uniform_weight_scale_is_irrelevant(
            cards in sub_score(), talents in sub_score(), derby in sub_score(),
            pedigree in sub_score(), attributes in sub_score(),
            k in 0.01..100.0f64,
        ) {
            let scores = SubScores { cards, talents, derby, pedigree, attributes };
            let ones = composite_from_sub_scores(&scores, &ScoringWeights::uniform(1.0).normalize());
            let scaled = composite_from_sub_scores(&scores, &ScoringWeights::uniform(k).normalize());
            prop_assert!((ones - scaled).abs() < 1e-9);
        }
    }
}
