//! Pet scoring: five sub-scores combined into one weighted composite.
//!
//! Everything here is pure and total. Missing or malformed pet data never
//! produces an error; it degrades to "not computable" (`None`) and then to
//! [`NEUTRAL_SCORE`] inside the composite.

pub mod composite;
pub mod sub_scores;
pub mod weights;

/// Value substituted for any sub-score that cannot be computed.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub use composite::{
    composite_from_sub_scores, compute_composite_score, CompositeScorer, ScoreBreakdown,
};
pub use sub_scores::{
    ability_list_score, attributes_score, cards_score, pedigree_score, Stat, SubScores,
};
pub use weights::{NormalizedWeights, ScoringWeights};
