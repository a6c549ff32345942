//! The five per-pet sub-scores.
//!
//! Each scorer maps one raw dimension of a pet onto [0, 100]. A return of
//! `None` means "not computable from the available data", which is not the
//! same thing as a real 0: the composite scorer substitutes the neutral
//! value for `None` only.

use crate::core::{AttributeValue, PetRecord};
use crate::rarity::RarityLookup;
use serde::Serialize;
use std::collections::BTreeMap;

/// Card count at which the cards score saturates at 100.
pub const CARD_SATURATION: f64 = 3.0;
/// Card count at which the cards score reaches 50.
pub const CARD_MIDPOINT: f64 = 1.3;

/// Piecewise-linear cards score.
///
/// Ramps from 0 to 50 over `[0, 1.3]`, from 50 to 100 over `(1.3, 3)` and
/// stays at 100 from 3 cards on. Negative or `NaN` counts score 0.
pub fn cards_score(count: f64) -> f64 {
    let c = if count.is_nan() { 0.0 } else { count.max(0.0) };
    if c >= CARD_SATURATION {
        return 100.0;
    }
    if c <= CARD_MIDPOINT {
        (c / CARD_MIDPOINT) * 50.0
    } else {
        50.0 + ((c - CARD_MIDPOINT) / (CARD_SATURATION - CARD_MIDPOINT)) * 50.0
    }
}

/// Mean rarity percentage over the abilities found in the lookup.
///
/// Names the lookup does not know are skipped, not counted as zero. With no
/// known names at all the score is not computable.
pub fn ability_list_score<S: AsRef<str>>(names: &[S], lookup: &RarityLookup) -> Option<f64> {
    let (sum, found) = names
        .iter()
        .filter_map(|name| lookup.percentage(name.as_ref()))
        .fold((0.0, 0usize), |(sum, n), pct| (sum + pct, n + 1));

    (found > 0).then(|| sum / found as f64)
}

/// Base attributes with their fixed maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Strength,
    Intellect,
    Agility,
    Will,
    Power,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Strength,
        Stat::Intellect,
        Stat::Agility,
        Stat::Will,
        Stat::Power,
    ];

    /// Key used in the scraped attribute map.
    pub fn key(self) -> &'static str {
        match self {
            Stat::Strength => "Strength",
            Stat::Intellect => "Intellect",
            Stat::Agility => "Agility",
            Stat::Will => "Will",
            Stat::Power => "Power",
        }
    }

    pub fn max(self) -> f64 {
        match self {
            Stat::Strength => 255.0,
            Stat::Intellect => 250.0,
            Stat::Agility => 260.0,
            Stat::Will => 260.0,
            Stat::Power => 250.0,
        }
    }
}

/// Mean of each present stat expressed as a clamped percentage of its max.
///
/// Keys other than the five stats are ignored, as are values that do not
/// read as finite numbers.
pub fn attributes_score(attributes: &BTreeMap<String, AttributeValue>) -> Option<f64> {
    let (sum, n) = Stat::ALL
        .iter()
        .filter_map(|stat| {
            let value = attributes.get(stat.key())?.as_f64();
            let max = stat.max();
            (value.is_finite() && max > 0.0).then(|| (value / max * 100.0).clamp(0.0, 100.0))
        })
        .fold((0.0, 0usize), |(sum, n), pct| (sum + pct, n + 1));

    (n > 0).then(|| sum / n as f64)
}

/// Pedigree clamped to [0, 100]; absent or non-finite is not computable.
pub fn pedigree_score(pedigree: Option<f64>) -> Option<f64> {
    pedigree
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
}

/// All five sub-scores of one pet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScores {
    pub cards: Option<f64>,
    pub talents: Option<f64>,
    pub derby: Option<f64>,
    pub pedigree: Option<f64>,
    pub attributes: Option<f64>,
}

impl SubScores {
    pub fn for_pet(pet: &PetRecord, lookup: &RarityLookup) -> Self {
        Self {
            cards: Some(cards_score(pet.card_count() as f64)),
            talents: ability_list_score(pet.abilities.talents.as_slice(), lookup),
            derby: ability_list_score(pet.abilities.derby.as_slice(), lookup),
            pedigree: pedigree_score(pet.pedigree),
            attributes: attributes_score(&pet.attributes),
        }
    }

    /// Every dimension not computable.
    pub fn unknown() -> Self {
        Self::default()
    }
}
