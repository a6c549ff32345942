//! Scoring weights for the composite pet score
//!
//! `ScoringWeights` is the raw, user-facing form (config file, CLI flags).
//! `NormalizedWeights` can only be obtained through
//! [`ScoringWeights::normalize`], so anything that reaches the composite
//! scorer already sums to 1 (or is the all-zero degenerate set).

use serde::{Deserialize, Serialize};

/// Raw scoring weights as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the spell card count
    #[serde(default = "default_cards_weight")]
    pub cards: f64,

    /// Weight for talent rarity
    #[serde(default = "default_talents_weight")]
    pub talents: f64,

    /// Weight for derby ability rarity
    #[serde(default = "default_derby_weight")]
    pub derby: f64,

    /// Weight for the official pedigree rating
    #[serde(default = "default_pedigree_weight")]
    pub pedigree: f64,

    /// Weight for base attributes
    #[serde(default = "default_attributes_weight")]
    pub attributes: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cards: default_cards_weight(),
            talents: default_talents_weight(),
            derby: default_derby_weight(),
            pedigree: default_pedigree_weight(),
            attributes: default_attributes_weight(),
        }
    }
}

impl ScoringWeights {
    pub fn new(cards: f64, talents: f64, derby: f64, pedigree: f64, attributes: f64) -> Self {
        Self {
            cards,
            talents,
            derby,
            pedigree,
            attributes,
        }
    }

    /// Same weight on every component.
    pub fn uniform(weight: f64) -> Self {
        Self::new(weight, weight, weight, weight, weight)
    }

    // Pure function: Check if a weight is usable
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!(
                "{} weight must be a finite, non-negative number (got {})",
                name, weight
            ))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.cards, "Cards"),
            Self::validate_weight(self.talents, "Talents"),
            Self::validate_weight(self.derby, "Derby"),
            Self::validate_weight(self.pedigree, "Pedigree"),
            Self::validate_weight(self.attributes, "Attributes"),
        ]
    }

    /// Validate every weight, reporting the first failure.
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.cards + self.talents + self.derby + self.pedigree + self.attributes
    }

    /// Scale the weights so they sum to 1.
    ///
    /// Negative or non-finite weights count as 0. When nothing positive is
    /// left the divisor falls back to 1 and every normalized weight is 0.
    pub fn normalize(&self) -> NormalizedWeights {
        let clean = |w: f64| if Self::is_valid_weight(w) { w } else { 0.0 };
        let parts = [
            clean(self.cards),
            clean(self.talents),
            clean(self.derby),
            clean(self.pedigree),
            clean(self.attributes),
        ];
        // Scale by the largest part first so huge finite weights cannot
        // overflow the sum.
        let largest = parts.iter().copied().fold(0.0, f64::max);
        let parts = if largest > 0.0 {
            parts.map(|w| w / largest)
        } else {
            parts
        };
        let sum: f64 = parts.iter().sum();
        let safe = if sum > 0.0 { sum } else { 1.0 };
        if sum <= 0.0 {
            log::debug!("Scoring weights sum to {}; using the degenerate all-zero set", sum);
        }

        NormalizedWeights {
            cards: parts[0] / safe,
            talents: parts[1] / safe,
            derby: parts[2] / safe,
            pedigree: parts[3] / safe,
            attributes: parts[4] / safe,
        }
    }
}

// Default weights match the dashboard's initial slider positions
pub fn default_cards_weight() -> f64 {
    0.3
}
pub fn default_talents_weight() -> f64 {
    0.3
}
pub fn default_derby_weight() -> f64 {
    0.1
}
pub fn default_pedigree_weight() -> f64 {
    0.2
}
pub fn default_attributes_weight() -> f64 {
    0.1
}

/// Weights that sum to 1, or are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedWeights {
    cards: f64,
    talents: f64,
    derby: f64,
    pedigree: f64,
    attributes: f64,
}

impl NormalizedWeights {
    pub fn cards(&self) -> f64 {
        self.cards
    }

    pub fn talents(&self) -> f64 {
        self.talents
    }

    pub fn derby(&self) -> f64 {
        self.derby
    }

    pub fn pedigree(&self) -> f64 {
        self.pedigree
    }

    pub fn attributes(&self) -> f64 {
        self.attributes
    }

    pub fn total(&self) -> f64 {
        self.cards + self.talents + self.derby + self.pedigree + self.attributes
    }

    /// True for the all-zero set produced when the raw weights had no
    /// positive mass.
    pub fn is_degenerate(&self) -> bool {
        self.total() <= 0.0
    }
}

impl Default for NormalizedWeights {
    fn default() -> Self {
        ScoringWeights::default().normalize()
    }
}
