//! Ability rarity tiers and the name -> percentage lookup used by the
//! talent and derby sub-scores.

use crate::core::AbilityEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Rarity tiers in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Ultra-Rare")]
    UltraRare,
    Epic,
}

impl RarityTier {
    pub const ALL: [RarityTier; 5] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::UltraRare,
        RarityTier::Epic,
    ];

    /// Fixed percentage contributed by an ability of this tier.
    pub fn percentage(self) -> u8 {
        match self {
            RarityTier::Common => 20,
            RarityTier::Uncommon => 40,
            RarityTier::Rare => 60,
            RarityTier::UltraRare => 80,
            RarityTier::Epic => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::UltraRare => "Ultra-Rare",
            RarityTier::Epic => "Epic",
        }
    }

    /// Strict parse used when building the lookup: case-insensitive, but
    /// the label must otherwise match exactly.
    pub fn from_catalog_label(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "common" => Some(RarityTier::Common),
            "uncommon" => Some(RarityTier::Uncommon),
            "rare" => Some(RarityTier::Rare),
            "ultra-rare" => Some(RarityTier::UltraRare),
            "epic" => Some(RarityTier::Epic),
            _ => None,
        }
    }

    /// Lenient parse for display: trims and accepts `"ultra rare"`.
    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "ultra rare" => Some(RarityTier::UltraRare),
            other => Self::from_catalog_label(other),
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only mapping from lower-cased ability name to rarity tier.
///
/// Built once from the ability catalog and handed to the scorer; entries
/// without a name or with an unrecognised rarity are left out rather than
/// defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RarityLookup {
    by_name: HashMap<String, RarityTier>,
}

impl RarityLookup {
    pub fn from_catalog(entries: &[AbilityEntry]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.as_deref().unwrap_or("").to_lowercase();
            if name.is_empty() {
                continue;
            }
            let Some(tier) = entry
                .rarity
                .as_deref()
                .and_then(RarityTier::from_catalog_label)
            else {
                continue;
            };
            by_name.insert(name, tier);
        }

        log::debug!(
            "Built rarity lookup with {} of {} catalog entries",
            by_name.len(),
            entries.len()
        );
        Self { by_name }
    }

    pub fn tier(&self, ability_name: &str) -> Option<RarityTier> {
        self.by_name.get(&ability_name.to_lowercase()).copied()
    }

    /// Percentage for an ability, or `None` if the name is not catalogued.
    pub fn percentage(&self, ability_name: &str) -> Option<f64> {
        self.tier(ability_name).map(|t| f64::from(t.percentage()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
