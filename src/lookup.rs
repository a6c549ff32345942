//! Pet search and the per-pet profile view.

use crate::core::{AbilityEntry, Dataset, PetRecord, SpellEntry};
use crate::rarity::RarityTier;
use crate::scoring::{CompositeScorer, ScoreBreakdown};
use crate::stats::PedigreeComparison;
use serde::Serialize;
use std::collections::HashMap;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Pets whose name contains `query` (case-insensitive), in corpus order.
/// A blank query matches nothing.
pub fn search_pets<'a>(pets: &'a [PetRecord], query: &str, limit: usize) -> Vec<&'a PetRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    pets.iter()
        .filter(|p| {
            p.name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle)
        })
        .take(limit)
        .collect()
}

/// Rewrites protocol-relative and plain-http icon URLs to https.
pub fn normalize_icon(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    if let Some(rest) = url.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if let Some(rest) = url.strip_prefix("http://") {
        return Some(format!("https://{rest}"));
    }
    Some(url.to_string())
}

/// Exact-name views of the ability and spell catalogs for display.
#[derive(Debug, Clone, Default)]
pub struct DisplayCatalogs {
    ability_rarity: HashMap<String, Option<String>>,
    spell_icon: HashMap<String, Option<String>>,
}

impl DisplayCatalogs {
    pub fn new(abilities: &[AbilityEntry], spells: &[SpellEntry]) -> Self {
        let ability_rarity = abilities
            .iter()
            .map(|a| (a.name.clone().unwrap_or_default(), a.rarity.clone()))
            .collect();
        let spell_icon = spells
            .iter()
            .map(|s| (s.name.clone().unwrap_or_default(), s.icon.clone()))
            .collect();
        Self {
            ability_rarity,
            spell_icon,
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(&dataset.abilities, &dataset.spells)
    }

    /// Display rarity of an ability, matched on its exact name.
    pub fn rarity(&self, ability: &str) -> Option<RarityTier> {
        self.ability_rarity
            .get(ability)?
            .as_deref()
            .and_then(RarityTier::parse_label)
    }

    /// Normalized icon URL of a spell card, matched on its exact name.
    pub fn spell_icon(&self, spell: &str) -> Option<String> {
        normalize_icon(self.spell_icon.get(spell)?.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellCard {
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentBadge {
    pub name: String,
    pub rarity: Option<RarityTier>,
}

/// Everything shown for a single pet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetProfile {
    pub name: String,
    pub school: String,
    pub pedigree: Option<f64>,
    pub icon: Option<String>,
    pub spells: Vec<SpellCard>,
    pub talents: Vec<TalentBadge>,
    pub derby: Vec<String>,
    pub score: ScoreBreakdown,
    pub pedigree_comparison: PedigreeComparison,
}

impl PetProfile {
    pub fn build(
        pet: &PetRecord,
        pets: &[PetRecord],
        catalogs: &DisplayCatalogs,
        scorer: &CompositeScorer<'_>,
    ) -> Self {
        let spells = pet
            .cards
            .iter()
            .map(|name| SpellCard {
                name: name.clone(),
                icon: catalogs.spell_icon(name),
            })
            .collect();
        let talents = pet
            .abilities
            .talents
            .iter()
            .map(|name| TalentBadge {
                name: name.clone(),
                rarity: catalogs.rarity(name),
            })
            .collect();

        Self {
            name: pet.display_name().to_string(),
            school: pet.school_label().to_string(),
            pedigree: pet.pedigree,
            icon: normalize_icon(pet.icon.as_deref()),
            spells,
            talents,
            derby: pet.abilities.derby.clone(),
            score: scorer.breakdown(pet),
            pedigree_comparison: PedigreeComparison::for_pet(pet, pets),
        }
    }

    /// Pedigree rounded for the header badge.
    pub fn rounded_pedigree(&self) -> Option<i64> {
        self.pedigree
            .filter(|p| p.is_finite())
            .map(|p| p.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::RarityLookup;
    use crate::scoring::ScoringWeights;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> PetRecord {
        PetRecord {
            name: Some(name.to_string()),
            ..PetRecord::default()
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let pets = vec![named("Frost Beetle"), named("Fire Cat"), named("Beetle Bug")];
        let hits: Vec<&str> = search_pets(&pets, "  BEETLE ", 10)
            .into_iter()
            .map(|p| p.display_name())
            .collect();
        assert_eq!(hits, vec!["Frost Beetle", "Beetle Bug"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let pets = vec![named("Frost Beetle")];
        assert!(search_pets(&pets, "   ", 10).is_empty());
    }

    #[test]
    fn search_respects_limit() {
        let pets: Vec<PetRecord> = (0..25).map(|i| named(&format!("Imp {i}"))).collect();
        assert_eq!(search_pets(&pets, "imp", DEFAULT_SEARCH_LIMIT).len(), 10);
    }

    #[test]
    fn icons_are_upgraded_to_https() {
        assert_eq!(
            normalize_icon(Some("//cdn.example/a.png")).as_deref(),
            Some("https://cdn.example/a.png")
        );
        assert_eq!(
            normalize_icon(Some("http://cdn.example/a.png")).as_deref(),
            Some("https://cdn.example/a.png")
        );
        assert_eq!(
            normalize_icon(Some("https://cdn.example/a.png")).as_deref(),
            Some("https://cdn.example/a.png")
        );
        assert_eq!(normalize_icon(Some("")), None);
        assert_eq!(normalize_icon(None), None);
    }

    #[test]
    fn profile_resolves_catalog_entries() {
        let abilities = vec![
            AbilityEntry::new("Spell-Proof", "Ultra Rare"),
            AbilityEntry::new("Mighty", "Rare"),
        ];
        let spells = vec![SpellEntry {
            name: Some("Fire Cat".into()),
            icon: Some("//img/firecat.png".into()),
            source: None,
        }];
        let catalogs = DisplayCatalogs::new(&abilities, &spells);
        let lookup = RarityLookup::from_catalog(&abilities);
        let scorer = CompositeScorer::new(&lookup, &ScoringWeights::default());

        let mut pet = named("Fire Cat");
        pet.school = Some("Fire".into());
        pet.pedigree = Some(61.6);
        pet.icon = Some("http://img/pet.png".into());
        pet.cards = vec!["Fire Cat".into(), "Meteor".into()];
        pet.abilities.talents = vec!["Spell-Proof".into(), "mighty".into()];
        pet.abilities.derby = vec!["Rally".into()];

        let profile = PetProfile::build(&pet, std::slice::from_ref(&pet), &catalogs, &scorer);

        assert_eq!(profile.icon.as_deref(), Some("https://img/pet.png"));
        assert_eq!(
            profile.spells,
            vec![
                SpellCard {
                    name: "Fire Cat".into(),
                    icon: Some("https://img/firecat.png".into())
                },
                SpellCard {
                    name: "Meteor".into(),
                    icon: None
                },
            ]
        );
        assert_eq!(profile.talents[0].rarity, Some(RarityTier::UltraRare));
        // display lookup is exact-name
        assert_eq!(profile.talents[1].rarity, None);
        assert_eq!(profile.derby, vec!["Rally"]);
        assert_eq!(profile.rounded_pedigree(), Some(62));
        assert_eq!(profile.pedigree_comparison.percentile, Some(100));
        assert_eq!(profile.score.composite, scorer.score(&pet));
    }

    #[test]
    fn non_finite_pedigree_has_no_badge() {
        let lookup = RarityLookup::default();
        let scorer = CompositeScorer::new(&lookup, &ScoringWeights::default());
        let mut pet = named("Odd Cat");
        pet.pedigree = Some(f64::NAN);

        let profile = PetProfile::build(
            &pet,
            std::slice::from_ref(&pet),
            &DisplayCatalogs::default(),
            &scorer,
        );
        assert_eq!(profile.rounded_pedigree(), None);
        assert_eq!(profile.pedigree_comparison.percentile, None);
    }
}
