//! Corpus-wide frequency and average tables.

use crate::core::PetRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolCardAverage {
    pub school: String,
    pub average_cards: f64,
    pub pets: usize,
}

/// Occurrences of each trimmed, non-empty name, most frequent first.
/// Equal counts keep first-seen order.
fn tally<'a, I>(names: I, limit: usize) -> Vec<NameCount>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: Vec<NameCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for name in names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        match index.get(name).copied() {
            Some(slot) => counts[slot].count += 1,
            None => {
                index.insert(name, counts.len());
                counts.push(NameCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Most common spell cards across all pets.
pub fn top_cards(pets: &[PetRecord], limit: usize) -> Vec<NameCount> {
    tally(pets.iter().flat_map(|p| p.cards.iter()), limit)
}

/// Most common talents across all pets.
pub fn top_talents(pets: &[PetRecord], limit: usize) -> Vec<NameCount> {
    tally(pets.iter().flat_map(|p| p.abilities.talents.iter()), limit)
}

/// Mean card count per raw school label, in first-seen order.
///
/// Unlike the ranking, nothing is trimmed or excluded here: a missing or
/// empty school is reported as `"Unknown"`.
pub fn average_cards_by_school(pets: &[PetRecord]) -> Vec<SchoolCardAverage> {
    let mut groups: Vec<(String, usize, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for pet in pets {
        let school = match pet.school_label() {
            "" => "Unknown",
            label => label,
        };
        let slot = *index.entry(school.to_string()).or_insert_with(|| {
            groups.push((school.to_string(), 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += pet.card_count();
        groups[slot].2 += 1;
    }

    groups
        .into_iter()
        .map(|(school, total, pets)| SchoolCardAverage {
            school,
            average_cards: total as f64 / pets as f64,
            pets,
        })
        .collect()
}

/// All corpus tables in one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub total_pets: usize,
    pub top_cards: Vec<NameCount>,
    pub top_talents: Vec<NameCount>,
    pub average_cards_by_school: Vec<SchoolCardAverage>,
}

impl InsightsReport {
    pub fn build(pets: &[PetRecord], card_limit: usize, talent_limit: usize) -> Self {
        Self {
            total_pets: pets.len(),
            top_cards: top_cards(pets, card_limit),
            top_talents: top_talents(pets, talent_limit),
            average_cards_by_school: average_cards_by_school(pets),
        }
    }
}
