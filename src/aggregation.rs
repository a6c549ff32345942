use crate::core::PetRecord;
use crate::scoring::{CompositeScorer, NormalizedWeights};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// School labels that mean "no school" and never form a group.
pub const EXCLUDED_SCHOOLS: [&str; 6] = ["unknown", "unk", "n/a", "na", "none", "(unknown)"];

/// Canonical capitalisation of the known schools.
pub const CANONICAL_SCHOOLS: [&str; 7] = ["Fire", "Balance", "Storm", "Ice", "Death", "Life", "Myth"];

/// True when a school label should be left out of every aggregate.
pub fn is_excluded_school(label: &str) -> bool {
    let trimmed = label.trim();
    trimmed.is_empty() || EXCLUDED_SCHOOLS.contains(&trimmed.to_lowercase().as_str())
}

/// Canonical display name for a known school, the input unchanged otherwise.
pub fn display_school(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    CANONICAL_SCHOOLS
        .iter()
        .find(|canonical| canonical.to_lowercase() == key)
        .map(|canonical| canonical.to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolAggregate {
    pub school: String,
    pub mean_score: f64,
    pub count: usize,
}

impl SchoolAggregate {
    /// Mean rounded to one decimal place, as shown on chart labels.
    pub fn rounded_mean(&self) -> f64 {
        (self.mean_score * 10.0).round() / 10.0
    }
}

#[derive(Debug, Default)]
struct Bucket {
    label: String,
    sum: f64,
    count: usize,
}

/// Mean composite score per school, best school first.
///
/// Pets are grouped by their trimmed school label. Excluded labels are
/// dropped entirely. After canonicalising display names, a later group
/// whose name matches an earlier one case-insensitively is discarded rather
/// than merged. Ties on the mean fall back to the school name.
pub fn compute_school_aggregates(
    pets: &[PetRecord],
    scorer: &CompositeScorer<'_>,
) -> Vec<SchoolAggregate> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut excluded = 0usize;

    for pet in pets {
        let label = pet.school_label().trim();
        if is_excluded_school(label) {
            excluded += 1;
            continue;
        }
        let slot = *index.entry(label.to_string()).or_insert_with(|| {
            buckets.push(Bucket {
                label: label.to_string(),
                ..Bucket::default()
            });
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        bucket.sum += scorer.score(pet);
        bucket.count += 1;
    }

    if excluded > 0 {
        log::debug!("Excluded {} pets without a usable school", excluded);
    }

    let mut seen = HashSet::new();
    let mut rows: Vec<SchoolAggregate> = buckets
        .into_iter()
        .map(|b| SchoolAggregate {
            school: display_school(&b.label),
            mean_score: b.sum / b.count as f64,
            count: b.count,
        })
        .filter(|row| seen.insert(row.school.to_lowercase()))
        .collect();

    rows.sort_by(|a, b| {
        b.mean_score
            .total_cmp(&a.mean_score)
            .then_with(|| a.school.to_lowercase().cmp(&b.school.to_lowercase()))
            .then_with(|| a.school.cmp(&b.school))
    });
    rows
}

/// A school ranking together with the weights that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub weights: NormalizedWeights,
    pub total_pets: usize,
    pub ranked_pets: usize,
    pub schools: Vec<SchoolAggregate>,
}

pub fn rank_schools(pets: &[PetRecord], scorer: &CompositeScorer<'_>) -> RankingReport {
    let schools = compute_school_aggregates(pets, scorer);
    RankingReport {
        weights: *scorer.weights(),
        total_pets: pets.len(),
        ranked_pets: schools.iter().map(|s| s.count).sum(),
        schools,
    }
}
