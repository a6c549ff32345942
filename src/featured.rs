//! Date-seeded choice of a featured pet.
//!
//! The pick is reproducible without any stored state: the same date key and
//! pool size always give the same index.

use crate::core::PetRecord;
use crate::lookup::{DisplayCatalogs, PetProfile};
use crate::scoring::CompositeScorer;
use chrono::NaiveDate;
use serde::Serialize;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// Date key format used for featured picks.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// FNV-1a over the bytes of `key`, read as a signed 32-bit value.
pub fn hash_date_key(key: &str) -> i32 {
    let hash = key.bytes().fold(FNV_OFFSET_BASIS, |h, byte| {
        (h ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    });
    hash as i32
}

/// Index in `[0, pool_size)` for the given date key.
///
/// A pool size of 0 is treated as 1, so the result is always 0 there.
pub fn select_featured_index(date_key: &str, pool_size: usize) -> usize {
    let modulo = pool_size.max(1) as u64;
    let magnitude = u64::from(hash_date_key(date_key).unsigned_abs());
    (magnitude % modulo) as usize
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// The featured pet for `date`, or `None` for an empty corpus.
pub fn featured_pet(pets: &[PetRecord], date: NaiveDate) -> Option<&PetRecord> {
    let key = date_key(date);
    let index = select_featured_index(&key, pets.len());
    log::debug!("Featured pet for {} is index {} of {}", key, index, pets.len());
    pets.get(index)
}

/// A featured pick ready for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedReport {
    pub date: String,
    pub index: usize,
    pub pool_size: usize,
    pub profile: PetProfile,
}

impl FeaturedReport {
    pub fn build(
        pets: &[PetRecord],
        date: NaiveDate,
        catalogs: &DisplayCatalogs,
        scorer: &CompositeScorer<'_>,
    ) -> Option<Self> {
        let key = date_key(date);
        let index = select_featured_index(&key, pets.len());
        let pet = pets.get(index)?;
        Some(Self {
            date: key,
            index,
            pool_size: pets.len(),
            profile: PetProfile::build(pet, pets, catalogs, scorer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_key_hashes_to_offset_basis() {
        assert_eq!(hash_date_key("") as u32, FNV_OFFSET_BASIS);
    }

    #[test]
    fn matches_reference_fnv1a_vectors() {
        assert_eq!(hash_date_key("a") as u32, 0xe40c_292c);
        assert_eq!(hash_date_key("foobar") as u32, 0xbf9c_f968);
    }

    #[test]
    fn same_key_same_index() {
        let first = select_featured_index("2024-01-01", 10);
        for _ in 0..20 {
            assert_eq!(select_featured_index("2024-01-01", 10), first);
        }
        assert!(first < 10);
    }

    #[test]
    fn zero_pool_is_treated_as_one() {
        assert_eq!(select_featured_index("2024-01-01", 0), 0);
        assert_eq!(select_featured_index("2024-01-01", 1), 0);
    }

    #[test]
    fn picks_vary_across_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let picks: HashSet<usize> = start
            .iter_days()
            .take(365)
            .map(|d| select_featured_index(&date_key(d), 7))
            .collect();
        assert_eq!(picks.len(), 7, "every slot should be hit over a year");
    }

    #[test]
    fn featured_pet_handles_empty_corpus() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(featured_pet(&[], date).is_none());
    }

    #[test]
    fn featured_pet_is_within_pool() {
        let pets: Vec<PetRecord> = (0..13)
            .map(|i| PetRecord {
                name: Some(format!("pet-{i}")),
                ..PetRecord::default()
            })
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let expected = select_featured_index("2025-06-30", 13);

        let chosen = featured_pet(&pets, date).unwrap();
        assert_eq!(chosen, &pets[expected]);
    }

    #[test]
    fn report_carries_date_and_profile() {
        let pets: Vec<PetRecord> = (0..5)
            .map(|i| PetRecord {
                name: Some(format!("pet-{i}")),
                ..PetRecord::default()
            })
            .collect();
        let lookup = crate::rarity::RarityLookup::default();
        let scorer = CompositeScorer::new(&lookup, &crate::scoring::ScoringWeights::default());
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let report =
            FeaturedReport::build(&pets, date, &DisplayCatalogs::default(), &scorer).unwrap();
        assert_eq!(report.date, "2024-03-09");
        assert_eq!(report.pool_size, 5);
        assert_eq!(report.profile.name, format!("pet-{}", report.index));
        assert!(FeaturedReport::build(&[], date, &DisplayCatalogs::default(), &scorer).is_none());
    }
}
