//! Cohort statistics: mean, standard deviation and percentile rank.
//!
//! Standard deviation is the population form (divide by N) and percentile
//! rank counts values `<=` the subject. Both conventions are fixed; changing
//! either shifts every displayed percentile.

use crate::core::PetRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Distribution {
    pub mean: f64,
    pub std: f64,
}

impl Distribution {
    /// The `mean ± std` band clipped to [0, 100], or `None` when the spread
    /// is zero and there is nothing to plot.
    pub fn band(&self) -> Option<(f64, f64)> {
        (self.std > 0.0).then(|| {
            (
                (self.mean - self.std).max(0.0),
                (self.mean + self.std).min(100.0),
            )
        })
    }
}

/// Mean and population standard deviation; `None` for an empty sample.
pub fn compute_distribution(sample: &[f64]) -> Option<Distribution> {
    if sample.is_empty() {
        return None;
    }
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    Some(Distribution {
        mean,
        std: variance.sqrt(),
    })
}

/// Share of the sample at or below `value`, as a rounded percentage.
/// `None` for an empty sample.
pub fn percentile_rank(sample: &[f64], value: f64) -> Option<u8> {
    if sample.is_empty() {
        return None;
    }
    let at_or_below = sample.iter().filter(|&&v| v <= value).count();
    let pct = (at_or_below as f64 / sample.len() as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

/// How one pet's pedigree sits within the pets of its own school.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PedigreeComparison {
    pub cohort_size: usize,
    pub distribution: Option<Distribution>,
    pub percentile: Option<u8>,
    pub band: Option<(f64, f64)>,
}

impl PedigreeComparison {
    /// The cohort is every pet whose school label equals the subject's
    /// exactly and which has a finite pedigree.
    pub fn for_pet(pet: &PetRecord, pets: &[PetRecord]) -> Self {
        let cohort: Vec<f64> = pets
            .iter()
            .filter(|p| p.school == pet.school)
            .filter_map(|p| p.pedigree)
            .filter(|v| v.is_finite())
            .collect();
        let distribution = compute_distribution(&cohort);

        Self {
            cohort_size: cohort.len(),
            distribution,
            percentile: pet
                .pedigree
                .filter(|v| v.is_finite())
                .and_then(|v| percentile_rank(&cohort, v)),
            band: distribution.and_then(|d| d.band()),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn percentile_always_in_range(
            sample in proptest::collection::vec(0.0..100.0f64, 1..50),
            value in -50.0..150.0f64,
        ) {
            let p = percentile_rank(&sample, value).unwrap();
            prop_assert!(p <= 100);
        }

        #[test]
        fn std_is_never_negative(sample in proptest::collection::vec(-1e6..1e6f64, 1..50)) {
            let d = compute_distribution(&sample).unwrap();
            prop_assert!(d.std >= 0.0);
        }
    }
}
