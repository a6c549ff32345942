//! Scoring and ranking engine for a scraped pet corpus.
//!
//! Pets are scored on five dimensions (cards, talents, derby abilities,
//! pedigree and attributes), combined into a weighted composite, and
//! aggregated per school. The engine is pure: it never fails and never
//! touches the filesystem. Loading, configuration and output live in
//! [`io`], [`config`] and [`commands`].
//!
//! ```
//! use petrank::{compute_school_aggregates, AbilityEntry, CompositeScorer, PetRecord,
//!               RarityLookup, ScoringWeights};
//!
//! let lookup = RarityLookup::from_catalog(&[AbilityEntry::new("Spell-Proof", "epic")]);
//! let scorer = CompositeScorer::new(&lookup, &ScoringWeights::default());
//!
//! let pet: PetRecord = serde_json::from_str(
//!     r#"{"name": "Fire Cat", "school": "fire", "cards": ["Fire Cat"],
//!         "abilities": {"talents": ["Spell-Proof"]}, "pedigree": 60}"#,
//! ).unwrap();
//!
//! let schools = compute_school_aggregates(&[pet], &scorer);
//! assert_eq!(schools[0].school, "Fire");
//! ```

// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod featured;
pub mod formatting;
pub mod insights;
pub mod io;
pub mod lookup;
pub mod rarity;
pub mod scoring;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Abilities, AbilityEntry, AttributeValue, Dataset, Error, PetRecord, Result, SpellEntry,
};

pub use crate::rarity::{RarityLookup, RarityTier};

pub use crate::scoring::{
    compute_composite_score, CompositeScorer, NormalizedWeights, ScoreBreakdown, ScoringWeights,
    SubScores, NEUTRAL_SCORE,
};

pub use crate::aggregation::{compute_school_aggregates, rank_schools, RankingReport, SchoolAggregate};

pub use crate::stats::{compute_distribution, percentile_rank, Distribution, PedigreeComparison};

pub use crate::featured::{featured_pet, select_featured_index, FeaturedReport};

pub use crate::insights::InsightsReport;

pub use crate::lookup::{search_pets, PetProfile};

pub use crate::config::PetrankConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
