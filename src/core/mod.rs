pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{Abilities, AbilityEntry, AttributeValue, Dataset, PetRecord, SpellEntry};
