//! Record types for the scraped pet corpus.
//!
//! The JSON snapshot is loosely shaped: fields go missing, numbers arrive as
//! strings and lists sometimes arrive as `null`. Every field here therefore
//! deserializes leniently, and anything that does not fit the expected shape
//! becomes `None` or an empty collection instead of a parse failure.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One creature from the pet corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(rename = "ID", default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::abilities")]
    pub abilities: Abilities,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pedigree: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub cards: Vec<String>,
    #[serde(rename = "sell price", default, deserialize_with = "lenient::string")]
    pub sell_price: Option<String>,
    #[serde(default, deserialize_with = "lenient::attributes")]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl PetRecord {
    /// Name for display, `"Unknown"` when the record has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// School label exactly as recorded (untrimmed).
    pub fn school_label(&self) -> &str {
        self.school.as_deref().unwrap_or("")
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// Talent and derby ability names of a pet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub talents: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub derby: Vec<String>,
}

/// A raw attribute value; the scraper stores most of them as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Numeric reading of the value. Unparseable text yields `NaN`, which
    /// callers treat as "not finite".
    pub fn as_f64(&self) -> f64 {
        match self {
            AttributeValue::Number(n) => *n,
            AttributeValue::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// Entry of the ability catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rarity: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: Option<String>,
}

impl AbilityEntry {
    pub fn new(name: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            rarity: Some(rarity.into()),
            ..Self::default()
        }
    }
}

/// Entry of the spell catalog. Only presentation uses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: Option<String>,
}

/// The in-memory corpus: pets plus the two catalogs.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pets: Vec<PetRecord>,
    pub abilities: Vec<AbilityEntry>,
    pub spells: Vec<SpellEntry>,
}

mod lenient {
    use super::*;
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite()))
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => items.into_iter().filter_map(list_item).collect(),
            _ => Vec::new(),
        })
    }

    fn list_item(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn abilities<'de, D>(deserializer: D) -> Result<Abilities, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(v @ Value::Object(_)) => serde_json::from_value(v).unwrap_or_default(),
            _ => Abilities::default(),
        })
    }

    pub fn attributes<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, AttributeValue>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(Value::Object(map)) = Option::<Value>::deserialize(deserializer)? else {
            return Ok(BTreeMap::new());
        };
        Ok(map
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Number(n) => AttributeValue::Number(n.as_f64()?),
                    Value::String(s) => AttributeValue::Text(s),
                    _ => return None,
                };
                Some((key, value))
            })
            .collect())
    }
}
