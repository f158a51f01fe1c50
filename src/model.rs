use crate::error::DataError;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub power: i32,
}

impl Move {
    pub fn new(name: impl Into<String>, power: i32) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub name: String,
    pub hp: i32,
    pub moves: Vec<Move>,
}

fn malformed(name: &str, field: &str) -> DataError {
    DataError::MalformedRecord {
        name: name.to_string(),
        field: field.to_string(),
    }
}

/// One entry of the data file as written. Presence of each field is checked afterwards.
#[derive(Debug, Deserialize)]
struct RawStats {
    #[serde(rename = "HP", default)]
    hp: Option<i32>,
    #[serde(default)]
    moves: Option<Map<String, Value>>,
}

impl PokemonRecord {
    pub fn new(name: impl Into<String>, hp: i32, moves: Vec<Move>) -> Self {
        Self {
            name: name.into(),
            hp,
            moves,
        }
    }

    /// Build a record from `{ "HP": <int>, "moves": { "<move>": <int>, ... } }`.
    pub fn from_value(name: &str, value: &Value) -> Result<Self, DataError> {
        let raw: RawStats =
            serde_json::from_value(value.clone()).map_err(|source| DataError::InvalidRecord {
                name: name.to_string(),
                source,
            })?;
        let hp = raw.hp.ok_or_else(|| malformed(name, "HP"))?;
        let moves = raw
            .moves
            .ok_or_else(|| malformed(name, "moves"))?
            .into_iter()
            .map(|(move_name, power)| {
                power
                    .as_i64()
                    .and_then(|p| i32::try_from(p).ok())
                    .map(|power| Move::new(move_name.as_str(), power))
                    .ok_or_else(|| malformed(name, &format!("moves.{move_name}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, hp, moves))
    }
}

/// All pokemon from the data file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pokedex {
    records: Vec<PokemonRecord>,
}

impl Pokedex {
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        let root: Value = serde_json::from_str(raw)?;
        let entries: &Map<String, Value> = root.as_object().ok_or(DataError::NotAnObject)?;
        let records = entries
            .iter()
            .map(|(name, stats)| PokemonRecord::from_value(name, stats))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pokemon data at {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse pokemon data from {}", path.display()))
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&PokemonRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
