use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Player row as stored in the `players` collection.
///
/// Leaderboard queries select different column subsets, so every column
/// not present in a given projection falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Points keep the store's numeric form, integer or decimal.
    #[serde(default = "zero", deserialize_with = "points_or_zero")]
    pub ranking_points: Number,
    #[serde(default = "zero", deserialize_with = "points_or_zero")]
    pub global_ranking_points: Number,
    #[serde(default = "zero", deserialize_with = "points_or_zero")]
    pub total_matches: Number,
    #[serde(default = "zero", deserialize_with = "points_or_zero")]
    pub total_wins: Number,
}

/// One point of a player's ranking over time, exactly as the store returned it.
pub type RankingHistoryRecord = Map<String, Value>;

/// Equality filters of the regional leaderboard. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilters {
    pub state: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub category: Option<String>,
}

/// Accepts both uuid-style text ids and integer ids.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or integer id, got {}",
            other
        ))),
    }
}

fn zero() -> Number {
    Number::from(0)
}

fn points_or_zero<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.unwrap_or_else(zero))
}
