//! Profile and lifestyle inputs for health scoring.
//!
//! Callers hand over loosely-shaped JSON sourced from their own persistence
//! layer. Every field is optional and deserializes leniently: a value of the
//! wrong type (e.g. `"age": "unknown"`) is treated as absent instead of
//! failing the whole profile.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::enums::Gender;

/// User profile as seen by the scoring rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_flexible_age")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_flexible_gender")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "deserialize_flexible_history")]
    pub medical_history: Vec<String>,
}

/// Optional lifestyle metrics collected on the health dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    /// Exercise sessions per week.
    #[serde(default, deserialize_with = "deserialize_flexible_number")]
    pub exercise_frequency: Option<f64>,
    /// Average hours of sleep per night.
    #[serde(default, deserialize_with = "deserialize_flexible_number")]
    pub sleep_hours: Option<f64>,
}

impl UserProfile {
    /// Case-insensitive membership test against the medical history.
    pub fn has_condition(&self, condition: &str) -> bool {
        self.medical_history
            .iter()
            .any(|entry| entry.trim().eq_ignore_ascii_case(condition))
    }
}

/// Interpret a JSON value as a finite number. Numeric strings are accepted.
fn value_as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn deserialize_flexible_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Ages arrive as integers, floats or strings; fractional ages truncate and
/// negative ones are dropped.
fn deserialize_flexible_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|age| *age >= 0.0 && *age <= u32::MAX as f64)
        .map(|age| age.trunc() as u32))
}

/// Any string is a gender; strings other than male/female map to `Other`.
fn deserialize_flexible_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => {
            Some(s.parse::<Gender>().unwrap_or(Gender::Other))
        }
        _ => None,
    })
}

/// Only an array counts as a medical history. Every element is kept so the
/// history penalty sees the full length; non-string entries hold their JSON
/// text and never match a named condition.
fn deserialize_flexible_history<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}
