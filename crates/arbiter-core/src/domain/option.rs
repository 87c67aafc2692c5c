//! Candidate option records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::DecisionError;

/// One candidate a decision can select.
///
/// Attributes are open-ended JSON (numbers, booleans, strings, ...) so callers
/// can describe any kind of candidate without a schema change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionOption(Map<String, Value>);

impl DecisionOption {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Build an option from a JSON object.
    pub fn from_json(value: Value) -> Result<Self, DecisionError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DecisionError::InvalidInput(format!(
                "option must be a JSON object, got {other}"
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Numeric view of an attribute: numbers as-is, booleans as 1.0 / 0.0.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(numeric)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for DecisionOption {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DecisionOption {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

pub(crate) fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
