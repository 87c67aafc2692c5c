//! DecisionContext - everything one decision is made from.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::constraint::Constraint;
use super::decision_type::DecisionType;
use super::option::DecisionOption;

/// Input to `DecisionEngine::make_decision`.
///
/// Open-ended fields stay JSON so call sites can evolve without breaking
/// changes. Only `decision_type` and `available_options` are required when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub decision_type: DecisionType,

    #[serde(default)]
    pub current_state: Map<String, Value>,

    /// Candidates, in caller order. Must be non-empty to decide.
    pub available_options: Vec<DecisionOption>,

    /// Hard constraints keyed by option attribute name.
    #[serde(default)]
    pub constraints: BTreeMap<String, Constraint>,

    /// Soft preferences (informational; no stock strategy reads them).
    #[serde(default)]
    pub preferences: Map<String, Value>,

    #[serde(default)]
    pub historical_data: Vec<Value>,

    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl DecisionContext {
    pub fn new(decision_type: DecisionType, available_options: Vec<DecisionOption>) -> Self {
        Self {
            decision_type,
            current_state: Map::new(),
            available_options,
            constraints: BTreeMap::new(),
            preferences: Map::new(),
            historical_data: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_constraint(mut self, attribute: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints.insert(attribute.into(), constraint);
        self
    }

    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.current_state.insert(key.into(), value.into());
        self
    }

    pub fn with_preference(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.preferences.insert(key.into(), value.into());
        self
    }

    pub fn with_historical_record(mut self, record: Value) -> Self {
        self.historical_data.push(record);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Number of constraints `option` violates. Constraints on attributes the
    /// option does not carry are not checked.
    pub fn violations(&self, option: &DecisionOption) -> usize {
        self.constraints
            .iter()
            .filter(|(attribute, constraint)| {
                option
                    .get(attribute)
                    .is_some_and(|value| !constraint.is_satisfied_by(value))
            })
            .count()
    }
}
