//! Outcome model: predicted outcome of a decision and the feedback that may
//! arrive for it later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::DecisionId;
use super::option::DecisionOption;

const DEFAULT_SUCCESS_RATE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
}

/// Deterministic projection of the selected option's own fields.
///
/// This is not a simulation: it only reads `reliability_score`,
/// `estimated_time` and `cost` from the option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedOutcome {
    pub expected_success_rate: f64,

    /// `estimated_time` passed through, `"unknown"` when absent.
    pub estimated_completion_time: Value,

    /// `cost` passed through, `0` when absent.
    pub estimated_cost: Value,

    pub risk_level: RiskLevel,
}

impl ExpectedOutcome {
    pub fn project(option: &DecisionOption) -> Self {
        let expected_success_rate = option
            .number("reliability_score")
            .unwrap_or(DEFAULT_SUCCESS_RATE);

        let risk_level = if expected_success_rate > DEFAULT_SUCCESS_RATE {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        };

        Self {
            expected_success_rate,
            estimated_completion_time: option
                .get("estimated_time")
                .cloned()
                .unwrap_or_else(|| Value::from("unknown")),
            estimated_cost: option.get("cost").cloned().unwrap_or_else(|| Value::from(0)),
            risk_level,
        }
    }
}

/// Post-hoc signal about how a decision actually turned out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionFeedback {
    pub decision_id: DecisionId,

    #[serde(default)]
    pub actual_outcome: Map<String, Value>,

    pub success: bool,

    pub received_at: DateTime<Utc>,
}
