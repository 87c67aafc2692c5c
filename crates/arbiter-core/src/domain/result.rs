//! DecisionResult - the output of one decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decision_type::DecisionType;
use super::ids::DecisionId;
use super::option::DecisionOption;
use super::outcome::ExpectedOutcome;

/// Strategy name reported when no strategy produced an evaluation.
pub const FALLBACK_STRATEGY: &str = "fallback";

/// Confidence assigned to a fallback selection.
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// A strategy failure the engine absorbed while deciding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyFailure {
    pub strategy: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub id: DecisionId,
    pub decision_type: DecisionType,

    /// Always one of the context's `available_options`.
    pub selected_option: DecisionOption,

    /// In [0, 1]. Measures decisiveness, not probability of success.
    pub confidence: f64,

    pub reasoning: String,

    /// Name of the winning strategy, or [`FALLBACK_STRATEGY`].
    pub strategy: String,

    /// Picks of the runner-up evaluations (at most 4).
    #[serde(default)]
    pub alternative_options: Vec<DecisionOption>,

    #[serde(default)]
    pub risk_factors: Vec<String>,

    pub expected_outcome: ExpectedOutcome,

    pub decision_time: DateTime<Utc>,

    pub execution_time_ms: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed_failures: Vec<StrategyFailure>,
}

impl DecisionResult {
    pub fn is_fallback(&self) -> bool {
        self.strategy == FALLBACK_STRATEGY
    }
}
