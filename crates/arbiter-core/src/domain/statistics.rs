//! Aggregate statistics over the decision history.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::result::DecisionResult;

const LOW_CONFIDENCE_BELOW: f64 = 0.5;
const HIGH_CONFIDENCE_FROM: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceDistribution {
    /// confidence < 0.5
    pub low: usize,
    /// 0.5 <= confidence < 0.8
    pub medium: usize,
    /// confidence >= 0.8
    pub high: usize,
}

/// Summary of the history. With no decisions only `total_decisions` is set,
/// so the JSON form is exactly `{"total_decisions":0}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionStatistics {
    pub total_decisions: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_execution_time_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_distribution: Option<ConfidenceDistribution>,

    /// Decisions made less than 24h before `now` (the time of the query, not
    /// of the decisions), so the value drifts between calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_decisions: Option<usize>,
}

impl DecisionStatistics {
    pub fn from_history<'a, I>(history: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a DecisionResult>,
    {
        let window = Duration::days(1);

        let mut total = 0usize;
        let mut confidence_sum = 0.0;
        let mut time_sum = 0.0;
        let mut distribution = ConfidenceDistribution::default();
        let mut recent = 0usize;

        for decision in history {
            total += 1;
            confidence_sum += decision.confidence;
            time_sum += decision.execution_time_ms;

            if decision.confidence < LOW_CONFIDENCE_BELOW {
                distribution.low += 1;
            } else if decision.confidence < HIGH_CONFIDENCE_FROM {
                distribution.medium += 1;
            } else {
                distribution.high += 1;
            }

            if now - decision.decision_time < window {
                recent += 1;
            }
        }

        if total == 0 {
            return Self::default();
        }

        let n = total as f64;
        Self {
            total_decisions: total,
            average_confidence: Some(confidence_sum / n),
            average_execution_time_ms: Some(time_sum / n),
            confidence_distribution: Some(distribution),
            recent_decisions: Some(recent),
        }
    }
}
