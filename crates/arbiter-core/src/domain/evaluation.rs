//! Evaluation - what a single strategy reports back.

use serde::{Deserialize, Serialize};

use super::option::DecisionOption;

/// A strategy's pick for one context.
///
/// `option` must be a copy of one of `context.available_options`; the engine
/// rejects anything else as a strategy failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub option: DecisionOption,
    pub confidence: f64,
    pub reasoning: String,
}

impl Evaluation {
    pub fn new(option: DecisionOption, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            option,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}
