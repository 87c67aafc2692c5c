//! Heuristic strategy: prefer the best `expected_performance`.
//!
//! Stand-in for a learned or externally supplied scorer. It does not learn.

use async_trait::async_trait;

use crate::domain::{DecisionContext, DecisionError, Evaluation};
use crate::ports::DecisionStrategy;

const HEURISTIC_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedPerformanceStrategy;

impl ExpectedPerformanceStrategy {
    pub const NAME: &'static str = "heuristic";
    pub const ATTRIBUTE: &'static str = "expected_performance";
}

#[async_trait]
impl DecisionStrategy for ExpectedPerformanceStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn evaluate(&self, context: &DecisionContext) -> Result<Evaluation, DecisionError> {
        let mut best = None;
        for option in &context.available_options {
            let performance = option.number(Self::ATTRIBUTE).unwrap_or(0.0);
            if best.is_none_or(|(_, b)| performance > b) {
                best = Some((option, performance));
            }
        }
        let (option, _) = best.ok_or_else(DecisionError::no_options)?;

        Ok(Evaluation::new(
            option.clone(),
            HEURISTIC_CONFIDENCE,
            "Selected using heuristic (expected performance)",
        ))
    }
}
