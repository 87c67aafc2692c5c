//! Weighted scoring strategy.
//!
//! score(option) = Σ weight * value  −  1000 * (violated constraints)
//!
//! Constraint violations are penalized, not filtered: a violating option stays
//! in the candidate list but practically never wins.

use async_trait::async_trait;

use crate::domain::{DecisionContext, DecisionError, DecisionOption, Evaluation};
use crate::ports::DecisionStrategy;

/// Subtracted once per violated hard constraint.
pub const CONSTRAINT_PENALTY: f64 = 1000.0;

const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.95;
const SINGLE_OPTION_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct WeightedScoringStrategy {
    name: String,
    /// attribute -> signed weight, in insertion order
    weights: Vec<(String, f64)>,
}

impl WeightedScoringStrategy {
    pub const NAME: &'static str = "weighted_scoring";

    pub fn new<I, K>(weights: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::with_name(Self::NAME, weights)
    }

    pub fn with_name<I, K>(name: impl Into<String>, weights: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            weights: weights.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }

    pub fn weights(&self) -> &[(String, f64)] {
        &self.weights
    }

    /// Constraint-adjusted score of one option. Non-numeric attributes
    /// contribute nothing.
    pub fn score(&self, option: &DecisionOption, context: &DecisionContext) -> f64 {
        let weighted: f64 = self
            .weights
            .iter()
            .filter_map(|(attribute, weight)| option.number(attribute).map(|v| v * weight))
            .sum();

        weighted - CONSTRAINT_PENALTY * context.violations(option) as f64
    }
}

/// Confidence from the gap between the two best scores, relative to the best.
///
/// A close runner-up gives low confidence even when the absolute score is high.
/// With no positive baseline (`top <= 0`) the ratio means nothing, so the
/// minimum is reported.
fn decisiveness(top: f64, second: f64) -> f64 {
    if top == 0.0 {
        return MIN_CONFIDENCE;
    }

    let ratio = (top - second) / top;
    if ratio.is_nan() {
        MIN_CONFIDENCE
    } else {
        ratio.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}

#[async_trait]
impl DecisionStrategy for WeightedScoringStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, context: &DecisionContext) -> Result<Evaluation, DecisionError> {
        let scores: Vec<f64> = context
            .available_options
            .iter()
            .map(|option| self.score(option, context))
            .collect();

        // first strictly-highest score wins
        let mut best: Option<(usize, f64)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((i, score));
            }
        }
        let (best_index, best_score) = best.ok_or_else(DecisionError::no_options)?;

        let confidence = if scores.len() > 1 {
            let mut ranked = scores.clone();
            ranked.sort_by(|a, b| b.total_cmp(a));
            decisiveness(ranked[0], ranked[1])
        } else {
            SINGLE_OPTION_CONFIDENCE
        };

        Ok(Evaluation::new(
            context.available_options[best_index].clone(),
            confidence,
            format!("Selected based on weighted scoring (score: {best_score:.3})"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Constraint, DecisionType};
    use rstest::rstest;

    fn fallback_weights() -> WeightedScoringStrategy {
        WeightedScoringStrategy::new([("performance", 0.4), ("cost", -0.3), ("reliability", 0.3)])
    }

    fn fast_but_pricey() -> DecisionOption {
        DecisionOption::new()
            .with("performance", 0.9)
            .with("cost", 10)
            .with("reliability", 0.95)
    }

    fn slow_but_cheap() -> DecisionOption {
        DecisionOption::new()
            .with("performance", 0.5)
            .with("cost", 1)
            .with("reliability", 0.99)
    }

    #[test]
    fn score_is_weighted_sum() {
        let strategy = fallback_weights();
        let ctx = DecisionContext::new(DecisionType::Optimization, vec![]);

        let a = strategy.score(&fast_but_pricey(), &ctx);
        let b = strategy.score(&slow_but_cheap(), &ctx);

        assert!((a - (-2.355)).abs() < 1e-9, "got {a}");
        assert!((b - 0.197).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        let strategy = WeightedScoringStrategy::new([("spot", 2.0)]);
        let ctx = DecisionContext::new(DecisionType::Scaling, vec![]);

        assert_eq!(strategy.score(&DecisionOption::new().with("spot", true), &ctx), 2.0);
        assert_eq!(strategy.score(&DecisionOption::new().with("spot", false), &ctx), 0.0);
        assert_eq!(strategy.score(&DecisionOption::new().with("spot", "yes"), &ctx), 0.0);
    }

    #[test]
    fn each_violation_costs_a_fixed_penalty() {
        let strategy = WeightedScoringStrategy::new([("performance", 1.0)]);
        let ctx = DecisionContext::new(DecisionType::Routing, vec![])
            .with_constraint("cost", Constraint::at_most(5.0))
            .with_constraint("region", Constraint::one_of(["eu"]));
        let option = DecisionOption::new()
            .with("performance", 1.0)
            .with("cost", 10)
            .with("region", "us");

        assert_eq!(strategy.score(&option, &ctx), 1.0 - 2.0 * CONSTRAINT_PENALTY);
    }

    #[tokio::test]
    async fn picks_highest_adjusted_score() {
        let ctx = DecisionContext::new(
            DecisionType::Optimization,
            vec![fast_but_pricey(), slow_but_cheap()],
        );

        let eval = fallback_weights().evaluate(&ctx).await.unwrap();

        assert_eq!(eval.option, slow_but_cheap());
        assert_eq!(eval.confidence, MAX_CONFIDENCE);
        assert_eq!(eval.reasoning, "Selected based on weighted scoring (score: 0.197)");
    }

    #[tokio::test]
    async fn ties_go_to_the_first_option_with_minimum_confidence() {
        let a = DecisionOption::new().with("name", "a").with("performance", 1.0);
        let b = DecisionOption::new().with("name", "b").with("performance", 1.0);
        let ctx = DecisionContext::new(DecisionType::Routing, vec![a.clone(), b]);

        let eval = WeightedScoringStrategy::new([("performance", 1.0)])
            .evaluate(&ctx)
            .await
            .unwrap();

        assert_eq!(eval.option, a);
        assert_eq!(eval.confidence, MIN_CONFIDENCE);
    }

    #[tokio::test]
    async fn zero_best_score_is_not_decisive() {
        let costly = DecisionOption::new().with("name", "a").with("cost", 1);
        let idle = DecisionOption::new().with("name", "b").with("performance", 0);
        let ctx = DecisionContext::new(DecisionType::Optimization, vec![costly, idle.clone()]);

        let eval = fallback_weights().evaluate(&ctx).await.unwrap();

        // -0.3 vs 0.0
        assert_eq!(eval.option, idle);
        assert_eq!(eval.confidence, MIN_CONFIDENCE);
    }

    #[tokio::test]
    async fn single_option_gets_neutral_confidence() {
        let ctx = DecisionContext::new(DecisionType::Routing, vec![slow_but_cheap()]);
        let eval = fallback_weights().evaluate(&ctx).await.unwrap();
        assert_eq!(eval.confidence, SINGLE_OPTION_CONFIDENCE);
    }

    #[tokio::test]
    async fn empty_options_is_invalid_input() {
        let ctx = DecisionContext::new(DecisionType::Routing, vec![]);
        let err = fallback_weights().evaluate(&ctx).await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidInput(_)));
    }

    #[rstest]
    #[case::decisive(10.0, 1.0, 0.9)]
    #[case::capped(10.0, -100.0, MAX_CONFIDENCE)]
    #[case::close(10.0, 9.9, MIN_CONFIDENCE)]
    #[case::negative_top(-1.0, -3.0, MIN_CONFIDENCE)]
    #[case::zero_top_with_gap(0.0, -1.0, MIN_CONFIDENCE)]
    #[case::zero_top_tie(0.0, 0.0, MIN_CONFIDENCE)]
    fn decisiveness_is_clamped_gap_ratio(#[case] top: f64, #[case] second: f64, #[case] expected: f64) {
        assert!((decisiveness(top, second) - expected).abs() < 1e-9);
    }
}
