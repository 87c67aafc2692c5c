//! DecisionEngine - strategy registry + decision loop + bounded history.
//!
//! # フロー（make_decision）
//! 1. available_options が空なら InvalidInput
//! 2. decision_type の strategy 一覧を取得（未登録なら fallback）
//! 3. 各 strategy を順番に評価（Err と panic はスキップして記録）
//! 4. confidence 降順で最良の評価を採用（全滅なら先頭の option, confidence 0.1）
//! 5. expected_outcome を計算し、履歴に追加

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::builder::EngineBuilder;
use super::history::DecisionHistory;
use crate::config::EngineConfig;
use crate::domain::{
    DecisionContext, DecisionError, DecisionFeedback, DecisionId, DecisionResult,
    DecisionStatistics, DecisionType, Evaluation, ExpectedOutcome, FALLBACK_CONFIDENCE,
    FALLBACK_STRATEGY, StrategyFailure,
};
use crate::ports::{Clock, DecisionStrategy, FeedbackHook, IdGenerator};

/// Runner-up picks reported per decision.
const MAX_ALTERNATIVES: usize = 4;

/// Selects among candidate options with pluggable, per-category strategies.
///
/// Design:
/// - The registry is built during initialization (`&mut self`) and read
///   during decisions.
/// - Decisions, statistics and feedback take `&self`; history sits behind a
///   mutex so an `Arc<DecisionEngine>` can be shared between tasks.
/// - A decision is always returned for a non-empty option list.
pub struct DecisionEngine {
    pub(crate) config: EngineConfig,
    pub(crate) strategies: HashMap<DecisionType, Vec<Arc<dyn DecisionStrategy>>>,
    pub(crate) fallback: Arc<dyn DecisionStrategy>,
    pub(crate) history: Mutex<DecisionHistory>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
    pub(crate) feedback_hook: Arc<dyn FeedbackHook>,
}

impl DecisionEngine {
    /// Engine with default strategies, system clock and no-op feedback.
    pub fn new(config: EngineConfig) -> Self {
        EngineBuilder::new().config(config).assemble()
    }

    /// Engine from an optional raw configuration mapping. Missing keys are
    /// logged and defaulted.
    pub fn from_config_value(config: Option<&Value>) -> Result<Self, DecisionError> {
        let config = match config {
            Some(value) => EngineConfig::from_value(value)?,
            None => EngineConfig::from_value(&Value::Object(Map::new()))?,
        };
        Ok(Self::new(config))
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Append a strategy to a category. Strategies are never removed.
    pub fn add_strategy(&mut self, decision_type: DecisionType, strategy: Arc<dyn DecisionStrategy>) {
        info!("Added strategy '{}' for {}", strategy.name(), decision_type);
        self.strategies.entry(decision_type).or_default().push(strategy);
    }

    /// Names of the strategies registered for a category, in evaluation order.
    /// Empty when the category relies on the fallback.
    pub fn strategy_names(&self, decision_type: DecisionType) -> Vec<String> {
        self.strategies
            .get(&decision_type)
            .map(|list| list.iter().map(|s| s.name().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn fallback_strategy_name(&self) -> &str {
        self.fallback.name()
    }

    fn strategies_for(&self, decision_type: DecisionType) -> &[Arc<dyn DecisionStrategy>] {
        match self.strategies.get(&decision_type) {
            Some(list) if !list.is_empty() => list.as_slice(),
            _ => std::slice::from_ref(&self.fallback),
        }
    }

    /// Decide on one context.
    ///
    /// Only `InvalidInput` (no options) is returned as an error; strategy
    /// failures are logged and listed in `suppressed_failures`.
    pub async fn make_decision(&self, context: &DecisionContext) -> Result<DecisionResult, DecisionError> {
        if context.available_options.is_empty() {
            return Err(DecisionError::no_options());
        }

        let started = Instant::now();

        let mut evaluations: Vec<(Evaluation, String)> = Vec::new();
        let mut suppressed: Vec<StrategyFailure> = Vec::new();

        // 逐次評価（並列化しない）
        for strategy in self.strategies_for(context.decision_type) {
            let name = strategy.name().to_string();
            // panic も失敗として扱う
            let outcome = match AssertUnwindSafe(strategy.evaluate(context)).catch_unwind().await {
                Ok(evaluated) => evaluated.and_then(|evaluation| accept(evaluation, context, &name)),
                Err(payload) => Err(DecisionError::strategy(
                    name.as_str(),
                    format!("panicked: {}", panic_message(payload.as_ref())),
                )),
            };

            match outcome {
                Ok(evaluation) => evaluations.push((evaluation, name)),
                Err(err) => {
                    warn!("Strategy {name} failed: {err}");
                    suppressed.push(StrategyFailure {
                        strategy: name,
                        error: err.to_string(),
                    });
                }
            }
        }

        // stable: equal confidence keeps registration order
        evaluations.sort_by(|a, b| b.0.confidence.total_cmp(&a.0.confidence));
        let mut ranked = evaluations.into_iter();

        let (selected_option, confidence, reasoning, strategy) = match ranked.next() {
            Some((evaluation, name)) => (
                evaluation.option,
                evaluation.confidence,
                format!("{} (via {})", evaluation.reasoning, name),
                name,
            ),
            None => (
                context.available_options[0].clone(),
                FALLBACK_CONFIDENCE,
                format!("Fallback selection - no strategies succeeded (via {FALLBACK_STRATEGY})"),
                FALLBACK_STRATEGY.to_string(),
            ),
        };

        let alternative_options = ranked
            .take(MAX_ALTERNATIVES)
            .map(|(evaluation, _)| evaluation.option)
            .collect();
        let expected_outcome = ExpectedOutcome::project(&selected_option);
        let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        let result = DecisionResult {
            id: self.id_generator.generate_decision_id(),
            decision_type: context.decision_type,
            selected_option,
            confidence,
            reasoning,
            strategy,
            alternative_options,
            risk_factors: Vec::new(),
            expected_outcome,
            decision_time: self.clock.now(),
            execution_time_ms,
            suppressed_failures: suppressed,
        };

        self.history.lock().await.push(result.clone());

        info!(
            decision_id = %result.id,
            decision_type = %result.decision_type,
            "Decision made: {} (confidence: {:.2})",
            result.reasoning,
            result.confidence
        );

        Ok(result)
    }

    /// Aggregates over the current history; recency is measured from now.
    pub async fn get_decision_statistics(&self) -> DecisionStatistics {
        let now = self.clock.now();
        let history = self.history.lock().await;
        DecisionStatistics::from_history(history.iter(), now)
    }

    /// Hand post-hoc feedback to the feedback hook. The engine itself stores
    /// nothing.
    pub async fn learn_from_feedback(
        &self,
        decision_id: DecisionId,
        actual_outcome: Map<String, Value>,
        success: bool,
    ) -> Result<(), DecisionError> {
        info!("Received feedback for decision {decision_id}: success={success}");

        let decision = self.find_decision(&decision_id).await;
        if decision.is_none() {
            debug!(%decision_id, "feedback for a decision not in history");
        }

        let feedback = DecisionFeedback {
            decision_id,
            actual_outcome,
            success,
            received_at: self.clock.now(),
        };
        self.feedback_hook.on_feedback(&feedback, decision.as_ref()).await
    }

    pub async fn find_decision(&self, decision_id: &DecisionId) -> Option<DecisionResult> {
        self.history.lock().await.find(decision_id).cloned()
    }

    /// Snapshot of the history, oldest first.
    pub async fn history(&self) -> Vec<DecisionResult> {
        self.history.lock().await.iter().cloned().collect()
    }

    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

/// Reject evaluations the engine cannot use; clamp confidence into [0, 1].
fn accept(
    mut evaluation: Evaluation,
    context: &DecisionContext,
    strategy: &str,
) -> Result<Evaluation, DecisionError> {
    if !evaluation.confidence.is_finite() {
        return Err(DecisionError::strategy(
            strategy,
            format!("non-finite confidence {}", evaluation.confidence),
        ));
    }
    if !context.available_options.contains(&evaluation.option) {
        return Err(DecisionError::strategy(
            strategy,
            "selected option is not one of the available options",
        ));
    }
    evaluation.confidence = evaluation.confidence.clamp(0.0, 1.0);
    Ok(evaluation)
}
