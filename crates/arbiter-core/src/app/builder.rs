//! EngineBuilder - エンジンの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - ports の差し替え（Clock / IdGenerator / FeedbackHook）

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::engine::DecisionEngine;
use super::history::DecisionHistory;
use crate::config::EngineConfig;
use crate::domain::DecisionType;
use crate::impls::{default_strategies, fallback_strategy};
use crate::ports::{
    Clock, DecisionStrategy, FeedbackHook, IdGenerator, NoopFeedbackHook, SystemClock,
    UlidGenerator,
};

/// EngineBuilder は DecisionEngine を構築
///
/// # 使用例
/// ```ignore
/// let engine = EngineBuilder::new()
///     .config(EngineConfig::default().with_max_history_size(100))
///     .strategy(DecisionType::Routing, Arc::new(ExpectedPerformanceStrategy))
///     .expect_categories(&[DecisionType::Routing])
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_categories() で strategy が必須のカテゴリを登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
/// - 不足があれば BuildError を返す（fallback strategy では満たせない）
pub struct EngineBuilder {
    config: EngineConfig,
    clock: Option<Arc<dyn Clock>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    feedback_hook: Arc<dyn FeedbackHook>,
    fallback: Arc<dyn DecisionStrategy>,
    with_defaults: bool,
    strategies: Vec<(DecisionType, Arc<dyn DecisionStrategy>)>,
    expected_categories: Option<Vec<DecisionType>>,
}

/// BuildError はエンジン構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing strategies for decision types: {0:?}. These categories were expected but have no strategy.")]
    MissingCategories(Vec<DecisionType>),
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            clock: None,
            id_generator: None,
            feedback_hook: Arc::new(NoopFeedbackHook),
            fallback: Arc::new(fallback_strategy()),
            with_defaults: true,
            strategies: Vec::new(),
            expected_categories: None,
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Clock used for decision timestamps, ids and statistics recency.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    pub fn feedback_hook(mut self, hook: Arc<dyn FeedbackHook>) -> Self {
        self.feedback_hook = hook;
        self
    }

    /// Strategy for categories with nothing registered.
    pub fn fallback_strategy(mut self, strategy: Arc<dyn DecisionStrategy>) -> Self {
        self.fallback = strategy;
        self
    }

    /// Register a strategy (after the defaults, in call order).
    pub fn strategy(mut self, decision_type: DecisionType, strategy: Arc<dyn DecisionStrategy>) -> Self {
        self.strategies.push((decision_type, strategy));
        self
    }

    /// Skip the stock resource/prioritization/error-handling strategies.
    pub fn without_default_strategies(mut self) -> Self {
        self.with_defaults = false;
        self
    }

    pub fn expect_categories(mut self, categories: &[DecisionType]) -> Self {
        self.expected_categories = Some(categories.to_vec());
        self
    }

    /// EngineBuilder を検証して DecisionEngine を生成
    ///
    /// # 検証
    /// - expect_categories() のカテゴリ全てに strategy が登録されているか
    pub fn build(self) -> Result<DecisionEngine, BuildError> {
        if let Some(expected) = &self.expected_categories {
            let registered = self.registered_categories();
            let missing: Vec<DecisionType> = expected
                .iter()
                .filter(|t| !registered.contains(t))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingCategories(missing));
            }
        }
        Ok(self.assemble())
    }

    fn registered_categories(&self) -> Vec<DecisionType> {
        let mut categories: Vec<DecisionType> = self.strategies.iter().map(|(t, _)| *t).collect();
        if self.with_defaults {
            categories.extend(default_strategies().into_iter().map(|(t, _)| t));
        }
        categories
    }

    /// Wire everything without validation.
    pub(crate) fn assemble(self) -> DecisionEngine {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(Arc::clone(&clock))));
        let history = Mutex::new(DecisionHistory::new(self.config.max_history_size));

        let mut engine = DecisionEngine {
            config: self.config,
            strategies: HashMap::new(),
            fallback: self.fallback,
            history,
            clock,
            id_generator,
            feedback_hook: self.feedback_hook,
        };

        if self.with_defaults {
            for (decision_type, strategy) in default_strategies() {
                engine.add_strategy(decision_type, strategy);
            }
        }
        for (decision_type, strategy) in self.strategies {
            engine.add_strategy(decision_type, strategy);
        }
        engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
