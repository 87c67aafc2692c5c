//! arbiter-core
//!
//! Autonomous decision engine: pluggable per-category strategies score
//! candidate options under hard constraints, the best evaluation wins, and a
//! bounded history feeds statistics.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, decision_type, option, constraint, context, result, outcome, statistics, errors）
//! - **ports**: 抽象化レイヤー（DecisionStrategy, Clock, IdGenerator, FeedbackHook）
//! - **impls**: strategy 実装（WeightedScoringStrategy, ExpectedPerformanceStrategy, デフォルト重み）
//! - **app**: EngineBuilder, DecisionEngine, DecisionHistory
//! - **config**: EngineConfig
//!
//! ```ignore
//! let engine = DecisionEngine::default();
//! let ctx = DecisionContext::new(DecisionType::Optimization, options)
//!     .with_constraint("cost", Constraint::at_most(5.0));
//! let result = engine.make_decision(&ctx).await?;
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BuildError, DecisionEngine, EngineBuilder};
pub use config::EngineConfig;
pub use domain::{
    Constraint, DecisionContext, DecisionError, DecisionId, DecisionOption, DecisionResult,
    DecisionStatistics, DecisionType, Evaluation,
};
pub use ports::DecisionStrategy;
