//! Impls - 実装
//!
//! ports の trait を実装した具体的な strategy を置きます。

pub mod defaults;
pub mod heuristic;
pub mod weighted;

pub use self::defaults::{default_strategies, fallback_strategy};
pub use self::heuristic::ExpectedPerformanceStrategy;
pub use self::weighted::{CONSTRAINT_PENALTY, WeightedScoringStrategy};
