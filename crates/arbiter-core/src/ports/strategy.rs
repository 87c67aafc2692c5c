//! DecisionStrategy port - 候補の採点アルゴリズム
//!
//! # 実装
//! - `impls::WeightedScoringStrategy`: 重み付きスコア + 制約ペナルティ
//! - `impls::ExpectedPerformanceStrategy`: `expected_performance` 最大を選ぶヒューリスティック

use async_trait::async_trait;

use crate::domain::{DecisionContext, DecisionError, Evaluation};

/// DecisionStrategy は context から候補を 1 つ選ぶ
///
/// # 設計原則
/// - object-safe（`Arc<dyn DecisionStrategy>` としてカテゴリごとに登録）
/// - 失敗は `Err` で返す。エンジンはその strategy をスキップして続行する
/// - 返す option は `context.available_options` のいずれかのコピー
#[async_trait]
pub trait DecisionStrategy: Send + Sync {
    /// Label used in reasoning strings and logs.
    fn name(&self) -> &str;

    async fn evaluate(&self, context: &DecisionContext) -> Result<Evaluation, DecisionError>;
}
