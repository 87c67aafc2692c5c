//! FeedbackHook port - 決定結果へのフィードバック受け口
//!
//! # v1 最小実装
//! - NoopFeedbackHook: ログのみ（学習は行わない）
//!
//! # 将来の拡張
//! - 成功/失敗に応じて strategy の重みを調整する実装を差し込む

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{DecisionError, DecisionFeedback, DecisionResult};

/// FeedbackHook は事後の成功/失敗シグナルを受け取る
///
/// `decision` はエンジンの履歴に該当 ID が残っていれば `Some`。
#[async_trait]
pub trait FeedbackHook: Send + Sync {
    async fn on_feedback(
        &self,
        feedback: &DecisionFeedback,
        decision: Option<&DecisionResult>,
    ) -> Result<(), DecisionError>;
}

/// Deliberate pass-through: accepts feedback and changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedbackHook;

#[async_trait]
impl FeedbackHook for NoopFeedbackHook {
    async fn on_feedback(
        &self,
        feedback: &DecisionFeedback,
        decision: Option<&DecisionResult>,
    ) -> Result<(), DecisionError> {
        debug!(
            decision_id = %feedback.decision_id,
            success = feedback.success,
            known = decision.is_some(),
            "feedback ignored by no-op hook"
        );
        Ok(())
    }
}
