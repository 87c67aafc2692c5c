//! Errors - エラー型
//!
//! 呼び出し側に返るのは `InvalidInput` のみ。
//! strategy の失敗はエンジンが吸収し、`DecisionResult::suppressed_failures` に記録します。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisionError {
    /// The context cannot be decided on (e.g. no options). Not retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A strategy could not produce an evaluation.
    #[error("strategy '{strategy}' failed: {message}")]
    StrategyFailed { strategy: String, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl DecisionError {
    pub fn strategy(strategy: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StrategyFailed {
            strategy: strategy.into(),
            message: message.into(),
        }
    }

    pub(crate) fn no_options() -> Self {
        Self::InvalidInput("No options available for decision making".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_failure_names_the_strategy() {
        let err = DecisionError::strategy("weighted_scoring", "boom");
        assert_eq!(err.to_string(), "strategy 'weighted_scoring' failed: boom");
    }

    #[test]
    fn no_options_is_invalid_input() {
        assert!(matches!(DecisionError::no_options(), DecisionError::InvalidInput(_)));
    }
}
