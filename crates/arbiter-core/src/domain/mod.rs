//! Domain model (ids, categories, options, constraints, contexts, results, ...).
//!
//! ここにある型は純粋な値で、strategy やエンジンの実装には依存しません。

pub mod constraint;
pub mod context;
pub mod decision_type;
pub mod errors;
pub mod evaluation;
pub mod ids;
pub mod option;
pub mod outcome;
pub mod result;
pub mod statistics;

pub use self::constraint::Constraint;
pub use self::context::DecisionContext;
pub use self::decision_type::DecisionType;
pub use self::errors::DecisionError;
pub use self::evaluation::Evaluation;
pub use self::ids::DecisionId;
pub use self::option::DecisionOption;
pub use self::outcome::{DecisionFeedback, ExpectedOutcome, RiskLevel};
pub use self::result::{
    DecisionResult, FALLBACK_CONFIDENCE, FALLBACK_STRATEGY, StrategyFailure,
};
pub use self::statistics::{ConfidenceDistribution, DecisionStatistics};
