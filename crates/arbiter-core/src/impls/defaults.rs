//! Stock weight tables.
//!
//! Positive weights reward larger attribute values, negative weights penalize.

use std::sync::Arc;

use super::weighted::WeightedScoringStrategy;
use crate::domain::DecisionType;
use crate::ports::DecisionStrategy;

/// Used for any category with no registered strategy.
pub fn fallback_strategy() -> WeightedScoringStrategy {
    WeightedScoringStrategy::new([("performance", 0.4), ("cost", -0.3), ("reliability", 0.3)])
}

pub fn resource_allocation_strategy() -> WeightedScoringStrategy {
    WeightedScoringStrategy::new([
        ("available_cpu", 0.3),
        ("available_memory", 0.3),
        ("cost_per_hour", -0.2),
        ("reliability_score", 0.2),
    ])
}

pub fn task_prioritization_strategy() -> WeightedScoringStrategy {
    WeightedScoringStrategy::new([
        ("deadline_urgency", 0.4),
        ("business_value", 0.3),
        ("complexity", -0.2),
        ("dependencies", -0.1),
    ])
}

pub fn error_handling_strategy() -> WeightedScoringStrategy {
    WeightedScoringStrategy::new([
        ("recovery_probability", 0.5),
        ("recovery_time", -0.3),
        ("impact_severity", -0.2),
    ])
}

/// Strategies an engine is seeded with. Categories not listed here use the
/// fallback.
pub fn default_strategies() -> Vec<(DecisionType, Arc<dyn DecisionStrategy>)> {
    vec![
        (
            DecisionType::ResourceAllocation,
            Arc::new(resource_allocation_strategy()),
        ),
        (
            DecisionType::TaskPrioritization,
            Arc::new(task_prioritization_strategy()),
        ),
        (
            DecisionType::ErrorHandling,
            Arc::new(error_handling_strategy()),
        ),
    ]
}
