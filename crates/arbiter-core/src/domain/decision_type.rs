//! DecisionType - the closed set of decision categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DecisionError;

/// Category of a decision. Drives strategy lookup in the engine.
///
/// Adding a category means adding a variant here and (optionally) a default
/// strategy in `impls::defaults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    ResourceAllocation,
    TaskPrioritization,
    ErrorHandling,
    Optimization,
    Routing,
    Scaling,
}

impl DecisionType {
    pub const ALL: [DecisionType; 6] = [
        DecisionType::ResourceAllocation,
        DecisionType::TaskPrioritization,
        DecisionType::ErrorHandling,
        DecisionType::Optimization,
        DecisionType::Routing,
        DecisionType::Scaling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionType::ResourceAllocation => "resource_allocation",
            DecisionType::TaskPrioritization => "task_prioritization",
            DecisionType::ErrorHandling => "error_handling",
            DecisionType::Optimization => "optimization",
            DecisionType::Routing => "routing",
            DecisionType::Scaling => "scaling",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecisionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DecisionError::InvalidInput(format!("unknown decision type '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::resource(DecisionType::ResourceAllocation, "resource_allocation")]
    #[case::priority(DecisionType::TaskPrioritization, "task_prioritization")]
    #[case::error(DecisionType::ErrorHandling, "error_handling")]
    #[case::optimization(DecisionType::Optimization, "optimization")]
    #[case::routing(DecisionType::Routing, "routing")]
    #[case::scaling(DecisionType::Scaling, "scaling")]
    fn display_serde_and_parse_agree(#[case] t: DecisionType, #[case] name: &str) {
        assert_eq!(t.to_string(), name);
        assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{name}\""));
        assert_eq!(name.parse::<DecisionType>().unwrap(), t);
    }

    #[test]
    fn unknown_name_is_invalid_input() {
        let err = "load_balancing".parse::<DecisionType>().unwrap_err();
        assert!(matches!(err, DecisionError::InvalidInput(_)));
    }
}
