//! Bounded decision history.

use std::collections::VecDeque;

use crate::domain::{DecisionId, DecisionResult};

/// Append-only history that keeps the newest `capacity` decisions.
///
/// Oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct DecisionHistory {
    entries: VecDeque<DecisionResult>,
    capacity: usize,
}

impl DecisionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn push(&mut self, result: DecisionResult) {
        self.entries.push_back(result);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionResult> {
        self.entries.iter()
    }

    pub fn find(&self, id: &DecisionId) -> Option<&DecisionResult> {
        self.entries.iter().rev().find(|d| &d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecisionOption, DecisionType, ExpectedOutcome};
    use chrono::Utc;
    use ulid::Ulid;

    fn result(confidence: f64) -> DecisionResult {
        let option = DecisionOption::new().with("confidence", confidence);
        DecisionResult {
            id: DecisionId::from_ulid(Ulid::new()),
            decision_type: DecisionType::Routing,
            expected_outcome: ExpectedOutcome::project(&option),
            selected_option: option,
            confidence,
            reasoning: String::new(),
            strategy: "test".to_string(),
            alternative_options: Vec::new(),
            risk_factors: Vec::new(),
            decision_time: Utc::now(),
            execution_time_ms: 0.0,
            suppressed_failures: Vec::new(),
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = DecisionHistory::new(3);
        for i in 0..5 {
            history.push(result(i as f64 / 10.0));
        }

        let kept: Vec<f64> = history.iter().map(|d| d.confidence).collect();
        assert_eq!(kept, vec![0.2, 0.3, 0.4]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = DecisionHistory::new(0);
        history.push(result(0.5));
        assert!(history.is_empty());
    }

    #[test]
    fn find_by_id() {
        let mut history = DecisionHistory::new(10);
        let first = result(0.1);
        let id = first.id;
        history.push(first);
        history.push(result(0.2));

        assert_eq!(history.find(&id).map(|d| d.confidence), Some(0.1));
        assert!(history.find(&DecisionId::from_ulid(Ulid::new())).is_none());
    }
}
