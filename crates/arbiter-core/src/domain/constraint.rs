//! Hard constraints on option attributes.
//!
//! JSON shapes:
//! - `{"min": 1, "max": 5}` / `{"equals": "gpu"}` → [`Constraint::Bounds`]
//! - `["eu", "us"]` → [`Constraint::OneOf`]
//! - any other scalar → [`Constraint::Exact`]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::option::numeric;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Constraint {
    /// Every present part must hold. An object with no recognized key is
    /// always satisfied.
    Bounds {
        min: Option<f64>,
        max: Option<f64>,
        equals: Option<Value>,
    },
    OneOf(Vec<Value>),
    Exact(Value),
}

impl Constraint {
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Constraint::Bounds {
            min,
            max,
            equals: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self::range(None, Some(max))
    }

    pub fn at_least(min: f64) -> Self {
        Self::range(Some(min), None)
    }

    pub fn equals(value: impl Into<Value>) -> Self {
        Constraint::Bounds {
            min: None,
            max: None,
            equals: Some(value.into()),
        }
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Constraint::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Does `value` satisfy this constraint?
    ///
    /// A numeric bound never holds for a non-numeric value.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            Constraint::Bounds { min, max, equals } => {
                if let Some(min) = min {
                    match numeric(value) {
                        Some(v) if v >= *min => {}
                        _ => return false,
                    }
                }
                if let Some(max) = max {
                    match numeric(value) {
                        Some(v) if v <= *max => {}
                        _ => return false,
                    }
                }
                if let Some(expected) = equals {
                    if !values_equal(value, expected) {
                        return false;
                    }
                }
                true
            }
            Constraint::OneOf(allowed) => allowed.iter().any(|a| values_equal(value, a)),
            Constraint::Exact(expected) => values_equal(value, expected),
        }
    }
}

/// JSON equality where numbers compare by value (`5 == 5.0`) and booleans
/// count as `1`/`0` against numbers.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Bool(_), Value::Number(_)) | (Value::Number(_), Value::Bool(_)) => {
            numeric(a) == numeric(b)
        }
        _ => a == b,
    }
}

impl From<Value> for Constraint {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Constraint::Bounds {
                min: map.get("min").and_then(Value::as_f64),
                max: map.get("max").and_then(Value::as_f64),
                equals: map.get("equals").cloned(),
            },
            Value::Array(values) => Constraint::OneOf(values),
            other => Constraint::Exact(other),
        }
    }
}

impl From<Constraint> for Value {
    fn from(constraint: Constraint) -> Self {
        match constraint {
            Constraint::Bounds { min, max, equals } => {
                let mut map = Map::new();
                if let Some(min) = min {
                    map.insert("min".to_string(), Value::from(min));
                }
                if let Some(max) = max {
                    map.insert("max".to_string(), Value::from(max));
                }
                if let Some(equals) = equals {
                    map.insert("equals".to_string(), equals);
                }
                Value::Object(map)
            }
            Constraint::OneOf(values) => Value::Array(values),
            Constraint::Exact(value) => value,
        }
    }
}
