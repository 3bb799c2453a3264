//! Condition values
//!
//! A condition compares its field against a single scalar, an ordered list of
//! scalars (`IN`, `BETWEEN`, ...) or nothing at all (`IS NULL`, `IS NOT NULL`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single comparable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Value of a condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ConditionValue {
    /// Ordered list of values
    List(Vec<Scalar>),
    /// Single value
    Scalar(Scalar),
    /// No value, used with the null-check operators
    #[default]
    Null,
}

impl ConditionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConditionValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ConditionValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            ConditionValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Diagnostic rendering: `'value'` for scalars, `['a', 'b']` for lists and `''` for
/// null. Embedded quotes are not escaped.
impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Scalar(scalar) => write!(f, "'{}'", scalar),
            ConditionValue::List(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("', '");
                write!(f, "['{}']", joined)
            }
            ConditionValue::Null => f.write_str("''"),
        }
    }
}

macro_rules! scalar_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConditionValue {
                fn from(value: $ty) -> Self {
                    ConditionValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_value_from!(&str, String, i32, i64, u32, f64, bool);

impl From<Scalar> for ConditionValue {
    fn from(scalar: Scalar) -> Self {
        ConditionValue::Scalar(scalar)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ConditionValue {
    fn from(values: Vec<T>) -> Self {
        ConditionValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConditionValue>> From<Option<T>> for ConditionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConditionValue::Null, Into::into)
    }
}
