//! Single access condition

use super::operator::Operator;
use super::value::ConditionValue;
use crate::cache::{CacheableDependency, CacheableMetadata, MaxAge};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// An atomic comparison of one field against a value
///
/// Conditions are immutable once built. The field is opaque here and may name a
/// sub-column with a dot (e.g. `address.locality`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    field: String,
    value: ConditionValue,
    operator: Operator,
    #[serde(skip_serializing_if = "CacheableMetadata::is_empty")]
    cacheability: CacheableMetadata,
}

impl Condition {
    /// Create a condition, validating the operator
    ///
    /// # Errors
    /// Returns [`AccessError::InvalidOperator`](crate::AccessError::InvalidOperator)
    /// if `operator` is not one of the supported operators.
    ///
    /// # Example
    /// ```rust
    /// use entity_access_core::{CacheableMetadata, Condition};
    ///
    /// let condition = Condition::new("uid", "2", "=", CacheableMetadata::new())?;
    /// assert_eq!(condition.to_string(), "uid = '2'");
    ///
    /// assert!(Condition::new("uid", "2", "==", CacheableMetadata::new()).is_err());
    /// # Ok::<(), entity_access_core::AccessError>(())
    /// ```
    pub fn new(
        field: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: &str,
        cacheability: CacheableMetadata,
    ) -> Result<Self> {
        let operator = operator.parse::<Operator>()?;
        Ok(Self::with_operator(field, value, operator, cacheability))
    }

    /// Create a condition from an already typed operator
    pub fn with_operator(
        field: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: Operator,
        cacheability: CacheableMetadata,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator,
            cacheability,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn cacheability(&self) -> &CacheableMetadata {
        &self.cacheability
    }
}

impl CacheableDependency for Condition {
    fn cache_tags(&self) -> BTreeSet<String> {
        self.cacheability.cache_tags()
    }

    fn cache_contexts(&self) -> BTreeSet<String> {
        self.cacheability.cache_contexts()
    }

    fn cache_max_age(&self) -> MaxAge {
        self.cacheability.cache_max_age()
    }
}

/// Debug rendering, not executable query text.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.is_null_check() {
            write!(f, "{} {}", self.field, self.operator)
        } else {
            write!(f, "{} {} {}", self.field, self.operator, self.value)
        }
    }
}
