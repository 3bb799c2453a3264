//! Entity Access Core - access condition trees for entity query filtering
//!
//! This crate provides the building blocks query access handlers use to describe
//! which entities a user may see:
//! - Conditions (field, operator, value) and nested AND/OR condition groups
//! - Cacheability metadata (tags, contexts, max-age) aggregated across a tree
//! - Declarative YAML/JSON definitions that build condition groups (`definitions`
//!   feature, enabled by default)
//! - Error types
//!
//! # Example
//!
//! ```rust
//! use entity_access_core::{CacheableMetadata, Condition, ConditionGroup, Conjunction};
//!
//! // Node type AND (uid OR status).
//! let mut group = ConditionGroup::default();
//! group.add_condition(Condition::new("type", vec!["article", "page"], "IN", CacheableMetadata::new())?);
//! group.add_condition(
//!     ConditionGroup::new(Conjunction::Or)
//!         .with_condition(Condition::new("uid", 1, "=", CacheableMetadata::new())?)
//!         .with_condition(Condition::new("status", "1", "=", CacheableMetadata::new())?),
//! );
//! assert_eq!(group.count(), 2);
//! # Ok::<(), entity_access_core::AccessError>(())
//! ```

pub mod cache;
#[cfg(feature = "definitions")]
pub mod definition;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use cache::{CacheableDependency, CacheableMetadata, MaxAge};
#[cfg(feature = "definitions")]
pub use definition::GroupDefinition;
pub use error::AccessError;
#[cfg(feature = "definitions")]
pub use error::DefinitionError;
pub use query::{
    Condition, ConditionGroup, ConditionNode, ConditionValue, Conjunction, Operator, Scalar,
};
