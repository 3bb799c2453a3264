//! Declarative condition group definitions
//!
//! This is an optional configuration layer on top of the condition tree, compiled
//! with the `definitions` feature (on by default). The tree itself has no file
//! format; everything here only calls the public `ConditionGroup` and `Condition`
//! constructors.
//!
//! Access filters can be described as YAML or JSON instead of being built in code:
//!
//! ```yaml
//! conjunction: AND
//! conditions:
//!   - field: type
//!     operator: IN
//!     value: [article, page]
//!     cache:
//!       contexts: [user.permissions]
//!   - conjunction: OR
//!     conditions:
//!       - field: uid
//!         value: 1
//!       - field: status
//!         value: "1"
//! ```
//!
//! A condition defaults to the `=` operator and a null value. Building a definition
//! goes through the normal constructors, so operators are validated and
//! single-condition groups are unwrapped.

mod loader;
mod types;

pub use types::{CacheDefinition, ConditionDefinition, GroupDefinition, NodeDefinition};
