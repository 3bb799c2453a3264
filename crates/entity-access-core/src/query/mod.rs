//! Access condition trees
//!
//! Query access handlers describe the entities a user may see as a tree of
//! [`Condition`] leaves combined by [`ConditionGroup`]s.
//!
//! ```text
//! (
//!   type IN ['article', 'page']
//!     AND
//!   (
//!     uid = '1'
//!       OR
//!     status = '1'
//!   )
//! )
//! ```
//!
//! The tree is only a representation: translating it into a storage query or
//! evaluating it against data is left to the consumer.
//!
//! ## Supported Operators
//! - `=`, `<>`, `<`, `<=`, `>`, `>=`
//! - `BETWEEN`, `NOT BETWEEN`
//! - `IN`, `NOT IN`
//! - `IS NULL`, `IS NOT NULL`

mod condition;
mod conjunction;
mod group;
mod node;
mod operator;
mod value;

pub use condition::Condition;
pub use conjunction::Conjunction;
pub use group::ConditionGroup;
pub use node::ConditionNode;
pub use operator::Operator;
pub use value::{ConditionValue, Scalar};
