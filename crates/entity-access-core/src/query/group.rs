//! Groups of access conditions
//!
//! Used by query access handlers for filtering lists of entities based on granted
//! permissions.

use super::condition::Condition;
use super::conjunction::Conjunction;
use super::node::ConditionNode;
use crate::cache::{
    merge_contexts, merge_max_ages, merge_tags, CacheableDependency, CacheableMetadata, MaxAge,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// An ordered collection of conditions and nested groups joined by one conjunction
///
/// The group's own cacheability is only a base: the cache tags, contexts and max-age
/// it reports always include those of every child, recursively.
///
/// # Example
/// ```rust
/// use entity_access_core::{CacheableMetadata, Condition, ConditionGroup, Conjunction};
///
/// // Filter by node type or status.
/// let mut group = ConditionGroup::new(Conjunction::Or);
/// group
///     .add_condition(Condition::new("type", vec!["article", "page"], "IN", CacheableMetadata::new())?)
///     .add_condition(Condition::new("status", "1", "<>", CacheableMetadata::new())?);
///
/// assert_eq!(
///     group.to_string(),
///     "(\n  type IN ['article', 'page']\n    OR\n  status <> '1'\n)"
/// );
/// # Ok::<(), entity_access_core::AccessError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConditionGroup {
    conjunction: Conjunction,
    conditions: Vec<ConditionNode>,
    #[serde(skip_serializing_if = "CacheableMetadata::is_empty")]
    cacheability: CacheableMetadata,
}

impl ConditionGroup {
    /// Create an empty group
    pub fn new(conjunction: Conjunction) -> Self {
        Self::with_cacheability(conjunction, CacheableMetadata::new())
    }

    /// Create an empty group with base cacheability
    ///
    /// Most groups inherit all of their cacheability from their conditions, but an
    /// empty group may still need some of its own.
    pub fn with_cacheability(conjunction: Conjunction, cacheability: CacheableMetadata) -> Self {
        Self {
            conjunction,
            conditions: Vec::new(),
            cacheability,
        }
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    /// Add a condition or a nested group
    ///
    /// A group holding exactly one child is not nested: that child is appended
    /// directly and the wrapper, including its base cacheability, is dropped. Only
    /// that one level is unwrapped.
    pub fn add_condition(&mut self, condition: impl Into<ConditionNode>) -> &mut Self {
        let node: ConditionNode = condition.into();
        match node {
            ConditionNode::Group(group) if group.count() == 1 => {
                tracing::debug!(
                    conjunction = %group.conjunction,
                    "Unwrapping single-condition group"
                );
                self.conditions.extend(group.conditions);
            }
            node => {
                tracing::trace!(
                    conjunction = %self.conjunction,
                    is_group = node.is_group(),
                    "Adding condition"
                );
                self.conditions.push(node);
            }
        }
        self
    }

    /// Builder form of [`add_condition`](Self::add_condition)
    pub fn with_condition(mut self, condition: impl Into<ConditionNode>) -> Self {
        self.add_condition(condition);
        self
    }

    /// All conditions and nested groups, in insertion order
    pub fn conditions(&self) -> &[ConditionNode] {
        &self.conditions
    }

    /// Mutable access to the live list of children
    ///
    /// This deliberately bypasses encapsulation so advanced callers can replace or
    /// remove children after the fact. Nothing is re-flattened.
    pub fn conditions_mut(&mut self) -> &mut Vec<ConditionNode> {
        &mut self.conditions
    }

    /// Number of direct children
    pub fn count(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionNode> {
        self.conditions.iter()
    }

    /// The group's own base cacheability, without its children
    pub fn cacheability(&self) -> &CacheableMetadata {
        &self.cacheability
    }

    /// Aggregated cacheability of the whole tree
    pub fn cacheable_metadata(&self) -> CacheableMetadata {
        CacheableMetadata::from_dependency(self)
    }

    /// Every condition in the tree (flattened, depth-first)
    pub fn all_conditions(&self) -> Vec<&Condition> {
        let mut result = Vec::new();
        self.collect_conditions(&mut result);
        result
    }

    fn collect_conditions<'a>(&'a self, result: &mut Vec<&'a Condition>) {
        for node in &self.conditions {
            match node {
                ConditionNode::Condition(c) => result.push(c),
                ConditionNode::Group(g) => g.collect_conditions(result),
            }
        }
    }
}

impl<'a> IntoIterator for &'a ConditionGroup {
    type Item = &'a ConditionNode;
    type IntoIter = std::slice::Iter<'a, ConditionNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

impl CacheableDependency for ConditionGroup {
    fn cache_tags(&self) -> BTreeSet<String> {
        self.conditions
            .iter()
            .fold(self.cacheability.cache_tags(), |tags, node| {
                merge_tags(tags, node.cache_tags())
            })
    }

    fn cache_contexts(&self) -> BTreeSet<String> {
        self.conditions
            .iter()
            .fold(self.cacheability.cache_contexts(), |contexts, node| {
                merge_contexts(contexts, node.cache_contexts())
            })
    }

    fn cache_max_age(&self) -> MaxAge {
        self.conditions
            .iter()
            .fold(self.cacheability.cache_max_age(), |max_age, node| {
                merge_max_ages(max_age, node.cache_max_age())
            })
    }
}

/// Debug rendering. A single child renders alone, an empty group renders as an
/// empty string, and nested groups are indented by two spaces per level.
impl fmt::Display for ConditionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conditions.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{}", only),
            children => {
                let lines: Vec<String> = children
                    .iter()
                    .map(|child| child.to_string().replace('\n', "\n  "))
                    .collect();
                let separator = format!("\n    {}\n  ", self.conjunction);
                write!(f, "(\n  {}\n)", lines.join(separator.as_str()))
            }
        }
    }
}
