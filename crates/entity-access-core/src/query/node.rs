//! Condition tree nodes

use super::condition::Condition;
use super::group::ConditionGroup;
use crate::cache::{CacheableDependency, MaxAge};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A child of a condition group: a single condition or a nested group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionNode {
    Condition(Condition),
    Group(ConditionGroup),
}

impl ConditionNode {
    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            ConditionNode::Condition(condition) => Some(condition),
            ConditionNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&ConditionGroup> {
        match self {
            ConditionNode::Group(group) => Some(group),
            ConditionNode::Condition(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ConditionNode::Group(_))
    }
}

impl From<Condition> for ConditionNode {
    fn from(condition: Condition) -> Self {
        ConditionNode::Condition(condition)
    }
}

impl From<ConditionGroup> for ConditionNode {
    fn from(group: ConditionGroup) -> Self {
        ConditionNode::Group(group)
    }
}

impl CacheableDependency for ConditionNode {
    fn cache_tags(&self) -> BTreeSet<String> {
        match self {
            ConditionNode::Condition(condition) => condition.cache_tags(),
            ConditionNode::Group(group) => group.cache_tags(),
        }
    }

    fn cache_contexts(&self) -> BTreeSet<String> {
        match self {
            ConditionNode::Condition(condition) => condition.cache_contexts(),
            ConditionNode::Group(group) => group.cache_contexts(),
        }
    }

    fn cache_max_age(&self) -> MaxAge {
        match self {
            ConditionNode::Condition(condition) => condition.cache_max_age(),
            ConditionNode::Group(group) => group.cache_max_age(),
        }
    }
}

impl fmt::Display for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionNode::Condition(condition) => write!(f, "{}", condition),
            ConditionNode::Group(group) => write!(f, "{}", group),
        }
    }
}
