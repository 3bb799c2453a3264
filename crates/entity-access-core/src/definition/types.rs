//! Definition types for declarative condition groups

use crate::cache::{CacheableMetadata, MaxAge};
use crate::error::{DefinitionError, Result};
use crate::query::{Condition, ConditionGroup, ConditionValue, Conjunction};
use serde::{Deserialize, Serialize};

/// Cacheability attached to a condition or group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CacheDefinition {
    pub tags: Vec<String>,
    pub contexts: Vec<String>,
    /// Seconds; permanent when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
}

impl CacheDefinition {
    pub fn to_metadata(&self) -> CacheableMetadata {
        CacheableMetadata::new()
            .add_cache_tags(self.tags.iter().cloned())
            .add_cache_contexts(self.contexts.iter().cloned())
            .set_cache_max_age(MaxAge::from(self.max_age))
    }
}

/// A single condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionDefinition {
    /// Field name, optionally with a column (e.g. `address.locality`)
    pub field: String,
    #[serde(default = "default_operator")]
    pub operator: String,
    #[serde(default)]
    pub value: ConditionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheDefinition>,
}

fn default_operator() -> String {
    "=".to_string()
}

impl ConditionDefinition {
    pub fn build(&self) -> Result<Condition> {
        Condition::new(
            self.field.as_str(),
            self.value.clone(),
            &self.operator,
            cacheability(&self.cache),
        )
    }
}

/// A group of conditions and nested groups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupDefinition {
    #[serde(default)]
    pub conjunction: Conjunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheDefinition>,
    pub conditions: Vec<NodeDefinition>,
}

/// An item in a group definition can be a condition or a nested group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NodeDefinition {
    Condition(ConditionDefinition),
    Group(GroupDefinition),
}

impl GroupDefinition {
    /// Build the condition group described by this definition
    pub fn build(&self) -> std::result::Result<ConditionGroup, DefinitionError> {
        let group = self.build_group()?;
        tracing::debug!(
            conjunction = %group.conjunction(),
            conditions = group.count(),
            "Built condition group from definition"
        );
        Ok(group)
    }

    fn build_group(&self) -> Result<ConditionGroup> {
        let mut group = ConditionGroup::with_cacheability(self.conjunction, cacheability(&self.cache));
        for item in &self.conditions {
            match item {
                NodeDefinition::Condition(condition) => {
                    group.add_condition(condition.build()?);
                }
                NodeDefinition::Group(nested) => {
                    group.add_condition(nested.build_group()?);
                }
            }
        }
        Ok(group)
    }
}

fn cacheability(cache: &Option<CacheDefinition>) -> CacheableMetadata {
    cache
        .as_ref()
        .map(CacheDefinition::to_metadata)
        .unwrap_or_default()
}
