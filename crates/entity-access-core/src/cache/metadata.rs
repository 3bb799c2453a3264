//! Cacheable metadata value types

use super::dependency::{merge_contexts, merge_tags, CacheableDependency};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Expiry bound of a cacheable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxAge {
    /// Never expires
    #[default]
    Permanent,
    /// Expires after the given number of seconds; zero means uncacheable
    Seconds(u32),
}

impl MaxAge {
    /// A max-age of zero seconds
    pub const UNCACHEABLE: MaxAge = MaxAge::Seconds(0);

    /// Combine two max-ages, keeping the more restrictive one
    pub fn merge(self, other: MaxAge) -> MaxAge {
        match (self, other) {
            (MaxAge::Permanent, other) => other,
            (this, MaxAge::Permanent) => this,
            (MaxAge::Seconds(a), MaxAge::Seconds(b)) => MaxAge::Seconds(a.min(b)),
        }
    }

    /// Returns true unless the max-age is zero
    pub fn is_cacheable(&self) -> bool {
        *self != MaxAge::UNCACHEABLE
    }

    /// Number of seconds, or `None` when permanent
    pub fn as_seconds(&self) -> Option<u32> {
        match self {
            MaxAge::Permanent => None,
            MaxAge::Seconds(seconds) => Some(*seconds),
        }
    }
}

impl From<Option<u32>> for MaxAge {
    fn from(seconds: Option<u32>) -> Self {
        seconds.map_or(MaxAge::Permanent, MaxAge::Seconds)
    }
}

/// Cache tags, cache contexts and max-age attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheableMetadata {
    /// Invalidation keys
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
    /// Variation keys
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    contexts: BTreeSet<String>,
    /// Expiry bound
    #[serde(default)]
    max_age: MaxAge,
}

impl CacheableMetadata {
    /// Empty, permanently cacheable metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the three facets of any cacheable dependency
    pub fn from_dependency<D: CacheableDependency + ?Sized>(dependency: &D) -> Self {
        Self {
            tags: dependency.cache_tags(),
            contexts: dependency.cache_contexts(),
            max_age: dependency.cache_max_age(),
        }
    }

    /// Add cache tags
    pub fn add_cache_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add cache contexts
    pub fn add_cache_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts.extend(contexts.into_iter().map(Into::into));
        self
    }

    /// Replace the max-age
    pub fn set_cache_max_age(mut self, max_age: MaxAge) -> Self {
        self.max_age = max_age;
        self
    }

    /// Lower the max-age to `max_age` if it is more restrictive
    pub fn merge_cache_max_age(mut self, max_age: MaxAge) -> Self {
        self.max_age = self.max_age.merge(max_age);
        self
    }

    /// Merge all three facets of another dependency into this one
    pub fn add_cacheable_dependency<D: CacheableDependency + ?Sized>(self, dependency: &D) -> Self {
        Self {
            tags: merge_tags(self.tags, dependency.cache_tags()),
            contexts: merge_contexts(self.contexts, dependency.cache_contexts()),
            max_age: self.max_age.merge(dependency.cache_max_age()),
        }
    }

    /// Merge two metadata values into a new one
    pub fn merge(&self, other: &CacheableMetadata) -> CacheableMetadata {
        self.clone().add_cacheable_dependency(other)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn contexts(&self) -> &BTreeSet<String> {
        &self.contexts
    }

    pub fn max_age(&self) -> MaxAge {
        self.max_age
    }

    /// Returns true if no tag or context is set and the max-age is permanent
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.contexts.is_empty() && self.max_age == MaxAge::Permanent
    }
}

impl CacheableDependency for CacheableMetadata {
    fn cache_tags(&self) -> BTreeSet<String> {
        self.tags.clone()
    }

    fn cache_contexts(&self) -> BTreeSet<String> {
        self.contexts.clone()
    }

    fn cache_max_age(&self) -> MaxAge {
        self.max_age
    }
}
