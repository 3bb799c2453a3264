//! Shared cacheability contract and per-facet merge operators

use super::metadata::MaxAge;
use std::collections::BTreeSet;

/// Anything that exposes cache tags, cache contexts and a max-age
///
/// Both condition tree node kinds implement this, so a group can fold its children
/// without caring whether a child is a leaf or a nested group.
pub trait CacheableDependency {
    /// Cache tags the value depends on
    fn cache_tags(&self) -> BTreeSet<String>;

    /// Cache contexts the value varies by
    fn cache_contexts(&self) -> BTreeSet<String>;

    /// How long the value may be cached
    fn cache_max_age(&self) -> MaxAge;
}

/// Union of two tag sets
pub fn merge_tags(mut a: BTreeSet<String>, b: BTreeSet<String>) -> BTreeSet<String> {
    a.extend(b);
    a
}

/// Union of two context sets
pub fn merge_contexts(mut a: BTreeSet<String>, b: BTreeSet<String>) -> BTreeSet<String> {
    a.extend(b);
    a
}

/// The shorter of two max-ages; permanent only if both are permanent
pub fn merge_max_ages(a: MaxAge, b: MaxAge) -> MaxAge {
    a.merge(b)
}
