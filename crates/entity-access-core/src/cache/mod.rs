//! Cacheability metadata
//!
//! Every node of a condition tree carries cacheability metadata describing what its
//! value depends on:
//! - tags: invalidation keys (e.g. `node_list`, `user:3`)
//! - contexts: variation keys (e.g. `user.permissions`)
//! - max-age: how long a result built from the node stays valid
//!
//! Metadata is combined facet by facet: tags and contexts by set union, max-ages by
//! keeping the shorter one, where [`MaxAge::Permanent`] is the identity.

mod dependency;
mod metadata;

pub use dependency::{merge_contexts, merge_max_ages, merge_tags, CacheableDependency};
pub use metadata::{CacheableMetadata, MaxAge};
