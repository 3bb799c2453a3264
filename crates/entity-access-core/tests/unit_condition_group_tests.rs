//! Unit tests for ConditionGroup insertion, rendering, cloning and cacheability

use entity_access_core::{
    CacheableDependency, CacheableMetadata, Condition, ConditionGroup, ConditionNode, Conjunction,
    MaxAge,
};
use std::collections::BTreeSet;

fn condition(field: &str, value: &str, operator: &str) -> Condition {
    Condition::new(field, value, operator, CacheableMetadata::new()).unwrap()
}

fn article_or_page() -> Condition {
    Condition::new("type", vec!["article", "page"], "IN", CacheableMetadata::new()).unwrap()
}

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

// =============================================================================
// Getter Tests
// =============================================================================

#[test]
fn test_single_condition_group() {
    let mut group = ConditionGroup::default();
    group.add_condition(condition("uid", "2", "="));

    assert_eq!(group.conjunction(), Conjunction::And);
    assert_eq!(group.conditions(), &[ConditionNode::from(condition("uid", "2", "="))]);
    assert_eq!(group.count(), 1);
    assert_eq!(group.to_string(), "uid = '2'");
}

#[test]
fn test_or_group() {
    let mut group = ConditionGroup::new(Conjunction::Or);
    group.add_condition(article_or_page());
    group.add_condition(condition("status", "1", "<>"));

    assert_eq!(group.conjunction(), Conjunction::Or);
    assert_eq!(
        group.conditions(),
        &[
            ConditionNode::from(article_or_page()),
            ConditionNode::from(condition("status", "1", "<>")),
        ]
    );
    assert_eq!(group.count(), 2);
    assert_eq!(
        group.to_string(),
        lines(&[
            "(",
            "  type IN ['article', 'page']",
            "    OR",
            "  status <> '1'",
            ")",
        ])
    );
}

#[test]
fn test_count_matches_conditions_len() {
    let mut group = ConditionGroup::default();
    assert_eq!(group.count(), group.conditions().len());
    for i in 0..5 {
        group.add_condition(condition("uid", &i.to_string(), "="));
        assert_eq!(group.count(), group.conditions().len());
    }
}

// =============================================================================
// Flattening Tests
// =============================================================================

#[test]
fn test_nested_group_with_single_condition_is_flattened() {
    let mut group = ConditionGroup::default();
    group.add_condition(article_or_page());
    group.add_condition(
        ConditionGroup::new(Conjunction::And).with_condition(condition("status", "1", "=")),
    );

    assert_eq!(
        group.conditions(),
        &[
            ConditionNode::from(article_or_page()),
            ConditionNode::from(condition("status", "1", "=")),
        ]
    );
    assert_eq!(group.conjunction(), Conjunction::And);
    assert_eq!(group.count(), 2);
    assert_eq!(
        group.to_string(),
        lines(&[
            "(",
            "  type IN ['article', 'page']",
            "    AND",
            "  status = '1'",
            ")",
        ])
    );
}

#[test]
fn test_single_child_group_equals_direct_insertion() {
    for conjunction in [Conjunction::And, Conjunction::Or] {
        let child = condition("uid", "1", "=");

        let mut via_group = ConditionGroup::new(Conjunction::Or);
        via_group.add_condition(ConditionGroup::new(conjunction).with_condition(child.clone()));

        let mut direct = ConditionGroup::new(Conjunction::Or);
        direct.add_condition(child);

        assert_eq!(via_group.conditions(), direct.conditions());
        assert_eq!(via_group.to_string(), direct.to_string());
    }
}

#[test]
fn test_flattening_is_shallow() {
    // An OR group holding a two-condition AND group: the OR wrapper goes away,
    // the AND group stays nested.
    let inner = ConditionGroup::new(Conjunction::And)
        .with_condition(condition("uid", "1", "="))
        .with_condition(condition("status", "1", "="));
    let wrapper = ConditionGroup::new(Conjunction::Or).with_condition(inner.clone());
    assert_eq!(wrapper.count(), 1);

    let group = ConditionGroup::default()
        .with_condition(article_or_page())
        .with_condition(wrapper);

    assert_eq!(group.count(), 2);
    assert_eq!(group.conditions()[1], ConditionNode::from(inner));
}

#[test]
fn test_single_child_chain_collapses_through_recursive_insertion() {
    let innermost = ConditionGroup::default().with_condition(condition("uid", "1", "="));
    let middle = ConditionGroup::new(Conjunction::Or).with_condition(innermost);
    assert_eq!(middle.conditions(), &[ConditionNode::from(condition("uid", "1", "="))]);

    let outer = ConditionGroup::default().with_condition(middle);
    assert_eq!(outer.conditions(), &[ConditionNode::from(condition("uid", "1", "="))]);
}

#[test]
fn test_nested_group_with_multiple_conditions() {
    let mut group = ConditionGroup::default();
    group.add_condition(
        Condition::new(
            "type",
            vec!["article", "page"],
            "IN",
            CacheableMetadata::new().add_cache_contexts(["foo"]),
        )
        .unwrap(),
    );
    let mut nested = ConditionGroup::new(Conjunction::Or);
    nested.add_condition(
        Condition::new("uid", "1", "=", CacheableMetadata::new().add_cache_contexts(["bar"]))
            .unwrap(),
    );
    nested.add_condition(condition("status", "1", "="));
    group.add_condition(nested.clone());

    assert_eq!(group.conditions()[1], ConditionNode::Group(nested));
    assert_eq!(group.conjunction(), Conjunction::And);
    assert_eq!(group.count(), 2);
    assert_eq!(
        group.to_string(),
        lines(&[
            "(",
            "  type IN ['article', 'page']",
            "    AND",
            "  (",
            "    uid = '1'",
            "      OR",
            "    status = '1'",
            "  )",
            ")",
        ])
    );

    let expected: BTreeSet<String> = ["foo", "bar"].iter().map(|s| s.to_string()).collect();
    assert_eq!(group.cache_contexts(), expected);
}

#[test]
fn test_empty_nested_group_is_kept() {
    let group = ConditionGroup::default()
        .with_condition(condition("uid", "1", "="))
        .with_condition(ConditionGroup::new(Conjunction::Or));

    assert_eq!(group.count(), 2);
    assert!(group.conditions()[1].is_group());
    assert_eq!(
        group.to_string(),
        lines(&["(", "  uid = '1'", "    AND", "  ", ")"])
    );
}

// =============================================================================
// Mutable Access Tests
// =============================================================================

#[test]
fn test_conditions_mut_allows_replace_and_remove() {
    let mut group = ConditionGroup::new(Conjunction::Or)
        .with_condition(condition("uid", "1", "="))
        .with_condition(condition("status", "1", "="))
        .with_condition(condition("promote", "1", "="));

    group.conditions_mut()[0] = condition("uid", "2", "=").into();
    group.conditions_mut().remove(2);

    assert_eq!(group.count(), 2);
    assert_eq!(
        group.to_string(),
        lines(&["(", "  uid = '2'", "    OR", "  status = '1'", ")"])
    );
}

// =============================================================================
// Clone Tests
// =============================================================================

#[test]
fn test_clone_is_deep() {
    let original = ConditionGroup::default()
        .with_condition(article_or_page())
        .with_condition(
            ConditionGroup::new(Conjunction::Or)
                .with_condition(condition("uid", "1", "="))
                .with_condition(condition("status", "1", "=")),
        );
    let snapshot = original.to_string();

    let mut cloned = original.clone();
    assert_eq!(cloned, original);

    if let Some(ConditionNode::Group(nested)) = cloned.conditions_mut().get_mut(1) {
        nested.conditions_mut().clear();
        nested.add_condition(condition("uid", "99", "="));
    } else {
        panic!("Expected nested group");
    }
    cloned.conditions_mut().remove(0);

    assert_eq!(original.count(), 2);
    assert_eq!(original.conditions()[1].as_group().map(|g| g.count()), Some(2));
    assert_eq!(original.to_string(), snapshot);
    assert_ne!(cloned, original);
}

// =============================================================================
// Cacheability Tests
// =============================================================================

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_group_exposes_base_cacheability() {
    let base = CacheableMetadata::new()
        .add_cache_tags(["node_list"])
        .add_cache_contexts(["user.permissions"])
        .set_cache_max_age(MaxAge::Seconds(60));
    let group = ConditionGroup::with_cacheability(Conjunction::And, base.clone());

    assert_eq!(group.cache_tags(), tags(&["node_list"]));
    assert_eq!(group.cache_contexts(), tags(&["user.permissions"]));
    assert_eq!(group.cache_max_age(), MaxAge::Seconds(60));
    assert_eq!(group.cacheability(), &base);
}

#[test]
fn test_cacheability_is_aggregated_recursively() {
    let nested = ConditionGroup::new(Conjunction::Or)
        .with_condition(
            Condition::new(
                "uid",
                "1",
                "=",
                CacheableMetadata::new()
                    .add_cache_tags(["user:1"])
                    .set_cache_max_age(MaxAge::Seconds(30)),
            )
            .unwrap(),
        )
        .with_condition(
            Condition::new(
                "status",
                "1",
                "=",
                CacheableMetadata::new().add_cache_tags(["node_list"]),
            )
            .unwrap(),
        );
    let group = ConditionGroup::with_cacheability(
        Conjunction::And,
        CacheableMetadata::new()
            .add_cache_tags(["node_list"])
            .set_cache_max_age(MaxAge::Seconds(300)),
    )
    .with_condition(
        Condition::new(
            "type",
            "article",
            "=",
            CacheableMetadata::new().add_cache_contexts(["user.permissions"]),
        )
        .unwrap(),
    )
    .with_condition(nested);

    assert_eq!(group.cache_tags(), tags(&["node_list", "user:1"]));
    assert_eq!(group.cache_contexts(), tags(&["user.permissions"]));
    assert_eq!(group.cache_max_age(), MaxAge::Seconds(30));

    let metadata = group.cacheable_metadata();
    assert_eq!(metadata.tags(), &tags(&["node_list", "user:1"]));
    assert_eq!(metadata.max_age(), MaxAge::Seconds(30));
}

#[test]
fn test_permanent_children_keep_base_max_age() {
    let group = ConditionGroup::with_cacheability(
        Conjunction::Or,
        CacheableMetadata::new().set_cache_max_age(MaxAge::Seconds(10)),
    )
    .with_condition(condition("uid", "1", "="))
    .with_condition(condition("uid", "2", "="));
    assert_eq!(group.cache_max_age(), MaxAge::Seconds(10));

    let group = ConditionGroup::default()
        .with_condition(condition("uid", "1", "="))
        .with_condition(condition("uid", "2", "="));
    assert_eq!(group.cache_max_age(), MaxAge::Permanent);
}

#[test]
fn test_nodes_share_the_cacheability_contract() {
    fn contexts_of(dependency: &dyn CacheableDependency) -> BTreeSet<String> {
        dependency.cache_contexts()
    }

    let leaf = Condition::new("uid", "1", "=", CacheableMetadata::new().add_cache_contexts(["user"]))
        .unwrap();
    let group = ConditionGroup::default()
        .with_condition(leaf.clone())
        .with_condition(condition("status", "1", "="));

    assert_eq!(contexts_of(&leaf), tags(&["user"]));
    assert_eq!(contexts_of(&group), tags(&["user"]));
    assert_eq!(contexts_of(&ConditionNode::from(group)), tags(&["user"]));
}
