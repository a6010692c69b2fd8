//! Group resolver test suite.

use std::collections::HashSet;
use std::sync::Arc;

use super::mocks::{group_dn, test_patterns, user_dn, MockGroupSearch};
use crate::error::DirectoryError;
use crate::resolver::{GroupNames, GroupResolver, MemberPatterns, MemberRef};

fn resolver(search: &Arc<MockGroupSearch>) -> GroupResolver<Arc<MockGroupSearch>> {
    GroupResolver::new(Arc::clone(search), test_patterns())
}

fn set(users: &[&str]) -> HashSet<String> {
    users.iter().map(|u| u.to_string()).collect()
}

// ========== Section 1: Input validation ==========

#[test]
fn test_empty_collection_is_invalid_input() {
    let search = Arc::new(MockGroupSearch::new());
    let result = resolver(&search).resolve(GroupNames::Many(vec![]));
    assert!(
        matches!(result, Err(DirectoryError::InvalidInput { .. })),
        "empty collection should be rejected before traversal"
    );
}

#[test]
fn test_blank_group_name_is_invalid_input() {
    let search = Arc::new(MockGroupSearch::new());
    let result =
        resolver(&search).resolve(GroupNames::Many(vec!["ops".to_string(), "  ".to_string()]));
    assert!(
        matches!(result, Err(DirectoryError::InvalidInput { .. })),
        "blank group name should be rejected before traversal"
    );
}

#[test]
fn test_invalid_input_issues_no_queries() {
    let search = Arc::new(MockGroupSearch::new());
    let _ = resolver(&search).resolve(GroupNames::Many(vec![String::new()]));
    assert!(
        search.queries().is_empty(),
        "validation must happen before any directory query"
    );
}

// ========== Section 2: Direct and nested resolution ==========

#[test]
fn test_group_with_no_members_resolves_to_empty_set() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("empty", vec![]);
    let users = resolver(&search).resolve("empty".into()).unwrap();
    assert!(users.is_empty(), "member-less group should yield empty set");
}

#[test]
fn test_missing_group_resolves_to_empty_set() {
    // No entry for the group at all: zero members, not an error.
    let search = Arc::new(MockGroupSearch::new());
    let users = resolver(&search).resolve("no-such-group".into()).unwrap();
    assert!(users.is_empty());
}

#[test]
fn test_direct_members_are_collected() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("ops", vec![user_dn("alice"), user_dn("bob")]);
    let users = resolver(&search).resolve("ops".into()).unwrap();
    assert_eq!(users, set(&["alice", "bob"]));
}

#[test]
fn test_nested_chain_resolves_transitively() {
    // a -> b -> c -> carol
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("a", vec![group_dn("b")]);
    search.add_group("b", vec![group_dn("c")]);
    search.add_group("c", vec![user_dn("carol")]);
    let users = resolver(&search).resolve("a".into()).unwrap();
    assert_eq!(
        users,
        set(&["carol"]),
        "chain a->b->c->carol should yield exactly carol"
    );
}

#[test]
fn test_multiple_roots_accumulate_into_one_set() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("ops", vec![user_dn("alice")]);
    search.add_group("dev", vec![user_dn("bob"), user_dn("alice")]);
    let users = resolver(&search)
        .resolve(GroupNames::Many(vec!["ops".to_string(), "dev".to_string()]))
        .unwrap();
    assert_eq!(users, set(&["alice", "bob"]));
}

// ========== Section 3: Cycles and single-visit guarantees ==========

#[test]
fn test_cycle_with_no_users_terminates_with_empty_set() {
    // a -> b -> a
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("a", vec![group_dn("b")]);
    search.add_group("b", vec![group_dn("a")]);
    let users = resolver(&search).resolve("a".into()).unwrap();
    assert!(users.is_empty(), "cyclic graph must terminate with empty set");
}

#[test]
fn test_cycle_still_collects_users_along_the_way() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("a", vec![group_dn("b"), user_dn("alice")]);
    search.add_group("b", vec![group_dn("a"), user_dn("bob")]);
    let users = resolver(&search).resolve("a".into()).unwrap();
    assert_eq!(users, set(&["alice", "bob"]));
}

#[test]
fn test_each_distinct_group_is_queried_at_most_once() {
    // Diamond: top references left and right, both reference bottom.
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("top", vec![group_dn("left"), group_dn("right")]);
    search.add_group("left", vec![group_dn("bottom")]);
    search.add_group("right", vec![group_dn("bottom")]);
    search.add_group("bottom", vec![user_dn("dave")]);

    let users = resolver(&search).resolve("top".into()).unwrap();
    assert_eq!(users, set(&["dave"]));

    let queries = search.queries();
    let distinct: HashSet<_> = queries.iter().collect();
    assert_eq!(
        queries.len(),
        distinct.len(),
        "no group should be queried twice, got {:?}",
        queries
    );
    assert_eq!(queries.len(), 4);
}

#[test]
fn test_duplicate_input_names_are_queried_once() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("ops", vec![user_dn("alice")]);
    resolver(&search)
        .resolve(GroupNames::Many(vec!["ops".to_string(), "ops".to_string()]))
        .unwrap();
    assert_eq!(search.queries(), vec!["ops".to_string()]);
}

// ========== Section 4: Member classification ==========

#[test]
fn test_unrecognized_member_values_are_ignored() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group(
        "ops",
        vec![
            user_dn("alice"),
            "CN=printer1,OU=Devices,DC=example,DC=org".to_string(),
            "garbage".to_string(),
        ],
    );
    let users = resolver(&search).resolve("ops".into()).unwrap();
    assert_eq!(users, set(&["alice"]));
}

#[test]
fn test_user_pattern_takes_precedence_over_group_pattern() {
    // Overlapping patterns: everything matches both.
    let patterns = MemberPatterns::new("^CN=(.+)$", "^CN=(.+)$").unwrap();
    assert_eq!(
        patterns.classify("CN=alice"),
        MemberRef::User("alice".to_string())
    );
}

#[test]
fn test_classify_extracts_capture_group() {
    let patterns = test_patterns();
    assert_eq!(
        patterns.classify(&user_dn("alice")),
        MemberRef::User("alice".to_string())
    );
    assert_eq!(
        patterns.classify(&group_dn("ops")),
        MemberRef::Group("ops".to_string())
    );
    assert_eq!(patterns.classify("OU=Nothing"), MemberRef::Unrecognized);
}

// ========== Section 5: Membership checks ==========

#[test]
fn test_is_member_consistent_with_resolve() {
    let search = Arc::new(MockGroupSearch::new());
    search.add_group("ops", vec![group_dn("oncall"), user_dn("alice")]);
    search.add_group("oncall", vec![user_dn("bob")]);

    let resolver = resolver(&search);
    let users = resolver.resolve("ops".into()).unwrap();

    for user in ["alice", "bob", "mallory"] {
        assert_eq!(
            resolver.is_member(user, "ops").unwrap(),
            users.contains(user),
            "is_member({user}, ops) must agree with resolve(ops)"
        );
    }
}

// ========== Section 6: Failure propagation ==========

#[test]
fn test_directory_failure_propagates_unretried() {
    let search = Arc::new(MockGroupSearch::unavailable());
    let result = resolver(&search).resolve("ops".into());
    assert!(
        matches!(result, Err(DirectoryError::Unavailable { .. })),
        "connection failure should surface as directory-unavailable"
    );
}

#[test]
fn test_invalid_pattern_fails_at_compile_time() {
    let result = MemberPatterns::new("(unclosed", "^CN=(.+)$");
    assert!(matches!(result, Err(DirectoryError::InvalidPattern { .. })));
}
