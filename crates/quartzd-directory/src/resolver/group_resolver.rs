//! Breadth-first group expansion.
//!
//! # Architecture Decisions
//!
//! - **Work queue, not recursion**: nested groups are expanded through an
//!   explicit queue, so traversal depth never touches the call stack.
//!
//! - **Cycle guard**: every group name is recorded in a visited set the
//!   moment it is enqueued, so each distinct group is queried at most once
//!   and cyclic group graphs terminate.
//!
//! - **No depth limit**: group hierarchies in directory deployments are
//!   shallow; the visited set alone bounds the traversal.
//!
//! - **Sequential queries**: one blocking directory query at a time, a fresh
//!   connection per query. Callers needing bounded latency impose a timeout
//!   around the whole resolution call.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::error::DirectoryResult;

use super::patterns::MemberPatterns;
use super::traits::GroupSearch;
use super::types::{GroupNames, MemberRef};

/// Resolves nested directory groups into the full set of user members.
pub struct GroupResolver<S> {
    search: S,
    patterns: MemberPatterns,
}

impl<S> GroupResolver<S>
where
    S: GroupSearch,
{
    /// Creates a new resolver over the given search backend and patterns.
    pub fn new(search: S, patterns: MemberPatterns) -> Self {
        Self { search, patterns }
    }

    /// Expands a group or collection of groups into the set of all user
    /// identifiers that are members, directly or through nested groups.
    ///
    /// Returns the empty set when no group resolves to any member; a group
    /// with no `member` attribute contributes zero members and is not an
    /// error. Directory failures propagate unretried.
    #[instrument(skip(self))]
    pub fn resolve(&self, groups: GroupNames) -> DirectoryResult<HashSet<String>> {
        let mut pending = groups.into_queue()?;
        let mut visited: HashSet<String> = pending.iter().cloned().collect();
        let mut users = HashSet::new();

        while let Some(group) = pending.pop_front() {
            let members = self.search.group_members(&group)?;
            debug!(group = %group, members = members.len(), "expanding group");
            for raw in &members {
                match self.patterns.classify(raw) {
                    MemberRef::User(id) => {
                        users.insert(id);
                    }
                    MemberRef::Group(name) => {
                        if visited.insert(name.clone()) {
                            pending.push_back(name);
                        }
                    }
                    MemberRef::Unrecognized => {}
                }
            }
        }

        debug!(users = users.len(), groups = visited.len(), "expansion complete");
        Ok(users)
    }

    /// Checks whether `user` is a member, directly or transitively, of the
    /// named group. Derived from [`GroupResolver::resolve`]; no additional
    /// state.
    #[instrument(skip(self))]
    pub fn is_member(&self, user: &str, group: &str) -> DirectoryResult<bool> {
        let users = self.resolve(GroupNames::from(group))?;
        let is_member = users.contains(user);
        debug!(user = %user, group = %group, is_member, "membership check");
        Ok(is_member)
    }
}
