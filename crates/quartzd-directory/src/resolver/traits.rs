//! Trait for the directory search operation needed by the resolver.

use crate::error::DirectoryResult;

/// Trait for looking up a group's raw member references.
///
/// Implementations query one group at a time; the resolver drives the
/// traversal. A group with no matching entry or no `member` attribute is
/// reported as an empty list, not an error.
pub trait GroupSearch {
    /// Returns the raw `member` attribute values of the named group.
    fn group_members(&self, group: &str) -> DirectoryResult<Vec<String>>;
}

impl<S: GroupSearch + ?Sized> GroupSearch for std::sync::Arc<S> {
    fn group_members(&self, group: &str) -> DirectoryResult<Vec<String>> {
        (**self).group_members(group)
    }
}
