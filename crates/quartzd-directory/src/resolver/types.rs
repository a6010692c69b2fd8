//! Types for the group expansion engine.

use std::collections::VecDeque;

use crate::error::{DirectoryError, DirectoryResult};

/// Input to a group resolution: a single group name or a collection of
/// group names, decided at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupNames {
    /// A single group name.
    Single(String),
    /// A non-empty collection of group names.
    Many(Vec<String>),
}

impl GroupNames {
    /// Validates the input and returns the initial work queue, deduplicated
    /// and in input order.
    ///
    /// Fails with [`DirectoryError::InvalidInput`] when the collection is
    /// empty or any name is blank.
    pub(crate) fn into_queue(self) -> DirectoryResult<VecDeque<String>> {
        let names = match self {
            GroupNames::Single(name) => vec![name],
            GroupNames::Many(names) => names,
        };
        if names.is_empty() {
            return Err(DirectoryError::InvalidInput {
                message: "expected at least one group name".to_string(),
            });
        }
        let mut queue = VecDeque::with_capacity(names.len());
        for name in names {
            if name.trim().is_empty() {
                return Err(DirectoryError::InvalidInput {
                    message: "group names must not be blank".to_string(),
                });
            }
            if !queue.contains(&name) {
                queue.push_back(name);
            }
        }
        Ok(queue)
    }
}

impl From<&str> for GroupNames {
    fn from(name: &str) -> Self {
        GroupNames::Single(name.to_string())
    }
}

impl From<String> for GroupNames {
    fn from(name: String) -> Self {
        GroupNames::Single(name)
    }
}

impl From<Vec<String>> for GroupNames {
    fn from(names: Vec<String>) -> Self {
        GroupNames::Many(names)
    }
}

/// Classification of a raw `member` attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberRef {
    /// Value matched the user DN pattern; holds the extracted user id.
    User(String),
    /// Value matched the group DN pattern; holds the nested group name.
    Group(String),
    /// Value matched neither pattern and is ignored.
    Unrecognized,
}
