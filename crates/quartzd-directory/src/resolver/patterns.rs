//! Member reference classification patterns.

use regex::Regex;

use crate::error::DirectoryResult;

use super::types::MemberRef;

/// Compiled DN patterns used to classify raw member values.
///
/// Directory schemas vary by deployment, so the patterns are configuration,
/// not constants. Each pattern must carry one capture group holding the
/// extracted identifier, e.g.
/// `^CN=([^,]+),OU=Users,DC=example,DC=org$` for users and
/// `^CN=([^,]+),OU=Groups,DC=example,DC=org$` for nested groups.
#[derive(Debug, Clone)]
pub struct MemberPatterns {
    user: Regex,
    group: Regex,
}

impl MemberPatterns {
    /// Compiles the user and group DN patterns.
    pub fn new(user_pattern: &str, group_pattern: &str) -> DirectoryResult<Self> {
        Ok(Self {
            user: Regex::new(user_pattern)?,
            group: Regex::new(group_pattern)?,
        })
    }

    /// Classifies a raw member value. The user pattern is tried first, so a
    /// value matching both patterns classifies as a user.
    pub fn classify(&self, raw: &str) -> MemberRef {
        if let Some(captures) = self.user.captures(raw) {
            if let Some(id) = captures.get(1) {
                return MemberRef::User(id.as_str().to_string());
            }
        }
        if let Some(captures) = self.group.captures(raw) {
            if let Some(name) = captures.get(1) {
                return MemberRef::Group(name.as_str().to_string());
            }
        }
        MemberRef::Unrecognized
    }
}
