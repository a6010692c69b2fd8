//! LDAP-backed implementation of the group search seam.

use ldap3::{ldap_escape, LdapConn, Scope, SearchEntry};
use tracing::{instrument, warn};

use crate::error::DirectoryResult;
use crate::resolver::GroupSearch;

/// Attribute holding a group's member references.
const MEMBER_ATTRIBUTE: &str = "member";

/// Group search over an LDAP directory.
///
/// Each query opens a fresh connection to the configured server, searches
/// the configured base for the group entry, and unbinds. Correctness does
/// not depend on connection reuse, and independent connections keep
/// concurrent callers from contending on shared state.
#[derive(Debug, Clone)]
pub struct LdapGroupSearch {
    server_url: String,
    search_base: String,
}

impl LdapGroupSearch {
    /// Creates a new LDAP group search against `server_url`, searching under
    /// `search_base`.
    pub fn new(server_url: impl Into<String>, search_base: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            search_base: search_base.into(),
        }
    }
}

impl GroupSearch for LdapGroupSearch {
    #[instrument(skip(self), fields(server = %self.server_url))]
    fn group_members(&self, group: &str) -> DirectoryResult<Vec<String>> {
        let filter = format!("(&(objectClass=group)(CN={}))", ldap_escape(group));

        let mut conn = LdapConn::new(&self.server_url)?;
        let (entries, _result) = conn
            .search(
                &self.search_base,
                Scope::Subtree,
                &filter,
                vec![MEMBER_ATTRIBUTE],
            )?
            .success()?;
        if let Err(error) = conn.unbind() {
            warn!(%error, "failed to unbind directory connection");
        }

        // No matching entry or no member attribute means an empty group.
        let members = entries
            .into_iter()
            .next()
            .map(|entry| {
                SearchEntry::construct(entry)
                    .attrs
                    .remove(MEMBER_ATTRIBUTE)
                    .unwrap_or_default()
            })
            .unwrap_or_default();
        Ok(members)
    }
}
