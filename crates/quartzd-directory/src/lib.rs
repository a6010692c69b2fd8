//! quartzd-directory: Nested group resolution against a directory service
//!
//! This crate contains the group membership engine for quartzd:
//! - Breadth-first expansion of nested directory groups into user sets
//! - Member reference classification via configured DN patterns
//! - An LDAP-backed search implementation (`ldap3`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              quartzd-directory               │
//! ├─────────────────────────────────────────────┤
//! │  resolver/   - Group expansion engine       │
//! │  ldap.rs     - LDAP GroupSearch backend     │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod ldap;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use error::{DirectoryError, DirectoryResult};
pub use ldap::LdapGroupSearch;
pub use resolver::{GroupNames, GroupResolver, GroupSearch, MemberPatterns, MemberRef};
