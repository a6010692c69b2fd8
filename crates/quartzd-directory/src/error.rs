//! Error types for directory group resolution.

use thiserror::Error;

/// Directory-specific errors for group resolution operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Invalid group input (empty collection or blank group name).
    #[error("invalid group input: {message}")]
    InvalidInput { message: String },

    /// Directory service connection or query failure. Not retried internally.
    #[error("directory service unavailable: {source}")]
    Unavailable {
        #[from]
        source: ldap3::LdapError,
    },

    /// A member classification pattern failed to compile.
    #[error("invalid member pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
