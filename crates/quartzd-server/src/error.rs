//! Helper error types.

use thiserror::Error;

/// Errors from the server-side helper layer.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `kinit` exited non-zero while establishing a ticket-granting
    /// credential.
    #[error("kerberos initialization failed: {stderr}")]
    CredentialInit { stderr: String },

    /// `kdestroy` exited non-zero while tearing down a credential cache.
    #[error("kerberos destruction failed: {stderr}")]
    CredentialDestroy { stderr: String },

    /// Schedule expression is not a 5-field cron expression.
    #[error("invalid cron schedule: {message}")]
    InvalidSchedule { message: String },

    /// Filesystem or process I/O failure.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Group resolution failure from the directory layer.
    #[error(transparent)]
    Directory(#[from] quartzd_directory::DirectoryError),
}

/// Result type for helper operations.
pub type ServerResult<T> = Result<T, ServerError>;
