//! quartzd-server: Server-side helpers for the quartzd scheduling service
//!
//! This crate contains the thin helper layer around external tools and the
//! filesystem:
//! - Kerberos credential lifecycle (kinit/kdestroy wrappers)
//! - Shell command execution with captured output
//! - Cron-to-quartz schedule translation
//! - Per-project filesystem helpers
//! - Configuration management
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               quartzd-server                 │
//! ├─────────────────────────────────────────────┤
//! │  config.rs   - Configuration management     │
//! │  creds.rs    - Kerberos TGT lifecycle       │
//! │  exec.rs     - Shell command execution      │
//! │  schedule.rs - Cron-to-quartz translation   │
//! │  projects.rs - Per-project file helpers     │
//! │  net.rs      - Hostname/audit-line helpers  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Group membership gating lives in `quartzd-directory`; this crate wires it
//! up from configuration (see [`config::ServerConfig::group_resolver`]).

pub mod config;
pub mod creds;
pub mod error;
pub mod exec;
pub mod net;
pub mod projects;
pub mod schedule;

// Re-exports for convenience
pub use config::{ConfigLoadError, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use exec::CommandOutput;
