//! Configuration management for the quartzd helper layer.
//!
//! This module provides configuration loading with multiple sources:
//! 1. Default values (hardcoded)
//! 2. Configuration file (YAML)
//! 3. Environment variables (override)
//!
//! # Configuration Hierarchy
//!
//! Environment variables take precedence over config file values,
//! which take precedence over defaults. This follows the 12-factor app pattern.
//!
//! # Example
//!
//! ```ignore
//! use quartzd_server::config::ServerConfig;
//!
//! // Load from file with env overrides
//! let config = ServerConfig::load("config.yaml")?;
//!
//! // Or load from environment only
//! let config = ServerConfig::from_env()?;
//!
//! // Wire up the directory resolver from the ldap section
//! let resolver = config.group_resolver()?;
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use quartzd_directory::{DirectoryResult, GroupResolver, LdapGroupSearch, MemberPatterns};

/// Helper-layer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// Service-wide settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Directory (LDAP) settings
    #[serde(default)]
    pub ldap: LdapSettings,

    /// Scheduler filesystem settings
    #[serde(default)]
    pub scheduler: SchedulerSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Service-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerSettings {
    /// Domain suffix appended to unqualified hostnames
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            domain: default_domain(),
        }
    }
}

fn default_domain() -> String {
    "example.org".to_string()
}

/// Directory service settings.
///
/// The DN patterns are deployment-specific: each must carry one capture
/// group extracting the user identifier or nested group name from a raw
/// `member` value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LdapSettings {
    /// Directory server URL
    #[serde(default = "default_ldap_server_url")]
    pub server_url: String,

    /// Search base DN for group lookups
    #[serde(default = "default_ldap_search_base")]
    pub search_base: String,

    /// Pattern classifying a member value as a user reference
    #[serde(default = "default_user_pattern")]
    pub user_pattern: String,

    /// Pattern classifying a member value as a nested group reference
    #[serde(default = "default_group_pattern")]
    pub group_pattern: String,
}

impl Default for LdapSettings {
    fn default() -> Self {
        Self {
            server_url: default_ldap_server_url(),
            search_base: default_ldap_search_base(),
            user_pattern: default_user_pattern(),
            group_pattern: default_group_pattern(),
        }
    }
}

fn default_ldap_server_url() -> String {
    "ldap://localhost:389".to_string()
}

fn default_ldap_search_base() -> String {
    "DC=example,DC=org".to_string()
}

fn default_user_pattern() -> String {
    "^CN=([^,]+),OU=Users,DC=example,DC=org$".to_string()
}

fn default_group_pattern() -> String {
    "^CN=([^,]+),OU=Groups,DC=example,DC=org$".to_string()
}

/// Scheduler filesystem settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SchedulerSettings {
    /// Root directory holding per-project directories
    #[serde(default = "default_projects_home")]
    pub projects_home: PathBuf,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            projects_home: default_projects_home(),
        }
    }
}

fn default_projects_home() -> PathBuf {
    PathBuf::from("/var/lib/quartzd/projects")
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format (true for production, false for development)
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable overrides.
    ///
    /// Environment variables are prefixed with `QUARTZD_` and use `__` as
    /// separator. For example:
    /// - `QUARTZD_LDAP__SERVER_URL=...` overrides `ldap.server_url`
    /// - `QUARTZD_SCHEDULER__PROJECTS_HOME=...` overrides `scheduler.projects_home`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&ServerConfig::default())?)
            // Add config file
            .add_source(File::from(path).format(FileFormat::Yaml))
            // Add environment variables with QUARTZD_ prefix
            // Use __ as separator for nested keys: QUARTZD_LDAP__SERVER_URL -> ldap.server_url
            .add_source(
                Environment::with_prefix("QUARTZD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let server_config: ServerConfig = config.try_deserialize()?;
        server_config.validate()?;

        Ok(server_config)
    }

    /// Load configuration from environment variables only.
    ///
    /// Uses default values and allows overrides via QUARTZD_ prefixed env vars.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .add_source(Config::try_from(&ServerConfig::default())?)
            .add_source(
                Environment::with_prefix("QUARTZD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let server_config: ServerConfig = config.try_deserialize()?;
        server_config.validate()?;

        Ok(server_config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.ldap.server_url.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "ldap.server_url must not be empty".to_string(),
            });
        }
        if self.ldap.search_base.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "ldap.search_base must not be empty".to_string(),
            });
        }

        // Both DN patterns must compile.
        if let Err(error) = MemberPatterns::new(&self.ldap.user_pattern, &self.ldap.group_pattern) {
            return Err(ConfigLoadError::Invalid {
                message: format!("ldap member patterns do not compile: {error}"),
            });
        }

        if self.scheduler.projects_home.as_os_str().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "scheduler.projects_home must not be empty".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigLoadError::Invalid {
                message: format!(
                    "logging.level must be one of: {:?}, got: {}",
                    valid_levels, self.logging.level
                ),
            });
        }

        Ok(())
    }

    /// Builds the group resolver wired to the configured directory server.
    pub fn group_resolver(&self) -> DirectoryResult<GroupResolver<LdapGroupSearch>> {
        let patterns = MemberPatterns::new(&self.ldap.user_pattern, &self.ldap.group_pattern)?;
        let search = LdapGroupSearch::new(&self.ldap.server_url, &self.ldap.search_base);
        Ok(GroupResolver::new(search, patterns))
    }
}
