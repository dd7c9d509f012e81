//! Server configuration
//!
//! Layered through figment: an optional YAML file first, then environment
//! variables prefixed with `SITEWORKS_`, where `__` separates nesting
//! (`SITEWORKS_SERVER__PORT=9090` overrides `server.port`). Every field
//! has a default, so an empty configuration boots a local SQLite server.

use anyhow::Context;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use sitekit::db::DbConfig;
use std::path::{Path, PathBuf};

/// File consulted when no `--config` flag is given; it may be absent.
pub const DEFAULT_CONFIG_PATH: &str = "siteworks.yaml";

/// Built-in signing secret; `serve` warns while it is in effect.
pub const DEFAULT_JWT_SECRET: &str = "insecure-dev-secret";

/// Top-level server configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DbConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub uploads: UploadsConfig,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP listener section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout applied to the whole router
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upper bound on request body size; must stay above the attachment cap
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

/// Token issuing section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HS256 signing secret shared by the codec and the auth middleware
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Lifetime of issued bearer tokens
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

/// Attachment storage section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadsConfig {
    /// Directory attachment files are written under
    #[serde(default = "default_uploads_dir")]
    pub dir: PathBuf,

    /// Per-file size cap enforced by the work orders module
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Snapshot section, honored by `backup run` and the periodic task
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupConfig {
    /// Snapshot on a timer while serving
    #[serde(default)]
    pub enabled: bool,

    /// Directory snapshots are written into
    #[serde(default = "default_backup_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_backup_interval_hours")]
    pub interval_hours: u64,

    /// Snapshots kept after pruning, newest first
    #[serde(default = "default_backup_keep")]
    pub keep: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_backup_dir(),
            interval_hours: default_backup_interval_hours(),
            keep: default_backup_keep(),
        }
    }
}

/// Logging section; `RUST_LOG` overrides the filter when set
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Default tracing filter directive
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_body_limit_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl_hours() -> i64 {
    12
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("backups")
}

fn default_backup_interval_hours() -> u64 {
    24
}

fn default_backup_keep() -> usize {
    7
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Load configuration from the YAML file and the environment
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let figment = match path {
        // An explicitly named file must exist; the default one may be absent.
        Some(path) => Figment::new().merge(Yaml::file_exact(path)),
        None => Figment::new().merge(Yaml::file(DEFAULT_CONFIG_PATH)),
    };

    figment
        .merge(Env::prefixed("SITEWORKS_").split("__"))
        .extract()
        .context("invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_boot_a_local_sqlite_server() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_sqlite());
        assert_eq!(config.auth.token_ttl_hours, 12);
        assert!(!config.backup.enabled);
        assert_eq!(config.backup.keep, 7);
        assert!(config.server.body_limit_bytes as u64 > config.uploads.max_upload_bytes);
    }

    #[test]
    fn yaml_overrides_defaults_per_section() {
        let yaml = r#"
server:
  port: 9090
database:
  url: "postgres://app@localhost/siteworks"
  max_connections: 4
auth:
  jwt_secret: "a-real-secret"
backup:
  enabled: true
  keep: 3
log:
  json: true
"#;
        let config: AppConfig = Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.database.is_postgres());
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.auth.jwt_secret, "a-real-secret");
        assert!(config.backup.enabled);
        assert_eq!(config.backup.keep, 3);
        assert!(config.log.json);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AppConfig, _> = Figment::new()
            .merge(Yaml::string("server:\n  prot: 9090\n"))
            .extract();
        assert!(result.is_err());
    }
}
