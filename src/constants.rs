//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout casctl,
//! including endpoint paths, timeouts, file locations, and console messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === CAS Endpoints ===

/// SSO sessions report, relative to the CAS server base URL.
pub const SSO_SESSIONS_PATH: &str = "status/ssosessions/getSsoSessions";

// === HTTP Configuration ===

/// Default timeout for the report request in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// Maximum number of response body bytes kept for error diagnostics.
pub const DIAGNOSTIC_BODY_LIMIT: usize = 512;

// === Path Configuration ===

/// Name of the configuration subdirectory under the user config dir.
pub const CONFIG_DIR_NAME: &str = "casctl";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the configuration file path.
pub const ENV_CONFIG: &str = "CASCTL_CONFIG";
/// Environment variable overriding the HTTP timeout.
pub const ENV_TIMEOUT: &str = "CASCTL_TIMEOUT";

// === Report Table ===

/// Column headers of the SSO sessions table.
pub const TABLE_HEADERS: [&str; 4] = ["User", "Authentication Date", "Number of uses", "Services"];
/// Separator between service URLs in the Services column.
pub const SERVICES_SEPARATOR: &str = ",";

// === Messages: CLI Output ===

pub const CLI_MSG_NO_SESSIONS: &str = "No active SSO sessions";
pub const CLI_MSG_ERROR: &str = "error";

// === Error Messages ===

pub const ERR_URL_SCHEME: &str = "only http and https URLs are supported";
pub const ERR_URL_NOT_BASE: &str = "URL cannot be used as a base";
