//! Error types for report fetching and configuration loading.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the CAS server or decoding its report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The CAS server URL given on the command line is unusable.
    #[error("Invalid CAS server URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// DNS failure, refused connection, timeout and similar.
    #[error("Network request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{}", http_status_message(.url, .status, .body))]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The response body is not a valid SSO sessions report.
    #[error("Failed to decode SSO sessions report from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

fn http_status_message(url: &str, status: &StatusCode, body: &str) -> String {
    let mut message = format!("Server returned error: {status} for {url}");
    let body = body.trim();
    if !body.is_empty() {
        message.push_str("\n  response: ");
        message.push_str(body);
    }
    message
}

/// Failures while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
