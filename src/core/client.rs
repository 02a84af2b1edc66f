//! HTTP client for the CAS SSO sessions report.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::config::HttpConfig;
use crate::constants;
use crate::core::url::CasUrl;
use crate::error::ReportError;
use crate::state::SsoSessionReport;

/// What is kept of an HTTP response once the report has been decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// URL the request was sent to.
    pub url: String,
    /// Status returned by the server.
    pub status: StatusCode,
    /// Leading part of the body, only filled for failed requests.
    pub body_excerpt: String,
}

/// Blocking client for the CAS status endpoints.
pub struct ReportClient {
    client: Client,
}

impl ReportClient {
    /// Build the underlying HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::HttpClient`] if the TLS backend cannot be set up.
    pub fn new(config: &HttpConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ReportError::HttpClient)?;
        Ok(Self { client })
    }

    /// Fetch the active SSO sessions report.
    ///
    /// A non-success status is not an error here: the report is then empty
    /// and the caller decides through [`check_response`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Transport`] when no response was received and
    /// [`ReportError::Decode`] when a successful response is not a valid report.
    pub fn fetch_active_sessions(
        &self,
        base_url: &CasUrl,
    ) -> Result<(SsoSessionReport, ResponseMetadata), ReportError> {
        let url = base_url.endpoint(constants::SSO_SESSIONS_PATH)?;
        tracing::debug!(url = %url, "requesting SSO sessions report");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| ReportError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().map_err(|source| ReportError::Transport {
            url: url.clone(),
            source,
        })?;
        tracing::debug!(%status, bytes = body.len(), "received SSO sessions response");

        if !status.is_success() {
            let metadata = ResponseMetadata {
                url,
                status,
                body_excerpt: excerpt(&body, constants::DIAGNOSTIC_BODY_LIMIT).to_string(),
            };
            return Ok((SsoSessionReport::default(), metadata));
        }

        // An empty body (e.g. 204) carries no sessions.
        let report = if body.trim().is_empty() {
            SsoSessionReport::default()
        } else {
            serde_json::from_str(&body).map_err(|source| ReportError::Decode {
                url: url.clone(),
                source,
            })?
        };
        let metadata = ResponseMetadata {
            url,
            status,
            body_excerpt: String::new(),
        };
        Ok((report, metadata))
    }
}

/// Stop when the server did not answer with a success status.
///
/// # Errors
///
/// Returns [`ReportError::HttpStatus`] carrying the diagnostics to print.
pub fn check_response(metadata: &ResponseMetadata) -> Result<(), ReportError> {
    if metadata.status.is_success() {
        return Ok(());
    }
    tracing::warn!(status = %metadata.status, url = %metadata.url, "CAS server rejected request");
    Err(ReportError::HttpStatus {
        url: metadata.url.clone(),
        status: metadata.status,
        body: metadata.body_excerpt.clone(),
    })
}

/// Longest prefix of `text` no longer than `limit` bytes.
fn excerpt(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
