//! CAS server base URL handling.

use std::fmt;

use url::Url;

use crate::constants;
use crate::error::ReportError;

/// Base URL of a CAS server, always ending with a `/`.
///
/// Endpoint paths are joined onto it, so `https://cas.example/cas` and
/// `https://cas.example/cas/` address the same server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CasUrl(Url);

impl CasUrl {
    /// Parse and normalise a user supplied base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] for unparsable input, schemes other
    /// than http/https, and URLs that cannot carry a path.
    pub fn parse(input: &str) -> Result<Self, ReportError> {
        let trimmed = input.trim();
        let invalid = |reason: String| ReportError::InvalidUrl {
            input: trimmed.to_string(),
            reason,
        };

        let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(constants::ERR_URL_SCHEME.to_string()));
        }
        if url.cannot_be_a_base() || url.host().is_none() {
            return Err(invalid(constants::ERR_URL_NOT_BASE.to_string()));
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolve a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] if the joined URL is malformed.
    pub fn endpoint(&self, path: &str) -> Result<Url, ReportError> {
        self.0.join(path).map_err(|e| ReportError::InvalidUrl {
            input: format!("{}{path}", self.0),
            reason: e.to_string(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CasUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
