//! Command handlers.

use std::io::Write;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::Settings;
use crate::core::client::{check_response, ReportClient};
use crate::core::render::{print_rendered, render, Rendered};
use crate::core::url::CasUrl;

/// Fetch and print the active SSO sessions of the CAS server at `url`.
///
/// # Errors
///
/// Fails on an invalid URL, a transport failure, a non-success HTTP status,
/// an undecodable report, or a broken stdout.
pub fn ssosessions(url: &str, settings: &Settings) -> Result<()> {
    let base_url = CasUrl::parse(url)?;
    let client = ReportClient::new(&settings.http)?;

    let (report, response) = client.fetch_active_sessions(&base_url)?;
    check_response(&response)?;
    tracing::info!(
        principals = report.total_principals,
        sessions = report.active_sso_sessions.len(),
        "SSO sessions report received"
    );

    let rendered = render(&report, &base_url);
    if matches!(rendered, Rendered::NoSessions) {
        tracing::info!(server = %base_url, "no active SSO sessions");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_rendered(&rendered, &mut out).wrap_err("Failed to write report")?;
    out.flush().wrap_err("Failed to write report")?;
    Ok(())
}
