//! Console rendering of the SSO sessions report.

use std::io::{self, Write};

use colored::Colorize;
use prettytable::{Cell, Row, Table};

use crate::constants;
use crate::core::url::CasUrl;
use crate::state::{ActiveSession, SsoSessionReport};
use crate::theme;

/// Result of rendering a report.
#[derive(Debug)]
pub enum Rendered {
    /// The server counts no principals; nothing to tabulate.
    NoSessions,
    /// One row per active session.
    Table(SessionTable),
}

/// Titled table of active sessions.
///
/// The title spans all columns; the first row holds the column headers and
/// data rows follow.
#[derive(Debug)]
pub struct SessionTable {
    table: Table,
}

impl SessionTable {
    fn new(title: &str) -> Self {
        let mut table = Table::new();
        table.set_titles(Row::new(vec![
            Cell::new(title).with_hspan(constants::TABLE_HEADERS.len()),
        ]));
        table.add_row(Row::new(
            constants::TABLE_HEADERS
                .iter()
                .map(|header| Cell::new(header).style_spec("b"))
                .collect(),
        ));
        Self { table }
    }

    fn push(&mut self, session: &ActiveSession) {
        self.table.add_row(Row::new(vec![
            Cell::new(&session.authenticated_principal),
            Cell::new(&session.authentication_date),
            Cell::new(&session.number_of_uses.to_string()).style_spec("r"),
            Cell::new(&services_cell(session)),
        ]));
    }

    /// Data rows, headers excluded, as plain cell text.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.table
            .row_iter()
            .skip(1)
            .map(|row| row.iter().map(Cell::get_content).collect())
    }
}

impl std::fmt::Display for SessionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)
    }
}

/// Build the console view of a report.
#[must_use]
pub fn render(report: &SsoSessionReport, base_url: &CasUrl) -> Rendered {
    if !report.has_sessions() {
        return Rendered::NoSessions;
    }

    let mut table = SessionTable::new(&format!("CAS server {base_url} active SSO sessions"));
    for session in &report.active_sso_sessions {
        table.push(session);
    }
    Rendered::Table(table)
}

/// Comma-joined original URLs of every service that used the session.
#[must_use]
pub fn services_cell(session: &ActiveSession) -> String {
    session
        .service_urls()
        .collect::<Vec<_>>()
        .join(constants::SERVICES_SEPARATOR)
}

/// Write a rendered report to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn print_rendered(rendered: &Rendered, out: &mut impl Write) -> io::Result<()> {
    match rendered {
        Rendered::NoSessions => {
            writeln!(out, "{}", constants::CLI_MSG_NO_SESSIONS.color(theme::INFO))
        }
        Rendered::Table(table) => {
            writeln!(out)?;
            writeln!(out, "{}", table.to_string().color(theme::SUCCESS))
        }
    }
}
