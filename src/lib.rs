//! casctl - command line reporting for CAS single-sign-on servers.
//!
//! The `ssosessions` command fetches the SSO sessions report from a CAS
//! server's status endpoint and prints it as a table.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logging;
pub mod state;
pub mod theme;
