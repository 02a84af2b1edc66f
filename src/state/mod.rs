//! Data types shared between the report client and renderer.

mod report;

pub use report::{ActiveSession, AuthenticatedService, SsoSessionReport};
