//! Report fetching and rendering.

pub mod client;
pub mod render;
pub mod url;
