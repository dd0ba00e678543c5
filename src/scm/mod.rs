// ABOUTME: SteelConnect Manager REST API client and response types.
// ABOUTME: Covers the Config and Reporting endpoints the tool consumes.

mod client;
mod error;
pub mod models;
pub mod types;

pub use client::ScmClient;
pub use error::{Error, Result};
