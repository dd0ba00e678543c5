// ABOUTME: SCM API error types.
// ABOUTME: Maps transport failures and vendor status codes to user-facing errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't connect to {realm}, please verify the realm or network connectivity: {source}")]
    Network {
        realm: String,
        source: reqwest::Error,
    },

    #[error("401 Error: incorrect username or password for {realm}")]
    AuthenticationFailed { realm: String },

    #[error("502 Error: REST API is not enabled on {realm}")]
    ApiNotEnabled { realm: String },

    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    #[error("failed to decode response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
