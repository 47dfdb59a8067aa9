use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavidromeError {
    #[error("Not connected to a Navidrome server")]
    NotConnected,

    #[error("Invalid server URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {path} failed")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned {status} for {path}")]
    Status { status: StatusCode, path: String },

    #[error("Unexpected {what} response")]
    Schema {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
