use crate::app::config::ServerProfile;
use crate::domain::{
    library::LibraryFacade,
    models::{SearchLimits, SearchResultSet},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

pub mod auth;
pub mod convert;
pub mod error;
pub mod params;
pub mod search;
pub mod sort;
pub mod types;

pub use error::NavidromeError;

pub(crate) const AUTH_HEADER: &str = "x-nd-authorization";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Credentials of the server we are logged in to.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub server_name: String,
    /// Server root without a trailing slash.
    pub base_url: String,
    pub username: String,
    pub token: String,
    pub subsonic_salt: String,
    pub subsonic_token: String,
}

#[cfg(test)]
impl Session {
    pub(crate) fn fixture() -> Self {
        Self {
            server_name: "home".to_string(),
            base_url: "http://localhost:4533".to_string(),
            username: "admin".to_string(),
            token: "jwt".to_string(),
            subsonic_salt: "salt".to_string(),
            subsonic_token: "tok".to_string(),
        }
    }
}

pub struct NavidromeAdapter {
    pub(crate) http: reqwest::Client,
    pub(crate) session: RwLock<Option<Session>>,
}

impl NavidromeAdapter {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tonearm/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            session: RwLock::new(None),
        })
    }

    pub(crate) async fn current_session(&self) -> Result<Session, NavidromeError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(NavidromeError::NotConnected)
    }

    pub async fn is_connected(&self) -> bool {
        self.session.read().await.is_some()
    }
}

#[async_trait]
impl LibraryFacade for NavidromeAdapter {
    async fn connect(&self, profile: &ServerProfile) -> Result<String> {
        self.connect_impl(profile).await
    }

    async fn search_all(&self, query: &str, limits: SearchLimits) -> Result<SearchResultSet> {
        Ok(self.search_all_impl(query, limits).await?)
    }
}
