use crate::app::config::ServerProfile;
use crate::domain::models::{SearchLimits, SearchResultSet};
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryFacade: Send + Sync {
    // Logs in and makes `profile` the active server. Returns its display name.
    async fn connect(&self, profile: &ServerProfile) -> Result<String>;

    // One logical search across albums, album artists and songs
    async fn search_all(&self, query: &str, limits: SearchLimits) -> Result<SearchResultSet>;
}
