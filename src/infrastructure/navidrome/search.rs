use super::convert::{album_item, artist_item, track_item};
use super::params::{AlbumArtistListParams, AlbumListParams, SongListParams};
use super::types::{NdAlbum, NdAlbumArtist, NdSong};
use super::{NavidromeAdapter, NavidromeError, Session, AUTH_HEADER};
use crate::domain::models::{SearchLimits, SearchResultSet};
use reqwest::header::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};

/// A category that fails validation is dropped instead of failing the search.
pub(crate) fn parse_list<T: DeserializeOwned>(resource: &str, body: &[u8]) -> Vec<T> {
    match serde_json::from_slice(body) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(resource, error = %e, "discarding response that failed validation");
            Vec::new()
        }
    }
}

/// The server may hand back a fresh token with any response.
pub(crate) fn refreshed_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTH_HEADER)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

impl NavidromeAdapter {
    pub(crate) async fn search_all_impl(
        &self,
        query: &str,
        limits: SearchLimits,
    ) -> Result<SearchResultSet, NavidromeError> {
        let session = self.current_session().await?;
        tracing::debug!(query, server = %session.server_name, "searching library");

        let album_params = AlbumListParams::search(query, limits.album_start_index, limits.album_limit);
        let artist_params = AlbumArtistListParams::search(
            query,
            limits.album_artist_start_index,
            limits.album_artist_limit,
        );
        let song_params = SongListParams::search(query, limits.song_start_index, limits.song_limit);

        let (albums, artists, songs) = futures::try_join!(
            self.fetch_list::<NdAlbum, _>(&session, "album", &album_params),
            self.fetch_list::<NdAlbumArtist, _>(&session, "artist", &artist_params),
            self.fetch_list::<NdSong, _>(&session, "song", &song_params),
        )?;

        Ok(SearchResultSet {
            albums: albums
                .into_iter()
                .map(|album| album_item(album, &session))
                .collect(),
            album_artists: artists.into_iter().map(artist_item).collect(),
            songs: songs
                .into_iter()
                .map(|song| track_item(song, &session))
                .collect(),
        })
    }

    async fn fetch_list<T, P>(
        &self,
        session: &Session,
        resource: &'static str,
        params: &P,
    ) -> Result<Vec<T>, NavidromeError>
    where
        T: DeserializeOwned + Send,
        P: Serialize + Sync,
    {
        let path = format!("/api/{resource}");
        let response = self
            .http
            .get(format!("{}{path}", session.base_url))
            .header(AUTH_HEADER, format!("Bearer {}", session.token))
            .query(params)
            .send()
            .await
            .map_err(|source| NavidromeError::Http {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavidromeError::Status { status, path });
        }

        if let Some(token) = refreshed_token(response.headers()) {
            self.store_token(token).await;
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| NavidromeError::Http { path, source })?;
        Ok(parse_list(resource, &body))
    }

    async fn store_token(&self, token: String) {
        let mut guard = self.session.write().await;
        if let Some(session) = guard.as_mut() {
            if session.token != token {
                tracing::debug!(server = %session.server_name, "session token refreshed");
                session.token = token;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::fixtures;
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_list_valid() {
        let body = serde_json::to_vec(&serde_json::json!([
            fixtures::album("al-1", "Meddle", "Pink Floyd"),
            fixtures::album("al-2", "Animals", "Pink Floyd"),
        ]))
        .unwrap();
        let albums: Vec<NdAlbum> = parse_list("album", &body);
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[1].name, "Animals");
    }

    #[test]
    fn test_parse_list_invalid_category_is_empty() {
        let mut broken = fixtures::artist("ar-1", "Pink Floyd", 14);
        broken.as_object_mut().unwrap().remove("name");
        let body = serde_json::to_vec(&serde_json::json!([broken])).unwrap();
        let artists: Vec<NdAlbumArtist> = parse_list("artist", &body);
        assert!(artists.is_empty());

        let songs: Vec<NdSong> = parse_list("song", b"{\"error\":\"nope\"}");
        assert!(songs.is_empty());
    }

    #[test]
    fn test_refreshed_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(refreshed_token(&headers), None);

        headers.insert(AUTH_HEADER, HeaderValue::from_static("Bearer new-jwt"));
        assert_eq!(refreshed_token(&headers), Some("new-jwt".to_string()));

        headers.insert(AUTH_HEADER, HeaderValue::from_static("Bearer "));
        assert_eq!(refreshed_token(&headers), None);
    }

    #[tokio::test]
    async fn test_search_requires_session() {
        let adapter = NavidromeAdapter::new().unwrap();
        let err = adapter
            .search_all_impl("abba", SearchLimits::default())
            .await
            .unwrap_err();
        assert!(matches!(err, NavidromeError::NotConnected));
    }

    #[tokio::test]
    async fn test_store_token_updates_session() {
        let adapter = NavidromeAdapter::new().unwrap();
        adapter.store_token("ignored".to_string()).await;
        assert!(!adapter.is_connected().await);

        *adapter.session.write().await = Some(Session::fixture());
        adapter.store_token("fresh".to_string()).await;
        assert_eq!(adapter.current_session().await.unwrap().token, "fresh");
    }
}
