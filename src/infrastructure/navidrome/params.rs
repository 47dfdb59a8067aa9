use super::sort::{AlbumArtistListSort, AlbumListSort, SongListSort, SortOrder};
use serde::Serialize;

/// Paging shared by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PaginationParams {
    #[serde(rename = "_start", skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(rename = "_end", skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(rename = "_order")]
    pub order: SortOrder,
}

impl PaginationParams {
    /// Navidrome pages with a half-open `[_start, _end)` window.
    #[must_use]
    pub fn window(start: usize, limit: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(start + limit),
            order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumListParams {
    #[serde(rename = "_start", skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(rename = "_end", skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(rename = "_order")]
    pub order: SortOrder,
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<AlbumListSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_rating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recently_added: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl AlbumListParams {
    #[must_use]
    pub fn search(query: &str, start: usize, limit: usize) -> Self {
        let page = PaginationParams::window(start, limit);
        Self {
            start: page.start,
            end: page.end,
            order: page.order,
            sort: Some(AlbumListSort::Name),
            album_id: None,
            artist_id: None,
            compilation: None,
            genre_id: None,
            has_rating: None,
            id: None,
            name: Some(query.to_string()),
            recently_added: None,
            starred: None,
            year: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumArtistListParams {
    #[serde(rename = "_start", skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(rename = "_end", skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(rename = "_order")]
    pub order: SortOrder,
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<AlbumArtistListSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl AlbumArtistListParams {
    #[must_use]
    pub fn search(query: &str, start: usize, limit: usize) -> Self {
        let page = PaginationParams::window(start, limit);
        Self {
            start: page.start,
            end: page.end,
            order: page.order,
            sort: Some(AlbumArtistListSort::Name),
            name: Some(query.to_string()),
            genre_id: None,
            starred: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongListParams {
    #[serde(rename = "_start", skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(rename = "_end", skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    #[serde(rename = "_order")]
    pub order: SortOrder,
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<SongListSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl SongListParams {
    #[must_use]
    pub fn search(query: &str, start: usize, limit: usize) -> Self {
        let page = PaginationParams::window(start, limit);
        Self {
            start: page.start,
            end: page.end,
            order: page.order,
            sort: Some(SongListSort::Title),
            title: Some(query.to_string()),
            album_id: None,
            artist_id: None,
            genre_id: None,
            starred: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePlaylistParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
}

/// Every field of [`CreatePlaylistParams`], all optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdatePlaylistParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToPlaylistParams {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveFromPlaylistParams {
    pub ids: Vec<String>,
}
