use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AlbumId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ArtistId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SongId(pub String);

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    Album,
    AlbumArtist,
    Song,
}

impl LibraryKind {
    /// Path segment used by the search route (`/search/:itemType`).
    #[must_use]
    pub fn item_type(self) -> &'static str {
        match self {
            Self::Album => "albums",
            Self::AlbumArtist => "albumArtists",
            Self::Song => "songs",
        }
    }
}

// --- Display projections (one list row each) ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumItem {
    pub id: AlbumId,
    pub name: String,
    pub image_url: Option<String>,
    pub album_artists: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtistItem {
    pub id: ArtistId,
    pub name: String,
    pub image_url: Option<String>,
    pub album_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackItem {
    pub id: SongId,
    pub album_id: AlbumId,
    pub name: String,
    pub image_url: Option<String>,
    pub artists: Vec<String>,
}

impl AlbumItem {
    #[must_use]
    pub fn subtitle(&self) -> Option<String> {
        join_names(&self.album_artists)
    }
}

impl ArtistItem {
    #[must_use]
    pub fn subtitle(&self) -> Option<String> {
        (self.album_count > 0).then(|| format!("{} albums", self.album_count))
    }
}

impl TrackItem {
    #[must_use]
    pub fn subtitle(&self) -> Option<String> {
        join_names(&self.artists)
    }
}

fn join_names(names: &[String]) -> Option<String> {
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultSet {
    pub albums: Vec<AlbumItem>,
    pub album_artists: Vec<ArtistItem>,
    pub songs: Vec<TrackItem>,
}

impl SearchResultSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.album_artists.is_empty() && self.songs.is_empty()
    }
}

/// Per-category page window for a multi-entity search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub album_limit: usize,
    pub album_artist_limit: usize,
    pub song_limit: usize,
    pub album_start_index: usize,
    pub album_artist_start_index: usize,
    pub song_start_index: usize,
}

impl SearchLimits {
    pub const PALETTE_LIMIT: usize = 4;

    #[must_use]
    pub const fn uniform(limit: usize) -> Self {
        Self {
            album_limit: limit,
            album_artist_limit: limit,
            song_limit: limit,
            album_start_index: 0,
            album_artist_start_index: 0,
            song_start_index: 0,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::uniform(Self::PALETTE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitles() {
        let album = AlbumItem {
            album_artists: vec!["Pink Floyd".to_string(), "Roger Waters".to_string()],
            ..Default::default()
        };
        assert_eq!(album.subtitle().as_deref(), Some("Pink Floyd, Roger Waters"));

        let artist = ArtistItem {
            album_count: 15,
            ..Default::default()
        };
        assert_eq!(artist.subtitle().as_deref(), Some("15 albums"));

        let unknown = ArtistItem::default();
        assert_eq!(unknown.subtitle(), None);
        assert_eq!(TrackItem::default().subtitle(), None);
    }

    #[test]
    fn test_default_limits() {
        let limits = SearchLimits::default();
        assert_eq!(limits.album_limit, 4);
        assert_eq!(limits.song_limit, 4);
        assert_eq!(limits.album_artist_start_index, 0);
    }
}
