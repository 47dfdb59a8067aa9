use super::models::{AlbumId, ArtistId, LibraryKind};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Search,
    Settings,
    LibraryAlbums,
    LibraryAlbumsDetail,
    LibrarySongs,
    LibraryAlbumArtists,
    LibraryAlbumArtistsDetail,
    LibraryGenres,
    LibraryFolders,
    Playlists,
}

impl AppRoute {
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search/:itemType",
            Self::Settings => "/settings",
            Self::LibraryAlbums => "/library/albums",
            Self::LibraryAlbumsDetail => "/library/albums/:albumId",
            Self::LibrarySongs => "/library/songs",
            Self::LibraryAlbumArtists => "/library/album-artists",
            Self::LibraryAlbumArtistsDetail => "/library/album-artists/:albumArtistId",
            Self::LibraryGenres => "/library/genres",
            Self::LibraryFolders => "/library/folders",
            Self::Playlists => "/playlists",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Settings => "Settings",
            Self::LibraryAlbums => "Albums",
            Self::LibraryAlbumsDetail => "Album",
            Self::LibrarySongs => "Tracks",
            Self::LibraryAlbumArtists => "Album artists",
            Self::LibraryAlbumArtistsDetail => "Album artist",
            Self::LibraryGenres => "Genres",
            Self::LibraryFolders => "Folders",
            Self::Playlists => "Playlists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("missing route parameter `{0}`")]
    MissingParam(String),
}

/// Expands `:name` segments of `template` from `params`.
pub fn generate_path(template: &str, params: &[(String, String)]) -> Result<String, RouteError> {
    let segments = template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| RouteError::MissingParam(name.to_string())),
            None => Ok(segment.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(segments.join("/"))
}

/// A `(route template, params)` pair handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationIntent {
    pub route: AppRoute,
    pub params: Vec<(String, String)>,
}

impl NavigationIntent {
    #[must_use]
    pub fn to(route: AppRoute) -> Self {
        Self {
            route,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn album_detail(album_id: &AlbumId) -> Self {
        Self {
            route: AppRoute::LibraryAlbumsDetail,
            params: vec![("albumId".to_string(), album_id.0.clone())],
        }
    }

    #[must_use]
    pub fn artist_detail(artist_id: &ArtistId) -> Self {
        Self {
            route: AppRoute::LibraryAlbumArtistsDetail,
            params: vec![("albumArtistId".to_string(), artist_id.0.clone())],
        }
    }

    #[must_use]
    pub fn search(kind: LibraryKind) -> Self {
        Self {
            route: AppRoute::Search,
            params: vec![("itemType".to_string(), kind.item_type().to_string())],
        }
    }

    pub fn path(&self) -> Result<String, RouteError> {
        generate_path(self.route.template(), &self.params)
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
