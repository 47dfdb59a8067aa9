use crate::domain::models::{AlbumItem, ArtistItem, LibraryKind, SearchResultSet, TrackItem};
use crate::domain::routes::NavigationIntent;

/// A library entity that can be listed as a palette row.
pub trait PaletteEntry {
    const KIND: LibraryKind;
    const HEADING: &'static str;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn subtitle(&self) -> Option<String>;
    fn image_url(&self) -> Option<&str>;
    /// Where selecting the row takes the user.
    fn target(&self) -> NavigationIntent;
}

impl PaletteEntry for AlbumItem {
    const KIND: LibraryKind = LibraryKind::Album;
    const HEADING: &'static str = "Albums";

    fn id(&self) -> &str {
        &self.id.0
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn subtitle(&self) -> Option<String> {
        AlbumItem::subtitle(self)
    }
    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
    fn target(&self) -> NavigationIntent {
        NavigationIntent::album_detail(&self.id)
    }
}

impl PaletteEntry for ArtistItem {
    const KIND: LibraryKind = LibraryKind::AlbumArtist;
    const HEADING: &'static str = "Artists";

    fn id(&self) -> &str {
        &self.id.0
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn subtitle(&self) -> Option<String> {
        ArtistItem::subtitle(self)
    }
    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
    fn target(&self) -> NavigationIntent {
        NavigationIntent::artist_detail(&self.id)
    }
}

impl PaletteEntry for TrackItem {
    const KIND: LibraryKind = LibraryKind::Song;
    const HEADING: &'static str = "Tracks";

    fn id(&self) -> &str {
        &self.id.0
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn subtitle(&self) -> Option<String> {
        TrackItem::subtitle(self)
    }
    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
    // Tracks open their containing album
    fn target(&self) -> NavigationIntent {
        NavigationIntent::album_detail(&self.album_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub kind: LibraryKind,
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub target: NavigationIntent,
}

impl ResultRow {
    fn from_entry<T: PaletteEntry>(entry: &T) -> Self {
        Self {
            kind: T::KIND,
            id: entry.id().to_string(),
            title: entry.title().to_string(),
            subtitle: entry.subtitle(),
            image_url: entry.image_url().map(str::to_string),
            target: entry.target(),
        }
    }
}

/// A labeled, non-empty group of result rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub kind: LibraryKind,
    pub heading: &'static str,
    pub rows: Vec<ResultRow>,
}

impl ResultGroup {
    /// `None` for an empty category: empty groups are hidden, never shown as "no results".
    #[must_use]
    pub fn from_items<T: PaletteEntry>(items: &[T]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            kind: T::KIND,
            heading: T::HEADING,
            rows: items.iter().map(ResultRow::from_entry).collect(),
        })
    }
}

/// Groups to render for the current input. A group shows only when the raw
/// query is non-empty, a payload exists and its category has matches.
#[must_use]
pub fn visible_groups(raw: &str, data: Option<&SearchResultSet>) -> Vec<ResultGroup> {
    let Some(data) = data else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }
    [
        ResultGroup::from_items(&data.albums),
        ResultGroup::from_items(&data.album_artists),
        ResultGroup::from_items(&data.songs),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AlbumId, ArtistId, SongId};
    use crate::domain::routes::AppRoute;

    fn artist(id: &str) -> ArtistItem {
        ArtistItem {
            id: ArtistId(id.to_string()),
            name: "Pink Floyd".to_string(),
            image_url: None,
            album_count: 3,
        }
    }

    #[test]
    fn test_only_non_empty_categories_render() {
        let data = SearchResultSet {
            albums: vec![],
            album_artists: vec![artist("ar-1")],
            songs: vec![],
        };
        let groups = visible_groups("pink", Some(&data));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading, "Artists");
        assert_eq!(groups[0].kind, LibraryKind::AlbumArtist);
        assert_eq!(groups[0].rows[0].subtitle.as_deref(), Some("3 albums"));
    }

    #[test]
    fn test_groups_hidden_without_raw_query_or_data() {
        let data = SearchResultSet {
            album_artists: vec![artist("ar-1")],
            ..Default::default()
        };
        assert!(visible_groups("", Some(&data)).is_empty());
        assert!(visible_groups("pink", None).is_empty());
        assert!(visible_groups("pink", Some(&SearchResultSet::default())).is_empty());
    }

    #[test]
    fn test_group_order_and_targets() {
        let data = SearchResultSet {
            albums: vec![AlbumItem {
                id: AlbumId("al-1".to_string()),
                name: "Animals".to_string(),
                image_url: Some("http://cover".to_string()),
                album_artists: vec!["Pink Floyd".to_string()],
            }],
            album_artists: vec![artist("ar-1")],
            songs: vec![TrackItem {
                id: SongId("so-1".to_string()),
                album_id: AlbumId("al-9".to_string()),
                name: "Dogs".to_string(),
                image_url: None,
                artists: vec!["Pink Floyd".to_string()],
            }],
        };
        let groups = visible_groups("p", Some(&data));
        let headings: Vec<_> = groups.iter().map(|g| g.heading).collect();
        assert_eq!(headings, vec!["Albums", "Artists", "Tracks"]);

        let album_row = &groups[0].rows[0];
        assert_eq!(album_row.target.route, AppRoute::LibraryAlbumsDetail);
        assert_eq!(album_row.target.param("albumId"), Some("al-1"));
        assert_eq!(album_row.image_url.as_deref(), Some("http://cover"));

        let artist_row = &groups[1].rows[0];
        assert_eq!(artist_row.target.route, AppRoute::LibraryAlbumArtistsDetail);
        assert_eq!(artist_row.target.param("albumArtistId"), Some("ar-1"));

        // Tracks navigate to the album that contains them
        let track_row = &groups[2].rows[0];
        assert_eq!(track_row.target.route, AppRoute::LibraryAlbumsDetail);
        assert_eq!(track_row.target.param("albumId"), Some("al-9"));
    }
}
