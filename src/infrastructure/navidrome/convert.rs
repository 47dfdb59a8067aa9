use super::types::{NdAlbum, NdAlbumArtist, NdSong};
use super::Session;
use crate::domain::models::{AlbumId, AlbumItem, ArtistId, ArtistItem, SongId, TrackItem};
use reqwest::Url;

const SUBSONIC_API_VERSION: &str = "1.16.1";
const CLIENT_NAME: &str = "tonearm";
const COVER_ART_SIZE: u32 = 300;

/// Subsonic cover art endpoint, authenticated with the salted token of the
/// current session.
pub(crate) fn cover_art_url(session: &Session, id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    let mut url = Url::parse(&format!("{}/rest/getCoverArt.view", session.base_url)).ok()?;
    url.query_pairs_mut()
        .append_pair("id", id)
        .append_pair("u", &session.username)
        .append_pair("s", &session.subsonic_salt)
        .append_pair("t", &session.subsonic_token)
        .append_pair("v", SUBSONIC_API_VERSION)
        .append_pair("c", CLIENT_NAME)
        .append_pair("size", &COVER_ART_SIZE.to_string());
    Some(url.into())
}

fn names(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        Vec::new()
    } else {
        vec![joined.to_string()]
    }
}

pub(crate) fn album_item(album: NdAlbum, session: &Session) -> AlbumItem {
    AlbumItem {
        image_url: cover_art_url(session, &album.id),
        album_artists: names(&album.album_artist),
        id: AlbumId(album.id),
        name: album.name,
    }
}

pub(crate) fn artist_item(artist: NdAlbumArtist) -> ArtistItem {
    let image_url = [
        artist.large_image_url,
        artist.medium_image_url,
        artist.small_image_url,
    ]
    .into_iter()
    .flatten()
    .find(|url| !url.is_empty());

    ArtistItem {
        id: ArtistId(artist.id),
        name: artist.name,
        image_url,
        album_count: artist.album_count,
    }
}

pub(crate) fn track_item(song: NdSong, session: &Session) -> TrackItem {
    let image_url = if song.has_cover_art {
        cover_art_url(session, &song.album_id)
    } else {
        None
    };
    TrackItem {
        image_url,
        artists: names(&song.artist),
        id: SongId(song.id),
        album_id: AlbumId(song.album_id),
        name: song.title,
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::fixtures;
    use super::*;

    fn session() -> Session {
        Session::fixture()
    }

    #[test]
    fn test_cover_art_url() {
        let url = cover_art_url(&session(), "al-1").unwrap();
        assert_eq!(
            url,
            "http://localhost:4533/rest/getCoverArt.view?id=al-1&u=admin&s=salt&t=tok&v=1.16.1&c=tonearm&size=300"
        );
        assert_eq!(cover_art_url(&session(), ""), None);
    }

    #[test]
    fn test_album_projection() {
        let album = serde_json::from_value(fixtures::album("al-1", "Meddle", "Pink Floyd")).unwrap();
        let item = album_item(album, &session());
        assert_eq!(item.id, AlbumId("al-1".to_string()));
        assert_eq!(item.album_artists, vec!["Pink Floyd".to_string()]);
        assert!(item.image_url.unwrap().contains("id=al-1"));
    }

    #[test]
    fn test_artist_image_fallback() {
        let artist = serde_json::from_value(fixtures::artist("ar-1", "Pink Floyd", 14)).unwrap();
        let item = artist_item(artist);
        assert_eq!(item.image_url.as_deref(), Some("https://img.example/ar-1/m.jpg"));
        assert_eq!(item.album_count, 14);
    }

    #[test]
    fn test_track_uses_album_cover() {
        let song =
            serde_json::from_value(fixtures::song("so-1", "Echoes", "al-1", "Pink Floyd")).unwrap();
        let item = track_item(song, &session());
        assert_eq!(item.name, "Echoes");
        assert_eq!(item.album_id, AlbumId("al-1".to_string()));
        assert!(item.image_url.unwrap().contains("id=al-1"));
    }
}
