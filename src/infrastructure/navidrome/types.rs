//! Response and request bodies of the native Navidrome API.
//!
//! Fields without a default are required: a list whose items miss one fails
//! validation as a whole.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct NdAuthenticateParams<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdAuthenticate {
    pub id: String,
    pub is_admin: bool,
    pub name: String,
    pub subsonic_salt: String,
    pub subsonic_token: String,
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdUser {
    pub created_at: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id: String,
    pub is_admin: bool,
    pub last_access_at: String,
    pub last_login_at: String,
    pub name: String,
    pub updated_at: String,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NdGenre {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdAlbumArtist {
    pub album_count: u32,
    pub biography: String,
    pub external_info_updated_at: String,
    pub external_url: String,
    pub full_text: String,
    pub genres: Vec<NdGenre>,
    pub id: String,
    #[serde(default)]
    pub large_image_url: Option<String>,
    #[serde(default)]
    pub mbz_artist_id: Option<String>,
    #[serde(default)]
    pub medium_image_url: Option<String>,
    pub name: String,
    pub order_artist_name: String,
    pub play_count: u64,
    pub play_date: String,
    pub rating: u32,
    pub size: u64,
    #[serde(default)]
    pub small_image_url: Option<String>,
    pub song_count: u32,
    pub starred: bool,
    pub starred_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdAlbum {
    pub album_artist: String,
    pub album_artist_id: String,
    pub all_artist_ids: String,
    pub artist: String,
    pub artist_id: String,
    pub compilation: bool,
    // Only sent by servers older than v0.48.0
    #[serde(default)]
    pub cover_art_id: Option<String>,
    #[serde(default)]
    pub cover_art_path: Option<String>,
    pub created_at: String,
    pub duration: f64,
    pub full_text: String,
    pub genre: String,
    pub genres: Vec<NdGenre>,
    pub id: String,
    pub max_year: i32,
    #[serde(default)]
    pub mbz_album_artist_id: Option<String>,
    #[serde(default)]
    pub mbz_album_id: Option<String>,
    pub min_year: i32,
    pub name: String,
    pub order_album_artist_name: String,
    pub order_album_name: String,
    pub play_count: u64,
    pub play_date: String,
    #[serde(default)]
    pub rating: Option<u32>,
    pub size: u64,
    pub song_count: u32,
    pub sort_album_artist_name: String,
    pub sort_artist_name: String,
    pub starred: bool,
    #[serde(default)]
    pub starred_at: Option<String>,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdSong {
    pub album: String,
    pub album_artist: String,
    pub album_artist_id: String,
    pub album_id: String,
    pub artist: String,
    pub artist_id: String,
    pub bit_rate: u32,
    pub bookmark_position: u64,
    #[serde(default)]
    pub bpm: Option<u32>,
    #[serde(default)]
    pub channels: Option<u32>,
    #[serde(default)]
    pub comment: Option<String>,
    pub compilation: bool,
    pub created_at: String,
    pub disc_number: u32,
    pub duration: f64,
    pub full_text: String,
    pub genre: String,
    pub genres: Vec<NdGenre>,
    pub has_cover_art: bool,
    pub id: String,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub mbz_album_artist_id: Option<String>,
    #[serde(default)]
    pub mbz_album_id: Option<String>,
    #[serde(default)]
    pub mbz_artist_id: Option<String>,
    #[serde(default)]
    pub mbz_track_id: Option<String>,
    pub order_album_artist_name: String,
    pub order_album_name: String,
    pub order_artist_name: String,
    pub order_title: String,
    pub path: String,
    pub play_count: u64,
    pub play_date: String,
    #[serde(default)]
    pub rating: Option<u32>,
    pub size: u64,
    pub sort_album_artist_name: String,
    pub sort_artist_name: String,
    pub starred: bool,
    #[serde(default)]
    pub starred_at: Option<String>,
    pub suffix: String,
    pub title: String,
    pub track_number: u32,
    pub updated_at: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdPlaylist {
    pub comment: String,
    pub created_at: String,
    pub duration: f64,
    pub evaluated_at: String,
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub owner_name: String,
    pub path: String,
    pub public: bool,
    pub rules: String,
    pub size: u64,
    pub song_count: u32,
    pub sync: bool,
    pub updated_at: String,
}

/// A playlist entry: the playlist fields plus the linked media file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdPlaylistSong {
    #[serde(flatten)]
    pub playlist: NdPlaylist,
    pub media_file_id: String,
    pub playlist_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NdCreatePlaylist {
    pub id: String,
}

/// An update answers with the whole playlist.
pub type NdUpdatePlaylist = NdPlaylist;

/// The server answers a delete with a bare `null`.
pub type NdDeletePlaylist = ();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NdAddToPlaylist {
    pub added: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NdRemoveFromPlaylist {
    pub ids: Vec<String>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_schema() {
        let album: NdAlbum =
            serde_json::from_value(fixtures::album("al-1", "Meddle", "Pink Floyd")).unwrap();
        assert_eq!(album.name, "Meddle");
        assert_eq!(album.album_artist, "Pink Floyd");
        assert!(album.cover_art_id.is_none());
        assert_eq!(album.genres[0].name, "Rock");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut value = fixtures::song("so-1", "Echoes", "al-1", "Pink Floyd");
        value.as_object_mut().unwrap().remove("albumId");
        assert!(serde_json::from_value::<NdSong>(value).is_err());
    }

    #[test]
    fn test_authenticate_schema() {
        let auth: NdAuthenticate = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "isAdmin": true,
            "name": "Admin",
            "subsonicSalt": "abc",
            "subsonicToken": "def",
            "token": "jwt",
            "username": "admin"
        }))
        .unwrap();
        assert_eq!(auth.subsonic_salt, "abc");
        assert!(auth.is_admin);
    }

    fn playlist_json() -> serde_json::Value {
        serde_json::json!({
            "comment": "",
            "createdAt": "2024-01-01T00:00:00Z",
            "duration": 3600.0,
            "evaluatedAt": "",
            "id": "pl-1",
            "name": "Late night",
            "ownerId": "u-1",
            "ownerName": "admin",
            "path": "",
            "public": false,
            "rules": "",
            "size": 1024,
            "songCount": 12,
            "sync": false,
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_playlist_song_extends_playlist() {
        let mut value = playlist_json();
        let object = value.as_object_mut().unwrap();
        object.insert("mediaFileId".into(), "so-1".into());
        object.insert("playlistId".into(), "pl-1".into());

        let entry: NdPlaylistSong = serde_json::from_value(value).unwrap();
        assert_eq!(entry.playlist.name, "Late night");
        assert_eq!(entry.media_file_id, "so-1");

        assert!(serde_json::from_value::<NdPlaylistSong>(playlist_json()).is_err());
    }

    #[test]
    fn test_playlist_mutation_responses() {
        assert!(serde_json::from_str::<NdDeletePlaylist>("null").is_ok());
        let added: NdAddToPlaylist = serde_json::from_str(r#"{"added":3}"#).unwrap();
        assert_eq!(added.added, 3);
        let removed: NdRemoveFromPlaylist =
            serde_json::from_str(r#"{"ids":["a","b"]}"#).unwrap();
        assert_eq!(removed.ids.len(), 2);
        let updated: NdUpdatePlaylist = serde_json::from_value(playlist_json()).unwrap();
        assert_eq!(updated.song_count, 12);
        let created: NdCreatePlaylist = serde_json::from_str(r#"{"id":"pl-9"}"#).unwrap();
        assert_eq!(created.id, "pl-9");
    }

    #[test]
    fn test_user_email_is_optional() {
        let user: NdUser = serde_json::from_value(serde_json::json!({
            "createdAt": "2024-01-01T00:00:00Z",
            "id": "u-1",
            "isAdmin": false,
            "lastAccessAt": "",
            "lastLoginAt": "",
            "name": "Guest",
            "updatedAt": "2024-01-01T00:00:00Z",
            "userName": "guest"
        }))
        .unwrap();
        assert!(user.email.is_none());
        assert_eq!(user.user_name, "guest");
    }
}
