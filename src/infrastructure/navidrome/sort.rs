use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlbumListSort {
    #[serde(rename = "albumArtist")]
    AlbumArtist,
    #[serde(rename = "artist")]
    Artist,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "playCount")]
    PlayCount,
    #[serde(rename = "play_date")]
    PlayDate,
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "recently_added")]
    RecentlyAdded,
    #[serde(rename = "songCount")]
    SongCount,
    #[serde(rename = "starred")]
    Starred,
    #[serde(rename = "max_year")]
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlbumArtistListSort {
    #[serde(rename = "albumCount")]
    AlbumCount,
    #[serde(rename = "starred ASC, starredAt ASC")]
    Favorited,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "playCount")]
    PlayCount,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "songCount")]
    SongCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SongListSort {
    #[serde(rename = "album, order_album_artist_name, disc_number, track_number, title")]
    Album,
    #[serde(rename = "order_album_artist_name, album, disc_number, track_number, title")]
    AlbumArtist,
    #[serde(rename = "album, discNumber, trackNumber")]
    AlbumSongs,
    #[serde(rename = "artist")]
    Artist,
    #[serde(rename = "bpm")]
    Bpm,
    #[serde(rename = "channels")]
    Channels,
    #[serde(rename = "comment")]
    Comment,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "starred ASC, starredAt ASC")]
    Favorited,
    #[serde(rename = "genre")]
    Genre,
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "playCount")]
    PlayCount,
    #[serde(rename = "playDate")]
    PlayDate,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "createdAt")]
    RecentlyAdded,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "track")]
    Track,
    #[serde(rename = "year, album, discNumber, trackNumber")]
    Year,
}
