use serde::{Deserialize, Serialize};

use crate::library::{Album, Artist, ArtistRef, Track};

pub const NEW_TRACK: &str = "NEW TRACK";
pub const NEW_ALBUM: &str = "NEW ALBUM";
pub const NEW_TRACKS: &str = "NEW TRACKS";
pub const NEW_ARTIST: &str = "NEW ARTIST";
pub const NEW_MUSIC: &str = "NEW MUSIC";

/// One entry of the "recently added" feed.
///
/// Serialized as `{"type": "album", "item": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum RecentItem {
    Track(RecentTrack),
    Album(RecentAlbum),
    Artist(RecentArtist),
    Folder(RecentFolder),
}

/// Track card. Carries everything from [`Track`] except `created_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTrack {
    pub trackhash: String,
    pub title: String,
    pub album: String,
    pub albumhash: String,
    pub artists: Vec<ArtistRef>,
    pub folder: String,
    pub filepath: String,
    pub duration: u32,
    pub last_mod: i64,
    pub image: String,
    pub help_text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<String>,
}

impl RecentTrack {
    pub fn from_track(track: &Track) -> Self {
        Self {
            trackhash: track.trackhash.clone(),
            title: track.title.clone(),
            album: track.album.clone(),
            albumhash: track.albumhash.clone(),
            artists: track.artists.clone(),
            folder: track.folder.clone(),
            filepath: track.filepath.clone(),
            duration: track.duration,
            last_mod: track.last_mod,
            image: track.image.clone(),
            help_text: NEW_TRACK.to_string(),
            time: None,
        }
    }
}

/// Album card without genres, dates, durations, counts or title variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentAlbum {
    pub albumhash: String,
    pub title: String,
    pub albumartists: Vec<ArtistRef>,
    pub image: String,
    pub help_text: String,
    pub time: String,
}

impl RecentAlbum {
    pub fn new(album: &Album, help_text: &str, time: String) -> Self {
        Self {
            albumhash: album.albumhash.clone(),
            title: album.title.clone(),
            albumartists: album.albumartists.clone(),
            image: album.image.clone(),
            help_text: help_text.to_string(),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentArtist {
    pub artisthash: String,
    pub name: String,
    pub image: String,
    /// Number of tracks in the folder credited to this artist
    pub trackcount: usize,
    pub help_text: String,
    pub time: String,
}

impl RecentArtist {
    pub fn new(artist: &Artist, trackcount: usize, help_text: &str, time: String) -> Self {
        Self {
            artisthash: artist.artisthash.clone(),
            name: artist.name.clone(),
            image: artist.image.clone(),
            trackcount,
            help_text: help_text.to_string(),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFolder {
    pub path: String,
    pub count: usize,
    pub help_text: String,
    pub time: String,
}
