//! Fixtures shared by unit tests.

use shared::library::{Album, Artist, ArtistRef, Track, ARTIST_HASH_SEPARATOR};

use crate::index::MemoryIndex;

/// Track whose artist names equal their hashes, created when last modified.
pub(crate) fn track(
    id: &str,
    folder: &str,
    albumhash: &str,
    artisthashes: &[&str],
    last_mod: i64,
) -> Track {
    Track {
        trackhash: id.to_string(),
        title: id.to_string(),
        album: albumhash.to_string(),
        albumhash: albumhash.to_string(),
        artists: artisthashes
            .iter()
            .map(|h| ArtistRef {
                name: h.to_string(),
                artisthash: h.to_string(),
            })
            .collect(),
        artist_hashes: artisthashes.join(&ARTIST_HASH_SEPARATOR.to_string()),
        folder: folder.to_string(),
        filepath: format!("{folder}/{id}.mp3"),
        duration: 200,
        created_date: last_mod,
        last_mod,
        image: String::new(),
    }
}

pub(crate) fn album(albumhash: &str) -> Album {
    Album {
        albumhash: albumhash.to_string(),
        title: format!("Album {albumhash}"),
        albumartists: vec![],
        date: 0,
        duration: 0,
        count: 0,
        genres: vec![],
        og_title: String::new(),
        base_title: String::new(),
        image: String::new(),
    }
}

pub(crate) fn artist(artisthash: &str) -> Artist {
    Artist {
        artisthash: artisthash.to_string(),
        name: format!("Artist {artisthash}"),
        image: String::new(),
        trackcount: 0,
        albumcount: 0,
        duration: 0,
    }
}

/// Index over `tracks` knowing the given albums and artists.
pub(crate) fn index(tracks: Vec<Track>, albums: &[&str], artists: &[&str]) -> MemoryIndex {
    MemoryIndex::new(
        tracks,
        albums.iter().map(|h| album(h)).collect(),
        artists.iter().map(|h| artist(h)).collect(),
    )
}
