use itertools::Itertools;
use serde::{Deserialize, Serialize};
use shared::library::{create_hash, Album, Artist, ArtistRef, Track, ARTIST_HASH_SEPARATOR};
use std::{collections::HashMap, path::Path};
use tracing::info;

use crate::{
    error::{Result, ShelfError},
    traits::LibraryIndex,
};

/// Serialized form of a library, as exported by the indexer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Raw tag row, before hashes and album/artist records exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRecord {
    pub filepath: String,
    pub title: String,
    pub album: String,
    pub artists: Vec<String>,
    #[serde(default)]
    pub albumartists: Vec<String>,
    pub duration: u32,
    pub created_date: i64,
    pub last_mod: i64,
}

/// In-memory [`LibraryIndex`] over an owned snapshot.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    tracks: Vec<Track>,
    albums: HashMap<String, Album>,
    artists: HashMap<String, Artist>,
    by_filename: HashMap<String, Vec<usize>>,
    by_title: HashMap<String, Vec<usize>>,
}

impl MemoryIndex {
    pub fn new(tracks: Vec<Track>, albums: Vec<Album>, artists: Vec<Artist>) -> Self {
        let mut by_filename: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, track) in tracks.iter().enumerate() {
            by_filename.entry(track.filename()).or_default().push(i);
            by_title.entry(track.title.clone()).or_default().push(i);
        }

        Self {
            tracks,
            albums: albums
                .into_iter()
                .map(|a| (a.albumhash.clone(), a))
                .collect(),
            artists: artists
                .into_iter()
                .map(|a| (a.artisthash.clone(), a))
                .collect(),
            by_filename,
            by_title,
        }
    }

    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self::new(snapshot.tracks, snapshot.albums, snapshot.artists)
    }

    /// Read a JSON [`LibrarySnapshot`] from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ShelfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: LibrarySnapshot = serde_json::from_str(&raw)?;

        info!(
            "Loaded library snapshot from {:?}: {} tracks, {} albums, {} artists",
            path,
            snapshot.tracks.len(),
            snapshot.albums.len(),
            snapshot.artists.len()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Build the index from raw tag rows, deriving hashes and album/artist records.
    pub fn from_tags(records: Vec<TagRecord>) -> Self {
        let rows: Vec<(Track, Vec<ArtistRef>)> =
            records.into_iter().map(track_from_tags).collect();

        let albums = rows
            .iter()
            .into_group_map_by(|(t, _)| t.albumhash.clone())
            .into_iter()
            .map(|(albumhash, rows)| {
                let (first, albumartists) = rows[0];
                Album {
                    title: first.album.clone(),
                    albumartists: albumartists.clone(),
                    date: rows.iter().map(|(t, _)| t.created_date).min().unwrap_or_default(),
                    duration: rows.iter().map(|(t, _)| t.duration).sum(),
                    count: rows.len(),
                    genres: Vec::new(),
                    og_title: first.album.clone(),
                    base_title: first.album.clone(),
                    image: format!("{albumhash}.webp"),
                    albumhash,
                }
            })
            .collect();

        let tracks: Vec<Track> = rows.into_iter().map(|(t, _)| t).collect();

        let artists = tracks
            .iter()
            .flat_map(|t| t.artists.iter().map(move |a| (a, t)))
            .into_group_map_by(|(a, _)| a.artisthash.clone())
            .into_iter()
            .map(|(artisthash, credits)| Artist {
                name: credits[0].0.name.clone(),
                image: format!("{artisthash}.webp"),
                trackcount: credits.len(),
                albumcount: credits.iter().map(|(_, t)| &t.albumhash).unique().count(),
                duration: credits.iter().map(|(_, t)| t.duration).sum(),
                artisthash,
            })
            .collect();

        Self::new(tracks, albums, artists)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn collect(&self, indices: Option<&Vec<usize>>) -> Vec<Track> {
        indices
            .map(|ids| ids.iter().map(|&i| self.tracks[i].clone()).collect())
            .unwrap_or_default()
    }
}

impl LibraryIndex for MemoryIndex {
    fn album_by_hash(&self, albumhash: &str) -> Option<Album> {
        self.albums.get(albumhash).cloned()
    }

    fn artist_by_hash(&self, artisthash: &str) -> Option<Artist> {
        self.artists.get(artisthash).cloned()
    }

    fn tracks_by_filename(&self, name: &str) -> Vec<Track> {
        self.collect(self.by_filename.get(name))
    }

    fn tracks_by_title(&self, title: &str) -> Vec<Track> {
        self.collect(self.by_title.get(title))
    }

    fn all_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}

fn track_from_tags(record: TagRecord) -> (Track, Vec<ArtistRef>) {
    let artists: Vec<ArtistRef> = record.artists.iter().map(|a| ArtistRef::new(a)).collect();
    let albumartist_names = if record.albumartists.is_empty() {
        &record.artists
    } else {
        &record.albumartists
    };
    let albumartists: Vec<ArtistRef> =
        albumartist_names.iter().map(|a| ArtistRef::new(a)).collect();

    let albumhash = create_hash(&[
        record.album.as_str(),
        albumartist_names.join(",").as_str(),
    ]);
    let trackhash = create_hash(&[
        record.artists.join(",").as_str(),
        record.album.as_str(),
        record.title.as_str(),
    ]);
    let folder = Path::new(&record.filepath.replace('\\', "/"))
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();

    let track = Track {
        image: format!("{albumhash}.webp"),
        artist_hashes: artists
            .iter()
            .map(|a| a.artisthash.as_str())
            .join(&ARTIST_HASH_SEPARATOR.to_string()),
        trackhash,
        title: record.title,
        album: record.album,
        albumhash,
        artists,
        folder,
        filepath: record.filepath,
        duration: record.duration,
        created_date: record.created_date,
        last_mod: record.last_mod,
    };

    (track, albumartists)
}
