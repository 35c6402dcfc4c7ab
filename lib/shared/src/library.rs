use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Separator used to join a track's artist hashes into a single string
pub const ARTIST_HASH_SEPARATOR: char = '-';

/// Reference to an artist as stored on tracks and albums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub name: String,
    pub artisthash: String,
}

impl ArtistRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            artisthash: create_hash(&[name]),
        }
    }
}

/// A track from the library index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub trackhash: String,
    pub title: String,
    pub album: String,
    pub albumhash: String,
    pub artists: Vec<ArtistRef>,
    /// Artist hashes joined with [`ARTIST_HASH_SEPARATOR`]
    pub artist_hashes: String,
    pub folder: String,
    pub filepath: String,
    /// Duration in seconds
    pub duration: u32,
    pub created_date: i64,
    pub last_mod: i64,
    #[serde(default)]
    pub image: String,
}

impl Track {
    /// File name without its directories and extension.
    pub fn filename(&self) -> String {
        bare_filename(&self.filepath)
    }

    /// Individual artist hashes, in stored order.
    pub fn artist_hash_list(&self) -> impl Iterator<Item = &str> {
        self.artist_hashes
            .split(ARTIST_HASH_SEPARATOR)
            .filter(|h| !h.is_empty())
    }

    pub fn has_artist_hash(&self, artisthash: &str) -> bool {
        self.artist_hash_list().any(|h| h == artisthash)
    }

    /// Case-insensitive check against the track's artist names.
    pub fn has_artist_named(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.artists.iter().any(|a| a.name.to_lowercase() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub albumhash: String,
    pub title: String,
    pub albumartists: Vec<ArtistRef>,
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub base_title: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub artisthash: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub trackcount: usize,
    #[serde(default)]
    pub albumcount: usize,
    #[serde(default)]
    pub duration: u32,
}

/// Stable short hash of the given strings.
///
/// Parts are concatenated, lowercased and stripped of everything that is not
/// alphanumeric before hashing, so `"The Band"` and `"the band"` collide on
/// purpose. The last 10 hex digits of the SHA-256 digest are kept.
pub fn create_hash(parts: &[&str]) -> String {
    let normalized: String = parts
        .concat()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    let digest = format!("{:x}", Sha256::digest(normalized.as_bytes()));
    digest[digest.len() - 10..].to_string()
}

/// Strips directories and the extension from a path, accepting both `/` and `\`.
pub fn bare_filename(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    Path::new(&normalized)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string()
}
