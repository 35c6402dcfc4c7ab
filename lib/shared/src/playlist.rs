use serde::{Deserialize, Serialize};

use crate::library::Track;

/// A single `#EXTINF` entry read from an extended M3U playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Duration in seconds
    pub duration: u32,
    pub artist: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_path: Option<String>,
    /// Always false after parsing; set by import workflows that check the disk
    #[serde(default)]
    pub file_exists: bool,
}

/// Outcome of resolving a whole playlist against the library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub matched: Vec<Track>,
    pub unresolved: Vec<PlaylistEntry>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unresolved.len()
    }
}
