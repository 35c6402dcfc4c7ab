use shared::library::{Album, Artist, Track};

use crate::time;

/// Read-only view of the library.
///
/// Implementations return whatever their current snapshot holds; callers make
/// no consistency assumptions across separate calls.
pub trait LibraryIndex: Send + Sync {
    fn album_by_hash(&self, albumhash: &str) -> Option<Album>;
    fn artist_by_hash(&self, artisthash: &str) -> Option<Artist>;

    /// Tracks whose file name (without directories and extension) equals `name`.
    fn tracks_by_filename(&self, name: &str) -> Vec<Track>;

    /// Tracks whose title equals `title` exactly.
    fn tracks_by_title(&self, title: &str) -> Vec<Track>;

    fn all_tracks(&self) -> Vec<Track>;
}

/// Source of "now" plus the time helpers the feed needs.
pub trait Clock: Send + Sync {
    /// Current unix timestamp in seconds.
    fn now(&self) -> i64;

    fn timestamp_from_days_ago(&self, days: u32) -> i64 {
        time::timestamp_from_days_ago(self.now(), days)
    }

    /// Human readable distance between now and `timestamp`, e.g. "3 days ago".
    fn time_passed(&self, timestamp: i64) -> String {
        time::time_passed(self.now(), timestamp)
    }
}
