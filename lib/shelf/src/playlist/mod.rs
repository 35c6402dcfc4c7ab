//! Playlist import: M3U parsing and matching entries against the library.

mod m3u;
mod matcher;

pub use m3u::parse_m3u;
pub use matcher::TrackMatcher;
