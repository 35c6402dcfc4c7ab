pub mod config;
pub mod error;
pub mod index;
pub mod playlist;
pub mod recent;
pub mod shelf;
pub mod time;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::ShelfConfig;
pub use error::{Result, ShelfError};
pub use index::{LibrarySnapshot, MemoryIndex, TagRecord};
pub use playlist::{parse_m3u, TrackMatcher};
pub use recent::{recent_items, recent_tracks, Classification, FolderClassifier};
pub use shelf::{Shelf, ShelfBuilder};
pub use time::{FixedClock, SystemClock};
pub use traits::{Clock, LibraryIndex};
