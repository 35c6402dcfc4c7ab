use std::sync::Arc;

use shared::{
    library::Track,
    playlist::{ImportReport, PlaylistEntry},
    recent::RecentItem,
};

use crate::{
    config::ShelfConfig,
    error::{Result, ShelfError},
    index::MemoryIndex,
    playlist::{parse_m3u, TrackMatcher},
    recent,
    time::SystemClock,
    traits::{Clock, LibraryIndex},
};

/// Entry point bundling the library index, a clock and the configuration.
pub struct Shelf {
    index: Arc<dyn LibraryIndex>,
    clock: Arc<dyn Clock>,
    config: ShelfConfig,
}

impl Shelf {
    /// Loads the snapshot named by `config.library_path` into a [`MemoryIndex`].
    pub fn from_config(config: ShelfConfig) -> Result<Self> {
        let path = config.library_path.as_deref().ok_or(ShelfError::NotConfigured)?;
        let index = MemoryIndex::load(path)?;

        ShelfBuilder::new().index(index).config(config).build()
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn recent_items(&self, limit: usize) -> Vec<RecentItem> {
        recent::recent_items(
            self.index.as_ref(),
            self.clock.as_ref(),
            &self.config,
            limit,
        )
    }

    pub fn recent_tracks(&self, cutoff_days: u32) -> Vec<Track> {
        recent::recent_tracks(self.index.as_ref(), self.clock.as_ref(), cutoff_days)
    }

    pub fn match_entry(&self, entry: &PlaylistEntry) -> Option<Track> {
        self.matcher().match_entry(entry)
    }

    /// Parses an M3U document and resolves its entries.
    pub fn import_playlist(&self, document: &str) -> ImportReport {
        self.matcher().reconcile(parse_m3u(document))
    }

    fn matcher(&self) -> TrackMatcher<'_> {
        TrackMatcher::new(self.index.as_ref(), self.config.duration_tolerance)
    }
}

pub struct ShelfBuilder {
    index: Option<Arc<dyn LibraryIndex>>,
    clock: Option<Arc<dyn Clock>>,
    config: ShelfConfig,
}

impl ShelfBuilder {
    pub fn new() -> Self {
        Self {
            index: None,
            clock: None,
            config: ShelfConfig::default(),
        }
    }

    pub fn index(mut self, index: impl LibraryIndex + 'static) -> Self {
        self.index = Some(Arc::new(index));
        self
    }

    pub fn shared_index(mut self, index: Arc<dyn LibraryIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Defaults to the system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn config(mut self, config: ShelfConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Shelf> {
        let Some(index) = self.index else {
            return Err(ShelfError::Builder("a library index is required"));
        };
        self.config.validate()?;

        Ok(Shelf {
            index,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            config: self.config,
        })
    }
}

impl Default for ShelfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
