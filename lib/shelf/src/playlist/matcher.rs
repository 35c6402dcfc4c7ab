use shared::{
    library::{bare_filename, Track},
    playlist::{ImportReport, PlaylistEntry},
};
use tracing::{debug, info};

use crate::traits::LibraryIndex;

/// Result of looking an entry up by its file name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FilenameMatch {
    /// The entry has no file path
    Skipped,
    Matched(Track),
    /// Same file name and artist, but the durations are too far apart
    Candidates(Vec<Track>),
}

/// Resolves playlist entries to library tracks.
///
/// A candidate is accepted when one of its artists matches the entry's artist
/// (ignoring case) and the durations differ by at most `duration_tolerance`
/// seconds. File names are tried first, then titles.
pub struct TrackMatcher<'a> {
    index: &'a dyn LibraryIndex,
    duration_tolerance: u32,
}

impl<'a> TrackMatcher<'a> {
    pub fn new(index: &'a dyn LibraryIndex, duration_tolerance: u32) -> Self {
        Self {
            index,
            duration_tolerance,
        }
    }

    pub fn match_entry(&self, entry: &PlaylistEntry) -> Option<Track> {
        match self.match_filename(entry) {
            FilenameMatch::Matched(track) => return Some(track),
            FilenameMatch::Candidates(candidates) => debug!(
                "{} file name candidates for {} - {} failed the duration check",
                candidates.len(),
                entry.artist,
                entry.title
            ),
            FilenameMatch::Skipped => {}
        }

        self.match_title(entry)
    }

    /// Resolves every entry, keeping the ones without a match aside.
    pub fn reconcile(&self, entries: Vec<PlaylistEntry>) -> ImportReport {
        let mut report = ImportReport::default();

        for entry in entries {
            match self.match_entry(&entry) {
                Some(track) => report.matched.push(track),
                None => {
                    debug!("No library match for {} - {}", entry.artist, entry.title);
                    report.unresolved.push(entry);
                }
            }
        }

        info!(
            "Matched {}/{} playlist entries",
            report.matched.len(),
            report.total()
        );

        report
    }

    pub(crate) fn match_filename(&self, entry: &PlaylistEntry) -> FilenameMatch {
        let Some(file_path) = entry.file_path.as_deref() else {
            return FilenameMatch::Skipped;
        };

        let mut candidates = Vec::new();

        for track in self.index.tracks_by_filename(&bare_filename(file_path)) {
            if !track.has_artist_named(&entry.artist) {
                continue;
            }
            if self.duration_matches(entry, &track) {
                return FilenameMatch::Matched(track);
            }
            candidates.push(track);
        }

        FilenameMatch::Candidates(candidates)
    }

    /// Only the first title match credited to the artist is considered.
    pub(crate) fn match_title(&self, entry: &PlaylistEntry) -> Option<Track> {
        let track = self
            .index
            .tracks_by_title(&entry.title)
            .into_iter()
            .find(|t| t.has_artist_named(&entry.artist))?;

        self.duration_matches(entry, &track).then_some(track)
    }

    fn duration_matches(&self, entry: &PlaylistEntry, track: &Track) -> bool {
        entry.duration.abs_diff(track.duration) <= self.duration_tolerance
    }
}
