//! The "recently added" feed.
//!
//! Tracks are grouped by folder, each folder is classified as a track, album,
//! artist or plain folder, and the first `limit` distinct results are kept.

mod classify;
mod grouping;

pub use classify::{most_common, Classification, FolderClassifier};
pub use grouping::{group_tracks_by_folder, FolderGroup};

use shared::{library::Track, recent::RecentItem};
use tracing::{debug, info};

use crate::{
    config::ShelfConfig,
    traits::{Clock, LibraryIndex},
};

/// Builds the recently added feed from the current index snapshot.
pub fn recent_items(
    index: &dyn LibraryIndex,
    clock: &dyn Clock,
    config: &ShelfConfig,
    limit: usize,
) -> Vec<RecentItem> {
    let mut tracks = index.all_tracks();
    tracks.sort_by_key(|t| t.created_date);

    let classifier = FolderClassifier::new(index, clock, &tracks, config);
    let mut items: Vec<RecentItem> = Vec::new();

    for group in group_tracks_by_folder(tracks.clone()) {
        if items.len() >= limit {
            break;
        }

        for item in classifier.classify(&group).into_items() {
            if items.len() >= limit {
                break;
            }
            if items.contains(&item) {
                debug!("Dropping duplicate entry from {}", group.folder);
                continue;
            }
            items.push(item);
        }
    }

    info!(
        "Built recently added feed: {} items from {} tracks",
        items.len(),
        tracks.len()
    );

    items
}

/// Tracks created within the last `cutoff_days`, newest first.
pub fn recent_tracks(index: &dyn LibraryIndex, clock: &dyn Clock, cutoff_days: u32) -> Vec<Track> {
    let cutoff = clock.timestamp_from_days_ago(cutoff_days);

    let mut tracks: Vec<Track> = index
        .all_tracks()
        .into_iter()
        .filter(|t| t.created_date > cutoff)
        .collect();
    tracks.sort_by(|a, b| b.created_date.cmp(&a.created_date));

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::{index, track},
        time::FixedClock,
    };

    const NOW: i64 = 10_000_000;
    const DAY: i64 = 86_400;

    fn feed(
        tracks: Vec<Track>,
        albums: &[&str],
        artists: &[&str],
        limit: usize,
    ) -> Vec<RecentItem> {
        let index = index(tracks, albums, artists);
        recent_items(&index, &FixedClock(NOW), &ShelfConfig::default(), limit)
    }

    fn kind(item: &RecentItem) -> &'static str {
        match item {
            RecentItem::Track(_) => "track",
            RecentItem::Album(_) => "album",
            RecentItem::Artist(_) => "artist",
            RecentItem::Folder(_) => "folder",
        }
    }

    fn library() -> Vec<Track> {
        vec![
            // album folder, touched most recently
            track("a1", "/music/album", "alb", &["x"], NOW - 10),
            track("a2", "/music/album", "alb", &["x"], NOW - 10),
            track("a3", "/music/album", "alb", &["x"], NOW - 10),
            // single track
            track("s1", "/music/single", "s", &["s"], NOW - DAY),
            // loose pair
            track("p1", "/music/pair", "p1", &["p1"], NOW - 2 * DAY),
            track("p2", "/music/pair", "p2", &["p2"], NOW - 2 * DAY),
            // mixed folder
            track("m1", "/music/mixed", "m1", &["m1"], NOW - 3 * DAY),
            track("m2", "/music/mixed", "m2", &["m2"], NOW - 3 * DAY),
            track("m3", "/music/mixed", "m3", &["m3"], NOW - 3 * DAY),
        ]
    }

    #[test]
    fn feed_follows_folder_recency() {
        let items = feed(library(), &["alb"], &[], 7);

        let kinds: Vec<&str> = items.iter().map(kind).collect();
        assert_eq!(kinds, vec!["album", "track", "track", "track", "folder"]);
    }

    #[test]
    fn limit_cuts_through_loose_tracks() {
        let items = feed(library(), &["alb"], &[], 3);

        assert_eq!(items.len(), 3);
        let kinds: Vec<&str> = items.iter().map(kind).collect();
        assert_eq!(kinds, vec!["album", "track", "track"]);
    }

    #[test]
    fn empty_library_and_zero_limit_give_nothing() {
        assert!(feed(Vec::new(), &[], &[], 7).is_empty());
        assert!(feed(library(), &["alb"], &[], 0).is_empty());
    }

    #[test]
    fn unresolved_folders_are_skipped() {
        let items = feed(library(), &[], &[], 7);

        let kinds: Vec<&str> = items.iter().map(kind).collect();
        assert_eq!(kinds, vec!["track", "track", "track", "folder"]);
    }

    #[test]
    fn same_album_in_two_folders_shows_once() {
        let tracks = vec![
            track("a1", "/music/cd1", "alb", &["x"], NOW - 10),
            track("a2", "/music/cd1", "alb", &["x"], NOW - 10),
            track("b1", "/music/cd2", "alb", &["x"], NOW - 10),
            track("b2", "/music/cd2", "alb", &["x"], NOW - 10),
        ];

        let items = feed(tracks, &["alb"], &[], 7);
        assert_eq!(items.len(), 1);
        assert_eq!(kind(&items[0]), "album");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let index = index(library(), &["alb"], &[]);
        let clock = FixedClock(NOW);
        let config = ShelfConfig::default();

        let first = recent_items(&index, &clock, &config, 7);
        let second = recent_items(&index, &clock, &config, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn recent_tracks_respects_cutoff_and_orders_newest_first() {
        let index = index(library(), &[], &[]);

        let tracks = recent_tracks(&index, &FixedClock(NOW), 2);
        let ids: Vec<&str> = tracks.iter().map(|t| t.trackhash.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3", "s1"]);

        assert!(recent_tracks(&index, &FixedClock(NOW), 0).is_empty());
    }
}
