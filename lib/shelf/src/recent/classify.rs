use shared::{
    library::Track,
    recent::{
        RecentAlbum, RecentArtist, RecentFolder, RecentItem, RecentTrack, NEW_ALBUM, NEW_ARTIST,
        NEW_MUSIC, NEW_TRACKS,
    },
};
use std::collections::HashMap;
use tracing::debug;

use super::grouping::FolderGroup;
use crate::{
    config::ShelfConfig,
    traits::{Clock, LibraryIndex},
};

/// What a folder group turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Nothing to show, e.g. the album or artist is gone from the index
    None,
    One(RecentItem),
    /// A handful of loose tracks, shown one by one
    Many(Vec<RecentItem>),
}

impl Classification {
    pub fn into_items(self) -> Vec<RecentItem> {
        match self {
            Classification::None => Vec::new(),
            Classification::One(item) => vec![item],
            Classification::Many(items) => items,
        }
    }
}

/// Most frequent value and its count; ties go to the value seen first.
pub fn most_common<'a, I>(items: I) -> Option<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    order.into_iter().fold(None, |best, item| {
        let count = counts[item];
        match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((item, count)),
        }
    })
}

/// Decides what each folder group represents for one aggregation run.
///
/// `snapshot` is the track list the run started from; "is this new" checks
/// look only at it, so nothing leaks from one run to the next.
pub struct FolderClassifier<'a> {
    index: &'a dyn LibraryIndex,
    clock: &'a dyn Clock,
    snapshot: &'a [Track],
    threshold: f64,
    track_folder_max: usize,
}

impl<'a> FolderClassifier<'a> {
    pub fn new(
        index: &'a dyn LibraryIndex,
        clock: &'a dyn Clock,
        snapshot: &'a [Track],
        config: &ShelfConfig,
    ) -> Self {
        Self {
            index,
            clock,
            snapshot,
            threshold: config.majority_threshold,
            track_folder_max: config.track_folder_max,
        }
    }

    pub fn classify(&self, group: &FolderGroup) -> Classification {
        let total = group.tracks.len();

        if total == 0 {
            return Classification::None;
        }

        if total == 1 {
            let mut track = RecentTrack::from_track(&group.tracks[0]);
            track.time = Some(self.clock.time_passed(group.time));
            return Classification::One(RecentItem::Track(track));
        }

        let albumhashes = group.tracks.iter().map(|t| t.albumhash.as_str());
        if let Some((albumhash, _)) = self.majority(albumhashes, total) {
            return self.album_item(albumhash, group);
        }

        let artisthashes = group.tracks.iter().flat_map(|t| t.artist_hash_list());
        if let Some((artisthash, count)) = self.majority(artisthashes, total) {
            return self.artist_item(artisthash, count, group);
        }

        if total <= self.track_folder_max {
            return Classification::Many(
                group
                    .tracks
                    .iter()
                    .map(|t| RecentItem::Track(RecentTrack::from_track(t)))
                    .collect(),
            );
        }

        Classification::One(RecentItem::Folder(RecentFolder {
            path: group.folder.clone(),
            count: total,
            help_text: NEW_MUSIC.to_string(),
            time: self.clock.time_passed(group.time),
        }))
    }

    /// Most common value when it makes up at least the threshold share of `total`.
    fn majority<'i, I>(&self, items: I, total: usize) -> Option<(&'i str, usize)>
    where
        I: IntoIterator<Item = &'i str>,
    {
        let (value, count) = most_common(items)?;
        (count as f64 / total as f64 >= self.threshold).then_some((value, count))
    }

    fn album_item(&self, albumhash: &str, group: &FolderGroup) -> Classification {
        let Some(album) = self.index.album_by_hash(albumhash) else {
            debug!("Skipping {}: album {} not in index", group.folder, albumhash);
            return Classification::None;
        };

        let help_text = if self.is_new_album(albumhash, group.time) {
            NEW_ALBUM
        } else {
            NEW_TRACKS
        };

        Classification::One(RecentItem::Album(RecentAlbum::new(
            &album,
            help_text,
            self.clock.time_passed(group.time),
        )))
    }

    fn artist_item(&self, artisthash: &str, count: usize, group: &FolderGroup) -> Classification {
        let Some(artist) = self.index.artist_by_hash(artisthash) else {
            debug!("Skipping {}: artist {} not in index", group.folder, artisthash);
            return Classification::None;
        };

        let help_text = if self.is_new_artist(artisthash, group.time) {
            NEW_ARTIST
        } else {
            NEW_MUSIC
        };

        Classification::One(RecentItem::Artist(RecentArtist::new(
            &artist,
            count,
            help_text,
            self.clock.time_passed(group.time),
        )))
    }

    fn is_new_album(&self, albumhash: &str, time: i64) -> bool {
        !self
            .snapshot
            .iter()
            .any(|t| t.last_mod < time && t.albumhash == albumhash)
    }

    fn is_new_artist(&self, artisthash: &str, time: i64) -> bool {
        !self
            .snapshot
            .iter()
            .any(|t| t.last_mod < time && t.has_artist_hash(artisthash))
    }
}
