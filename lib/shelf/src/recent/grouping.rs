use itertools::Itertools;
use shared::library::Track;

/// Tracks sharing a folder, newest modification first.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderGroup {
    pub folder: String,
    pub tracks: Vec<Track>,
    /// Largest `last_mod` among the tracks
    pub time: i64,
}

/// Partitions tracks into per-folder groups, most recently touched folder first.
///
/// Sorting is stable throughout: tracks with equal `last_mod` keep their input
/// order inside a group, and groups with equal `time` keep folder order.
pub fn group_tracks_by_folder(mut tracks: Vec<Track>) -> impl Iterator<Item = FolderGroup> {
    tracks.sort_by(|a, b| a.folder.cmp(&b.folder));

    let runs = tracks.into_iter().chunk_by(|t| t.folder.clone());
    let mut groups: Vec<FolderGroup> = runs
        .into_iter()
        .map(|(folder, run)| {
            let mut tracks: Vec<Track> = run.collect();
            tracks.sort_by(|a, b| b.last_mod.cmp(&a.last_mod));
            let time = tracks.first().map(|t| t.last_mod).unwrap_or_default();

            FolderGroup {
                folder,
                tracks,
                time,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.time.cmp(&a.time));
    groups.into_iter()
}
