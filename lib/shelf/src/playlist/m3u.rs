use regex::Regex;
use shared::playlist::PlaylistEntry;
use std::sync::LazyLock;
use tracing::debug;

static RE_ENTRY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#EXTINF:").unwrap());

// 419,Alice in Chains - Rotten Apple
// Alice in Chains_Jar of Flies_01_Rotten Apple.mp3
//
// The path line is optional (streaming exports often omit it) and directive
// lines such as `#EXTALB:` may sit between the info line and the path.
static RE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<duration>\d+)?,(?P<artist>[^\r\n]+?)? - (?P<title>[^\r\n]+)?\r?(?:\n(?:#[^\r\n]*\r?\n)*(?P<file_path>[^#\r\n][^\r\n]*))?",
    )
    .unwrap()
});

/// Parses an extended M3U document into its entries.
///
/// Chunks missing a duration, artist or title are dropped; the rest come back
/// in document order with `file_exists` unset.
pub fn parse_m3u(document: &str) -> Vec<PlaylistEntry> {
    // everything before the first marker is the header
    let entries: Vec<PlaylistEntry> = RE_ENTRY_MARKER
        .split(document)
        .skip(1)
        .filter_map(|chunk| {
            let entry = parse_entry(chunk);
            if entry.is_none() {
                debug!("Dropping malformed playlist entry: {:?}", chunk.trim());
            }
            entry
        })
        .collect();

    debug!("Parsed {} playlist entries", entries.len());
    entries
}

fn parse_entry(chunk: &str) -> Option<PlaylistEntry> {
    let captures = RE_ENTRY.captures(chunk)?;

    let duration = captures.name("duration")?.as_str().parse().ok()?;
    let artist = non_empty(captures.name("artist")?.as_str())?;
    let title = non_empty(captures.name("title")?.as_str())?;
    let file_path = captures
        .name("file_path")
        .and_then(|m| non_empty(m.as_str()));

    Some(PlaylistEntry {
        duration,
        artist,
        title,
        file_path,
        file_exists: false,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entry_with_file_path() {
        let doc = "#EXTM3U\n\
                   #EXTINF:419,Alice in Chains - Rotten Apple\n\
                   Alice in Chains_Jar of Flies_01_Rotten Apple.mp3";

        let entries = parse_m3u(doc);

        assert_eq!(
            entries,
            vec![PlaylistEntry {
                duration: 419,
                artist: "Alice in Chains".into(),
                title: "Rotten Apple".into(),
                file_path: Some("Alice in Chains_Jar of Flies_01_Rotten Apple.mp3".into()),
                file_exists: false,
            }]
        );
    }

    #[test]
    fn parses_entry_without_file_path() {
        let entries = parse_m3u("#EXTM3U\n#EXTINF:200,Artist X - Song Y");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration, 200);
        assert_eq!(entries[0].artist, "Artist X");
        assert_eq!(entries[0].title, "Song Y");
        assert_eq!(entries[0].file_path, None);
    }

    #[test]
    fn splits_artist_at_first_separator() {
        let entries = parse_m3u("#EXTM3U\n#EXTINF:180,Artist - Song - Live\n");

        assert_eq!(entries[0].artist, "Artist");
        assert_eq!(entries[0].title, "Song - Live");
        assert_eq!(entries[0].file_path, None);
    }

    #[test]
    fn drops_entries_missing_mandatory_fields() {
        let doc = "#EXTM3U\n\
                   #EXTINF:,Nobody - No Duration\nno_duration.mp3\n\
                   #EXTINF:120,No Separator Here\nno_separator.mp3\n\
                   #EXTINF:abc,Artist - Bad Duration\n\
                   #EXTINF:240,Good - Entry\ngood.mp3\n";

        let entries = parse_m3u(doc);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Entry");
        assert_eq!(entries[0].file_path.as_deref(), Some("good.mp3"));
    }

    #[test]
    fn handles_crlf_and_directives() {
        let doc = "#EXTM3U\r\n#EXTINF:300,Band - Track\r\n#EXTALB:Album\r\n/music/Band/Track.flac\r\n\
                   #EXTINF:100,Other - Song\r\nC:\\Music\\Other\\Song.mp3\r\n";

        let entries = parse_m3u(doc);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Track");
        assert_eq!(entries[0].file_path.as_deref(), Some("/music/Band/Track.flac"));
        assert_eq!(entries[1].file_path.as_deref(), Some("C:\\Music\\Other\\Song.mp3"));
    }

    #[test]
    fn header_only_and_empty_documents_have_no_entries() {
        assert!(parse_m3u("").is_empty());
        assert!(parse_m3u("#EXTM3U\n").is_empty());
        assert!(parse_m3u("just some text").is_empty());
    }
}
