use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::ItemKey;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::{ScanSettings, TrackDisplayField};

use super::model::Item;

/// Tag values read from one audio file, trimmed, with the file stem standing
/// in for a missing title.
#[derive(Debug, Default)]
struct TrackTags {
    title: String,
    artist: Option<String>,
    album: Option<String>,
}

impl TrackTags {
    fn read(path: &Path) -> Self {
        let mut tags = Self {
            title: path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string(),
            ..Self::default()
        };

        let Ok(tagged) = lofty::read_from_path(path) else {
            debug!(path = %path.display(), "no readable tags, using file name");
            return tags;
        };
        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return tags;
        };

        let value = |key: &ItemKey| {
            tag.get_string(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        if let Some(title) = value(&ItemKey::TrackTitle) {
            tags.title = title;
        }
        tags.artist = value(&ItemKey::TrackArtist);
        tags.album = value(&ItemKey::AlbumTitle);
        tags
    }

    /// Item title built from `settings.display_fields` joined by
    /// `settings.display_separator`. Empty fields are left out; if every
    /// field is empty the tag title is used as is.
    fn display_title(&self, path: &Path, settings: &ScanSettings) -> String {
        let parts: Vec<String> = settings
            .display_fields
            .iter()
            .filter_map(|field| match field {
                TrackDisplayField::Title => non_blank(&self.title),
                TrackDisplayField::Artist => self.artist.as_deref().and_then(non_blank),
                TrackDisplayField::Album => self.album.as_deref().and_then(non_blank),
                TrackDisplayField::Filename => {
                    path.file_stem().and_then(|s| s.to_str()).and_then(non_blank)
                }
                TrackDisplayField::Path => Some(path.display().to_string()),
            })
            .collect();

        if parts.is_empty() {
            self.title.clone()
        } else {
            parts.join(settings.display_separator.as_str())
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_audio_file(path: &Path, settings: &ScanSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Item id for a scanned file: `<id_prefix>/<path relative to dir>`, with
/// `/` separators on every platform.
fn track_id(id_prefix: &str, dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path);
    let rel: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("{}/{}", id_prefix, rel.join("/"))
}

fn file_locator(path: &Path) -> String {
    let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", abs.display())
}

/// Scan `dir` for audio files and return them as playable items.
///
/// Ids are prefixed with `id_prefix` (normally the owning folder's id) so
/// they stay unique across folders. Unreadable entries are skipped; a
/// missing directory yields an empty list.
pub fn scan(dir: &Path, id_prefix: &str, settings: &ScanSettings) -> Vec<Item> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "scan directory is not readable, folder will be empty");
        return Vec::new();
    }

    let mut tracks: Vec<Item> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !(path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings))
        {
            continue;
        }

        let tags = TrackTags::read(path);
        let display = tags.display_title(path, settings);

        if let Some(item) = Item::track(track_id(id_prefix, dir, path), display, file_locator(path)) {
            tracks.push(item.with_artist(tags.artist).with_album(tags.album));
        }
    }

    tracks.sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()));
    debug!(dir = %dir.display(), count = tracks.len(), "scanned directory");
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn tags(title: &str, artist: Option<&str>, album: Option<&str>) -> TrackTags {
        TrackTags {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            album: album.map(str::to_string),
        }
    }

    fn shown_as(fields: &[TrackDisplayField], sep: &str) -> ScanSettings {
        ScanSettings {
            display_fields: fields.to_vec(),
            display_separator: sep.to_string(),
            ..ScanSettings::default()
        }
    }

    #[test]
    fn display_title_joins_configured_fields_in_order() {
        let p = Path::new("/tmp/Song.mp3");
        let artist_title = shown_as(&[TrackDisplayField::Artist, TrackDisplayField::Title], " - ");
        assert_eq!(
            tags("Song", Some("Artist"), None).display_title(p, &artist_title),
            "Artist - Song"
        );
        assert_eq!(
            tags("Song", Some("  Artist  "), None).display_title(p, &artist_title),
            "Artist - Song"
        );
        assert_eq!(tags("Song", None, None).display_title(p, &artist_title), "Song");

        let album_file = shown_as(&[TrackDisplayField::Album, TrackDisplayField::Filename], " | ");
        assert_eq!(
            tags("Song", None, Some("LP")).display_title(p, &album_file),
            "LP | Song"
        );
        assert_eq!(
            tags("Song", None, None).display_title(p, &shown_as(&[TrackDisplayField::Path], "")),
            "/tmp/Song.mp3"
        );
    }

    #[test]
    fn display_title_falls_back_to_tag_title() {
        let p = Path::new("/tmp/Song.mp3");
        assert_eq!(
            tags("Song", None, None).display_title(p, &shown_as(&[TrackDisplayField::Album], " - ")),
            "Song"
        );
        assert_eq!(
            tags("Song", None, None).display_title(p, &shown_as(&[], " - ")),
            "Song"
        );
    }

    #[test]
    fn unreadable_tags_fall_back_to_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Plain Name.flac");
        fs::write(&path, b"not real").unwrap();
        let t = TrackTags::read(&path);
        assert_eq!(t.title, "Plain Name");
        assert!(t.artist.is_none());
        assert!(t.album.is_none());
    }

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = ScanSettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_filters_non_audio_and_sorts_by_title_case_insensitive() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let settings = ScanSettings {
            display_fields: vec![TrackDisplayField::Title],
            ..ScanSettings::default()
        };
        let tracks = scan(dir.path(), "local", &settings);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title(), "A");
        assert_eq!(tracks[0].id(), "local/A.ogg");
        assert_eq!(tracks[1].title(), "b");
        assert_eq!(tracks[1].id(), "local/b.MP3");
    }

    #[test]
    fn scanned_items_are_playable_file_locators() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), "local", &ScanSettings::default());
        assert_eq!(tracks.len(), 1);
        assert!(tracks[0].is_playable());
        assert!(!tracks[0].is_browsable());
        let locator = tracks[0].source_locator().unwrap();
        assert!(locator.starts_with("file://"));
        assert!(locator.ends_with("song.mp3"));
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = ScanSettings {
            include_hidden: false,
            display_fields: vec![TrackDisplayField::Filename],
            ..ScanSettings::default()
        };
        let tracks = scan(dir.path(), "local", &settings);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "visible");
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = ScanSettings {
            recursive: false,
            display_fields: vec![TrackDisplayField::Filename],
            ..ScanSettings::default()
        };
        let tracks = scan(dir.path(), "local", &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "root");
    }

    #[test]
    fn scan_nested_file_ids_use_forward_slashes() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), "music/local", &ScanSettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id(), "music/local/sub/child.mp3");
    }

    #[test]
    fn scan_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan(&missing, "local", &ScanSettings::default()).is_empty());
    }
}
