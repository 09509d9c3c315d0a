use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mediatrie/config.toml` or `~/.config/mediatrie/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MEDIATRIE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub browse: BrowseSettings,
    pub scan: ScanSettings,
    /// Top-level folders under the root, in browse order.
    pub folders: Vec<FolderSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            browse: BrowseSettings::default(),
            scan: ScanSettings::default(),
            folders: default_folders(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Title of the root folder as shown to browsing clients.
    pub display_name: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            display_name: "TAAutomotive".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowseSettings {
    /// Page size used when a caller does not ask for one.
    pub default_page_size: usize,
    /// Upper bound on any requested page size; 0 disables the cap.
    pub max_page_size: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 500,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

/// Options for folders backed by a `scan_dir`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanSettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Which fields to use to build a scanned track's title and their ordering.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            display_separator: " - ".to_string(),
        }
    }
}

/// One folder of the catalog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FolderSettings {
    /// Path segment under the parent folder. Must be non-empty, must not
    /// contain `/` and must not be `root`.
    pub route: String,
    /// Display title; defaults to the capitalized route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Directory scanned once at startup for additional tracks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_dir: Option<PathBuf>,
    /// Preconfigured tracks, listed after sub-folders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<TrackSettings>,
    /// Sub-folders, listed before tracks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<FolderSettings>,
}

/// A preconfigured playable track.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackSettings {
    pub id: String,
    pub title: String,
    /// Playback locator handed to the player, e.g. an HTTPS or `file://` URI.
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

fn default_folders() -> Vec<FolderSettings> {
    vec![
        FolderSettings {
            route: "music".to_string(),
            tracks: vec![
                TrackSettings {
                    id: "track_1".to_string(),
                    title: "Android Spot (15 sec)".to_string(),
                    uri: "https://storage.googleapis.com/exoplayer-test-media-1/mp3/android_spot_15sec.mp3"
                        .to_string(),
                    ..TrackSettings::default()
                },
                TrackSettings {
                    id: "track_2".to_string(),
                    title: "Ice Cream (15 sec)".to_string(),
                    uri: "https://storage.googleapis.com/exoplayer-test-media-1/mp3/ice_cream_15sec.mp3"
                        .to_string(),
                    ..TrackSettings::default()
                },
            ],
            ..FolderSettings::default()
        },
        FolderSettings {
            route: "playlists".to_string(),
            ..FolderSettings::default()
        },
    ]
}
