use serde::Serialize;

/// A browsable folder or a playable track.
///
/// Exactly one of `browsable`/`playable` is set, and `source_locator` is
/// present only on tracks. The fields are private so that the two
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<String>,
    browsable: bool,
    playable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_locator: Option<String>,
}

impl Item {
    /// Build a browsable, non-playable folder item.
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            album: None,
            browsable: true,
            playable: false,
            source_locator: None,
        }
    }

    /// Build a playable track item pointing at `locator` (usually a URI).
    ///
    /// Returns `None` when `locator` is empty, since a track nobody can play
    /// is not a track.
    pub fn track(
        id: impl Into<String>,
        title: impl Into<String>,
        locator: impl Into<String>,
    ) -> Option<Self> {
        let locator = locator.into();
        if locator.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            album: None,
            browsable: false,
            playable: true,
            source_locator: Some(locator),
        })
    }

    /// Attach artist metadata. Ignored on folders.
    pub fn with_artist(mut self, artist: Option<String>) -> Self {
        if self.playable {
            self.artist = artist.filter(|a| !a.trim().is_empty());
        }
        self
    }

    /// Attach album metadata. Ignored on folders.
    pub fn with_album(mut self, album: Option<String>) -> Self {
        if self.playable {
            self.album = album.filter(|a| !a.trim().is_empty());
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn is_browsable(&self) -> bool {
        self.browsable
    }

    pub fn is_playable(&self) -> bool {
        self.playable
    }

    pub fn source_locator(&self) -> Option<&str> {
        self.source_locator.as_deref()
    }
}

/// Title shown for a folder: the last route segment with its first
/// character upper-cased (`"music"` -> `"Music"`, `"music/rock"` -> `"Rock"`).
pub fn folder_title(route: &str) -> String {
    let last = route.rsplit('/').next().unwrap_or(route);
    let mut chars = last.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
