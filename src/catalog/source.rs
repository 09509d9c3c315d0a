use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{FolderSettings, ScanSettings, Settings};
use crate::library::{self, Item, folder_title};

/// Lazily yields the ordered items of one folder.
///
/// Implementations must be pure: no arguments, no hidden mutable state, the
/// same items on every call. They are called from any thread.
pub trait Producer: Send + Sync {
    fn produce(&self) -> Vec<Item>;
}

impl<F> Producer for F
where
    F: Fn() -> Vec<Item> + Send + Sync,
{
    fn produce(&self) -> Vec<Item> {
        self()
    }
}

/// A producer over a fixed list of items, cloned on each call.
#[derive(Debug, Clone, Default)]
pub struct StaticProducer {
    items: Vec<Item>,
}

impl StaticProducer {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl Producer for StaticProducer {
    fn produce(&self) -> Vec<Item> {
        self.items.clone()
    }
}

/// One entry of the catalog table.
///
/// The empty route is reserved for the root entry, whose producer lists the
/// top-level folders.
#[derive(Clone)]
pub struct CatalogSource {
    pub(crate) route: String,
    pub(crate) title: Option<String>,
    pub(crate) producer: Arc<dyn Producer>,
    pub(crate) children: Vec<CatalogSource>,
}

impl CatalogSource {
    /// The root entry.
    pub fn root(producer: impl Producer + 'static) -> Self {
        Self::folder("", producer)
    }

    /// A named folder. Its title defaults to the capitalized route.
    pub fn folder(route: impl Into<String>, producer: impl Producer + 'static) -> Self {
        Self {
            route: route.into(),
            title: None,
            producer: Arc::new(producer),
            children: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Nest `child` below this folder.
    pub fn with_child(mut self, child: CatalogSource) -> Self {
        self.children.push(child);
        self
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn is_root(&self) -> bool {
        self.route.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn children(&self) -> &[CatalogSource] {
        &self.children
    }

    pub fn produce(&self) -> Vec<Item> {
        self.producer.produce()
    }
}

impl fmt::Debug for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSource")
            .field("route", &self.route)
            .field("title", &self.title)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

fn join_id(parent: &str, route: &str) -> String {
    if parent.is_empty() {
        route.to_string()
    } else {
        format!("{parent}/{route}")
    }
}

fn folder_item(id: &str, folder: &FolderSettings) -> Item {
    let title = folder
        .title
        .clone()
        .unwrap_or_else(|| folder_title(&folder.route));
    Item::folder(id, title)
}

fn folder_source(
    folder: &FolderSettings,
    parent: &str,
    scan_settings: &ScanSettings,
) -> CatalogSource {
    let id = join_id(parent, &folder.route);

    let mut items: Vec<Item> = folder
        .folders
        .iter()
        .map(|sub| folder_item(&join_id(&id, &sub.route), sub))
        .collect();

    for track in &folder.tracks {
        match Item::track(&track.id, &track.title, &track.uri) {
            Some(item) => items.push(
                item.with_artist(track.artist.clone())
                    .with_album(track.album.clone()),
            ),
            None => warn!(track = %track.id, folder = %id, "track has no uri, skipping"),
        }
    }

    if let Some(dir) = &folder.scan_dir {
        items.extend(library::scan(dir, &id, scan_settings));
    }

    debug!(folder = %id, items = items.len(), "catalog folder ready");

    let mut source = CatalogSource::folder(folder.route.clone(), StaticProducer::new(items));
    source.title = folder.title.clone();
    for sub in &folder.folders {
        source = source.with_child(folder_source(sub, &id, scan_settings));
    }
    source
}

/// Build the catalog table described by `settings`.
///
/// The first entry is the root, listing the top-level folders; folders with
/// a `scan_dir` are scanned here, once.
pub fn sources_from_settings(settings: &Settings) -> Vec<CatalogSource> {
    let top_level: Vec<Item> = settings
        .folders
        .iter()
        .map(|f| folder_item(&f.route, f))
        .collect();

    let mut sources = Vec::with_capacity(settings.folders.len() + 1);
    sources.push(CatalogSource::root(StaticProducer::new(top_level)));
    for folder in &settings.folders {
        sources.push(folder_source(folder, "", &settings.scan));
    }
    sources
}

/// The built-in catalog: `music` with two sample tracks and an empty
/// `playlists` folder.
pub fn default_sources() -> Vec<CatalogSource> {
    sources_from_settings(&Settings::default())
}
