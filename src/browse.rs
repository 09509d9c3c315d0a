//! The browse API handed to a session or transport layer.
//!
//! `Browser` owns a [`FolderIndex`] plus the paging limits from settings and
//! exposes the get-root / get-item / get-children operations a remote
//! controller needs.

use tracing::{debug, info, warn};

use crate::catalog::sources_from_settings;
use crate::config::{BrowseSettings, Settings};
use crate::index::FolderIndex;
use crate::library::Item;

#[derive(Debug)]
pub struct Browser {
    index: FolderIndex,
    settings: BrowseSettings,
}

impl Browser {
    pub fn new(index: FolderIndex, settings: BrowseSettings) -> Self {
        Self { index, settings }
    }

    /// Build the catalog described by `settings` and index it.
    pub fn from_settings(settings: &Settings) -> Self {
        let sources = sources_from_settings(settings);
        let index = FolderIndex::build(&settings.library.display_name, sources);
        info!(
            folders = index.len(),
            name = %settings.library.display_name,
            "library ready"
        );
        Self::new(index, settings.browse.clone())
    }

    pub fn index(&self) -> &FolderIndex {
        &self.index
    }

    pub fn default_page_size(&self) -> usize {
        self.settings.default_page_size
    }

    pub fn root(&self) -> Item {
        self.index.root().item().clone()
    }

    pub fn item(&self, id: &str) -> Option<Item> {
        self.index.resolve_item(id)
    }

    /// One page of `parent_id`'s children. `page_size` is capped at
    /// `browse.max_page_size`; a cap of 0 means uncapped.
    pub fn children(&self, parent_id: &str, page: usize, page_size: usize) -> Vec<Item> {
        let page_size = match self.settings.max_page_size {
            0 => page_size,
            max => page_size.min(max),
        };
        debug!(parent_id, page, page_size, "get children");
        self.index.list_children(parent_id, page, page_size)
    }

    /// Resolve ids queued by a controller, keeping the order of those found
    /// and dropping the rest.
    pub fn resolve_items<'a, I>(&self, ids: I) -> Vec<Item>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let item = self.index.resolve_item(id);
                if item.is_none() {
                    warn!(id, "could not resolve queued item");
                }
                item
            })
            .collect()
    }
}
