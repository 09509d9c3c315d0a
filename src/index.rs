//! The folder index: a trie of folders built once from the catalog table.
//!
//! Paths are `/`-separated route segments walked from the root. Lookups
//! report absence as `None` or an empty page; nothing here fails.

mod node;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{CatalogSource, Producer, StaticProducer};
use crate::library::{Item, folder_title};

pub use node::FolderNode;

/// Reserved id and path alias of the root folder.
pub const ROOT_ID: &str = "root";

pub const PATH_SEPARATOR: char = '/';

#[derive(Debug)]
pub struct FolderIndex {
    root: FolderNode,
    len: usize,
}

impl FolderIndex {
    /// Build the tree from `sources`. No producer is invoked.
    ///
    /// The root entry (empty route) supplies the root's producer; without
    /// one the root lists its top-level folders. A route repeated among
    /// siblings replaces the earlier folder. Other entries whose route is
    /// empty, `"root"` or contains `/` are skipped.
    pub fn build(display_name: &str, sources: impl IntoIterator<Item = CatalogSource>) -> Self {
        let mut root = FolderNode::new(
            ROOT_ID,
            Item::folder(ROOT_ID, display_name),
            Arc::new(StaticProducer::default()),
        );
        let mut root_producer: Option<Arc<dyn Producer>> = None;

        for source in sources {
            if source.is_root() {
                if root_producer.is_some() {
                    warn!("more than one root catalog entry, keeping the last");
                }
                root_producer = Some(source.producer);
                for child in source.children {
                    insert(&mut root, child, "");
                }
                continue;
            }
            insert(&mut root, source, "");
        }

        let producer = root_producer.unwrap_or_else(|| {
            let items = root.children().iter().map(|c| c.item().clone()).collect();
            Arc::new(StaticProducer::new(items)) as Arc<dyn Producer>
        });
        root.set_producer(producer);

        let len = count(&root);
        debug!(folders = len, "folder index built");
        Self { root, len }
    }

    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    /// Number of folder nodes, root included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `build` always creates the root, so this is false for any built index.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve a browse path to its folder.
    ///
    /// A leading separator is ignored; `""`, `"/"` and `"root"` all name the
    /// root, and `root/` may prefix any path.
    pub fn resolve_path(&self, path: &str) -> Option<&FolderNode> {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        self.resolve_segments(&segments)
    }

    /// Resolve an already-split path. Empty segments are skipped and a
    /// leading `"root"` names the root.
    pub fn resolve_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&FolderNode> {
        let mut current = &self.root;
        for (i, segment) in segments
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .enumerate()
        {
            if i == 0 && segment == ROOT_ID {
                continue;
            }
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// One page of the items under `path`. Unknown paths, a zero page size
    /// and pages past the end are all empty.
    pub fn list_children(&self, path: &str, page: usize, page_size: usize) -> Vec<Item> {
        let Some(node) = self.resolve_path(path) else {
            debug!(path, "no folder for path");
            return Vec::new();
        };
        if page_size == 0 {
            return Vec::new();
        }

        let all = node.load_children();
        let Some(from) = page.checked_mul(page_size) else {
            return Vec::new();
        };
        if from >= all.len() {
            return Vec::new();
        }
        let to = from.saturating_add(page_size).min(all.len());
        debug!(path, page, page_size, total = all.len(), "listing children");
        all[from..to].to_vec()
    }

    /// Find the item with `id` anywhere in the catalog.
    ///
    /// `"root"` and folder ids resolve to folder items without calling any
    /// producer. Anything else is a depth-first search over every folder's
    /// items. An empty id is never found.
    pub fn resolve_item(&self, id: &str) -> Option<Item> {
        if id.is_empty() {
            return None;
        }
        if let Some(node) = self.folder_by_id(id) {
            return Some(node.item().clone());
        }
        let found = find_item(&self.root, id);
        if found.is_none() {
            debug!(id, "no item for id");
        }
        found
    }

    /// Folder whose item id is exactly `id`.
    fn folder_by_id(&self, id: &str) -> Option<&FolderNode> {
        if id == ROOT_ID {
            return Some(&self.root);
        }
        let mut current = &self.root;
        for segment in id.split(PATH_SEPARATOR) {
            if segment.is_empty() {
                return None;
            }
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Pre-order walk over all folders with their depth (root is 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, &self.root)],
        }
    }
}

/// Iterator returned by [`FolderIndex::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FolderNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FolderNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

fn insert(parent: &mut FolderNode, source: CatalogSource, parent_id: &str) {
    let route = source.route.as_str();
    if route.is_empty() || route == ROOT_ID || route.contains(PATH_SEPARATOR) {
        warn!(route, parent = %parent_id, "unusable folder route, skipping entry");
        return;
    }

    let id = if parent_id.is_empty() {
        source.route.clone()
    } else {
        format!("{parent_id}{PATH_SEPARATOR}{}", source.route)
    };
    let title = source
        .title
        .unwrap_or_else(|| folder_title(&source.route));

    let mut node = FolderNode::new(source.route, Item::folder(&id, title), source.producer);
    for child in source.children {
        insert(&mut node, child, &id);
    }

    if parent.put_child(node) {
        warn!(folder = %id, "duplicate folder route, replacing earlier entry");
    }
}

fn count(node: &FolderNode) -> usize {
    1 + node.children().iter().map(count).sum::<usize>()
}

fn find_item(node: &FolderNode, id: &str) -> Option<Item> {
    if let Some(item) = node.load_children().into_iter().find(|i| i.id() == id) {
        return Some(item);
    }
    node.children().iter().find_map(|child| find_item(child, id))
}
