use std::fmt;
use std::sync::Arc;

use crate::catalog::Producer;
use crate::library::Item;

/// One folder of the index tree.
///
/// `children` only ever holds folders; tracks live in the producer output.
pub struct FolderNode {
    segment: String,
    item: Item,
    producer: Arc<dyn Producer>,
    children: Vec<FolderNode>,
}

impl FolderNode {
    pub(crate) fn new(segment: impl Into<String>, item: Item, producer: Arc<dyn Producer>) -> Self {
        Self {
            segment: segment.into(),
            item,
            producer,
            children: Vec::new(),
        }
    }

    /// Path component identifying this node under its parent.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// The folder item shown for this node.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Items of this folder (sub-folders and tracks), freshly produced.
    pub fn load_children(&self) -> Vec<Item> {
        self.producer.produce()
    }

    /// Child folder for `segment`, if any. Exact match only.
    pub fn child(&self, segment: &str) -> Option<&FolderNode> {
        self.children.iter().find(|c| c.segment == segment)
    }

    /// Child folders in insertion order.
    pub fn children(&self) -> &[FolderNode] {
        &self.children
    }

    pub(crate) fn set_producer(&mut self, producer: Arc<dyn Producer>) {
        self.producer = producer;
    }

    /// Insert `node`, replacing a sibling with the same segment in place.
    /// Returns `true` if a sibling was replaced.
    pub(crate) fn put_child(&mut self, node: FolderNode) -> bool {
        match self.children.iter_mut().find(|c| c.segment == node.segment) {
            Some(existing) => {
                *existing = node;
                true
            }
            None => {
                self.children.push(node);
                false
            }
        }
    }
}

impl fmt::Debug for FolderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderNode")
            .field("segment", &self.segment)
            .field("item", &self.item)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
