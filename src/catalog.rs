//! Catalog sources: the fixed registration table of folders.
//!
//! Each source pairs a route segment with a [`Producer`] that yields the
//! folder's items when asked. Sources are plain data; the folder index turns
//! them into a tree.

mod source;

pub use source::{CatalogSource, Producer, StaticProducer, default_sources, sources_from_settings};

#[cfg(test)]
mod tests;
