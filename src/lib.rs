//! mediatrie - a path-indexed media catalog
//!
//! Resolves folders and playable tracks of a browsable audio library from
//! `/`-separated paths, pages through a folder's children, and finds any
//! item by its id.
//!
//! # Modules
//!
//! - `library`: `Item` and the directory scanner
//! - `catalog`: the folder registration table and the `Producer` trait
//! - `index`: the folder trie and its lookups
//! - `browse`: the root / item / children API for a session layer
//! - `config`: settings schema and loading
//!
//! # Usage
//!
//! ```
//! use mediatrie::{Browser, Settings};
//!
//! let browser = Browser::from_settings(&Settings::default());
//! let music = browser.children("music", 0, 10);
//! assert_eq!(music.len(), 2);
//! assert!(browser.item("track_1").is_some());
//! ```

pub mod browse;
pub mod catalog;
pub mod config;
pub mod index;
pub mod library;

pub use browse::Browser;
pub use catalog::{CatalogSource, Producer, StaticProducer};
pub use config::{Settings, SettingsError};
pub use index::{FolderIndex, FolderNode, ROOT_ID};
pub use library::Item;
