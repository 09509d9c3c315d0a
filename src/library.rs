//! Library item types and the directory scanner.
//!
//! `Item` is the value handed to callers for both folders and tracks. The
//! scanner turns a directory of audio files into a fixed list of track items
//! once, while the catalog is being assembled.

mod model;
mod scan;

pub use model::{Item, folder_title};
pub use scan::scan;
