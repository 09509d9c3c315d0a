use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse a media catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "mediatrie", version, about)]
pub struct Cli {
    /// Config file to load. Unlike the default location, it must exist and be valid.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print items as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the root folder.
    Root,

    /// Look up an item by id.
    Item {
        /// Item id, e.g. `track_1`, `music` or `root`.
        id: String,
    },

    /// List one page of a folder's children.
    Children {
        /// Folder path or id; empty for the root.
        #[arg(default_value = "")]
        path: String,

        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Items per page (defaults to `browse.default_page_size`).
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Print the folder hierarchy.
    Tree,

    /// Print the effective settings as TOML.
    Config,
}
