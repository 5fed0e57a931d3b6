//! fsview - A tabbed terminal file browser library
//!
//! Directory listing, file classification and content preview live here
//! without any dependency on the terminal; the `app` controller ties them to
//! tab navigation and `tui` draws the result.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod preview;
pub mod tui;

// Re-export primary types for convenience
pub use app::{App, AppOptions, Display, Focus, OpenFilter};
pub use config::UserConfig;
pub use domain::{
    build_tree, classify, list_directory, try_list_directory, ClassifiedFile, FileEntry, FileKind,
    ListOptions, Navigator, Tab,
};
pub use error::{FsViewError, Result};
pub use preview::{format_file_size, generate_preview, MetadataEntry, Preview, Previewer};
