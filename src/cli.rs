// CLI module for argument parsing and configuration

use crate::app::AppOptions;
use crate::config::UserConfig;
use crate::domain::ListOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Deepest tree view accepted on the command line
pub const MAX_TREE_DEPTH: usize = 16;

/// fsview - A tabbed terminal file browser
///
/// Browse folders, preview text, code and images, and inspect file details,
/// each opened path in its own tab.
#[derive(Parser, Debug, Clone)]
#[command(name = "fsview")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory shown in the first tab
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Additional paths to open in tabs at startup
    ///
    /// Can be specified multiple times.
    /// Example: --open notes.txt --open ../images
    #[arg(short = 'o', long = "open")]
    pub open: Vec<PathBuf>,

    /// Show hidden files (files starting with .)
    #[arg(long = "hidden", action = ArgAction::SetTrue, conflicts_with = "no_hidden")]
    pub show_hidden: bool,

    /// Hide files starting with .
    #[arg(long = "no-hidden", action = ArgAction::SetTrue)]
    pub no_hidden: bool,

    /// Levels expanded when a folder is shown as a tree
    #[arg(short = 'd', long = "tree-depth")]
    pub tree_depth: Option<usize>,

    /// Syntax highlighting theme (syntect theme name)
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Write the log here instead of the cache directory
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Show the welcome screen even if it was already dismissed
    #[arg(long = "welcome", action = ArgAction::SetTrue)]
    pub show_welcome: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Hidden-file preference given on the command line, if any
    pub fn hidden_override(&self) -> Option<bool> {
        match (self.show_hidden, self.no_hidden) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        // Check if directory exists
        if !self.directory.exists() {
            return Err(format!(
                "Directory does not exist: {}",
                self.directory.display()
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Path is not a directory: {}",
                self.directory.display()
            ));
        }

        if let Some(missing) = self.open.iter().find(|path| !path.exists()) {
            return Err(format!("Path does not exist: {}", missing.display()));
        }

        if let Some(depth) = self.tree_depth {
            if depth == 0 || depth > MAX_TREE_DEPTH {
                return Err(format!(
                    "Invalid tree-depth: {}. Use a value from 1 to {}",
                    depth, MAX_TREE_DEPTH
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub open: Vec<PathBuf>,
    pub show_hidden: Option<bool>,
    pub tree_depth: Option<usize>,
    pub theme: Option<String>,
    pub log_file: Option<PathBuf>,
    pub show_welcome: bool,
}

impl AppConfig {
    /// Command-line values win over the saved preferences
    pub fn app_options(&self, user: &UserConfig) -> AppOptions {
        AppOptions {
            list: ListOptions {
                show_hidden: self.show_hidden.unwrap_or(user.show_hidden),
            },
            tree_depth: self.tree_depth.unwrap_or(user.tree_depth).max(1),
        }
    }

    pub fn theme(&self, user: &UserConfig) -> String {
        self.theme
            .clone()
            .unwrap_or_else(|| user.syntax_theme.clone())
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            show_hidden: args.hidden_override(),
            directory: args.directory,
            open: args.open,
            tree_depth: args.tree_depth,
            theme: args.theme,
            log_file: args.log_file,
            show_welcome: args.show_welcome,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            directory: PathBuf::from("."),
            open: Vec::new(),
            show_hidden: None,
            tree_depth: None,
            theme: None,
            log_file: None,
            show_welcome: false,
        }
    }
}
