//! Controller: owns the open tabs and what the content pane shows

use crate::domain::classify::extension_of;
use crate::domain::{
    build_tree, classify, flatten, list_directory_with_options, FileEntry, FileKind, ListOptions,
    Navigator, Tab, TreeRow,
};
use crate::error::{FsViewError, Result};
use crate::preview::{generate_file_info, Preview, Previewer};
use std::fs;
use std::path::{Path, PathBuf};

/// Levels expanded when a directory tab is shown as a tree
pub const DEFAULT_TREE_DEPTH: usize = 2;

/// What the content pane shows for the active tab
#[derive(Debug, Clone)]
pub enum Display {
    /// Directory listing; entries carry children when shown as a tree
    Directory { entries: Vec<FileEntry>, tree: bool },
    Preview(Preview),
    /// Short message naming why nothing could be shown
    Placeholder(String),
    /// No tab is open
    Empty,
}

/// Pane receiving cursor keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tabs,
    Content,
}

/// File-type filter of the open prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFilter {
    #[default]
    All,
    Text,
    Images,
}

impl OpenFilter {
    pub fn label(self) -> &'static str {
        match self {
            OpenFilter::All => "All files (*.*)",
            OpenFilter::Text => "Text files (*.txt)",
            OpenFilter::Images => "Image files (*.jpg;*.jpeg;*.png;*.gif;*.bmp)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            OpenFilter::All => OpenFilter::Text,
            OpenFilter::Text => OpenFilter::Images,
            OpenFilter::Images => OpenFilter::All,
        }
    }

    /// Directories are always accepted
    pub fn accepts(self, path: &Path) -> bool {
        if path.is_dir() {
            return true;
        }
        let ext = extension_of(path);
        match self {
            OpenFilter::All => true,
            OpenFilter::Text => ext == "txt",
            OpenFilter::Images => matches!(ext.as_str(), "jpg" | "jpeg" | "png" | "gif" | "bmp"),
        }
    }
}

/// State of the open-path prompt
#[derive(Debug, Clone, Default)]
pub struct OpenPrompt {
    pub input: String,
    pub filter: OpenFilter,
}

impl OpenPrompt {
    pub fn clear(&mut self) {
        self.input.clear();
        self.filter = OpenFilter::All;
    }
}

/// Listing behaviour taken from user configuration
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub list: ListOptions,
    pub tree_depth: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            list: ListOptions::default(),
            tree_depth: DEFAULT_TREE_DEPTH,
        }
    }
}

pub struct App {
    navigator: Navigator,
    previewer: Previewer,
    options: AppOptions,
    tree_mode: bool,
    display: Display,
    /// Bumped on every display change so renderers can drop cached lines
    generation: u64,
    pub focus: Focus,
    pub entry_cursor: usize,
    pub scroll: u16,
    pub prompt: OpenPrompt,
    pub status: Option<String>,
}

fn display_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn placeholder_message(kind: FileKind, err: &FsViewError) -> String {
    match kind {
        FileKind::Image => format!("Error loading image: {}", err),
        _ => format!("Error loading file: {}", err),
    }
}

impl App {
    /// Creates the controller with one tab for `start`
    pub fn new(start: &Path, options: AppOptions) -> Self {
        let mut app = Self::empty(options);
        let start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
        let name = display_name_of(&start);
        app.open(&start, &name, start.is_dir());
        app
    }

    /// Creates the controller with no tabs
    pub fn empty(options: AppOptions) -> Self {
        Self {
            navigator: Navigator::new(),
            previewer: Previewer::new(),
            options,
            tree_mode: false,
            display: Display::Empty,
            generation: 0,
            focus: Focus::Content,
            entry_cursor: 0,
            scroll: 0,
            prompt: OpenPrompt::default(),
            status: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn tabs(&self) -> &[Tab] {
        self.navigator.tabs()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.navigator.active_tab()
    }

    pub fn title(&self) -> Option<String> {
        self.navigator.title()
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_tree_mode(&self) -> bool {
        self.tree_mode
    }

    /// Opens (or re-activates) the tab for `path` and shows it
    pub fn open(&mut self, path: &Path, name: &str, is_directory: bool) -> usize {
        let index = self.navigator.open(path, name, is_directory);
        self.refresh_display();
        index
    }

    /// Activates the tab at `index` and shows it
    pub fn activate(&mut self, index: usize) {
        if self.navigator.activate(index).is_some() {
            self.refresh_display();
        }
    }

    pub fn activate_next(&mut self) {
        if self.navigator.activate_next().is_some() {
            self.refresh_display();
        }
    }

    pub fn activate_previous(&mut self) {
        if self.navigator.activate_previous().is_some() {
            self.refresh_display();
        }
    }

    /// Rows of the directory listing in display order
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        match &self.display {
            Display::Directory { entries, .. } => flatten(entries),
            _ => Vec::new(),
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.rows().get(self.entry_cursor).map(|(_, entry)| *entry)
    }

    /// Opens the highlighted listing entry in its own tab
    pub fn open_selected(&mut self) -> Option<usize> {
        let entry = self.selected_entry()?.clone();
        Some(self.open(&entry.path, &entry.name, entry.is_directory))
    }

    /// Resolves prompt input against the active tab's directory
    pub fn resolve_input(&self, input: &str) -> PathBuf {
        let input = input.trim();
        let expanded = match input.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => dirs::home_dir()
                .map(|home| home.join(rest.trim_start_matches('/')))
                .unwrap_or_else(|| PathBuf::from(input)),
            _ => PathBuf::from(input),
        };

        if expanded.is_absolute() {
            return expanded;
        }

        let base = self.active_tab().map(|tab| {
            if tab.is_directory {
                tab.path.clone()
            } else {
                tab.path.parent().map(Path::to_path_buf).unwrap_or_default()
            }
        });

        match base {
            Some(base) => base.join(expanded),
            None => expanded,
        }
    }

    /// Opens a path typed into the prompt, checked against `filter`
    pub fn open_path(&mut self, input: &str, filter: OpenFilter) -> Result<usize> {
        let path = self.resolve_input(input);
        if !path.exists() {
            return Err(FsViewError::NotFound(path));
        }
        if !filter.accepts(&path) {
            return Err(FsViewError::FilterMismatch {
                path,
                filter: filter.label(),
            });
        }

        let path = fs::canonicalize(&path).unwrap_or(path);
        let name = display_name_of(&path);
        Ok(self.open(&path, &name, path.is_dir()))
    }

    /// Submits the prompt, reporting failures through the status line
    pub fn submit_prompt(&mut self) -> bool {
        let input = self.prompt.input.clone();
        match self.open_path(&input, self.prompt.filter) {
            Ok(_) => {
                self.prompt.clear();
                self.status = None;
                true
            }
            Err(e) => {
                log::info!("open rejected: {}", e);
                self.status = Some(e.to_string());
                false
            }
        }
    }

    /// Re-reads the active tab's content
    pub fn refresh(&mut self) {
        if let Some(tab) = self.navigator.active_tab() {
            let path = tab.path.clone();
            self.previewer.invalidate(&path);
        }
        self.refresh_display();
    }

    /// Switches directory tabs between flat listing and tree
    pub fn toggle_tree(&mut self) {
        self.tree_mode = !self.tree_mode;
        if self.active_tab().is_some_and(|t| t.is_directory) {
            self.refresh_display();
        }
    }

    /// Shows the metadata table for the active file tab, whatever its kind
    pub fn show_file_info(&mut self) {
        let Some(tab) = self.navigator.active_tab() else {
            return;
        };
        if tab.is_directory {
            return;
        }

        let path = tab.path.clone();
        let classified = classify(&path);
        let display = match generate_file_info(&path, &classified) {
            Ok(preview) => Display::Preview(preview),
            Err(e) => {
                log::warn!("file info failed for {}: {}", path.display(), e);
                Display::Placeholder(format!("Error loading file: {}", e))
            }
        };
        self.set_display(display);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tabs => Focus::Content,
            Focus::Content => Focus::Tabs,
        };
    }

    pub fn cursor_up(&mut self) {
        match self.focus {
            Focus::Tabs => self.activate_previous(),
            Focus::Content => match self.display {
                Display::Directory { .. } => {
                    self.entry_cursor = self.entry_cursor.saturating_sub(1);
                }
                _ => self.scroll = self.scroll.saturating_sub(1),
            },
        }
    }

    pub fn cursor_down(&mut self) {
        match self.focus {
            Focus::Tabs => self.activate_next(),
            Focus::Content => match self.display {
                Display::Directory { .. } => {
                    let last = self.rows().len().saturating_sub(1);
                    self.entry_cursor = (self.entry_cursor + 1).min(last);
                }
                _ => self.scroll = self.scroll.saturating_add(1),
            },
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if let Display::Directory { .. } = self.display {
            let last = self.rows().len().saturating_sub(1) as i64;
            self.entry_cursor =
                (self.entry_cursor as i64 + delta as i64).clamp(0, last.max(0)) as usize;
        } else {
            self.scroll = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        }
    }

    fn set_display(&mut self, display: Display) {
        self.display = display;
        self.generation += 1;
        self.entry_cursor = 0;
        self.scroll = 0;
    }

    fn refresh_display(&mut self) {
        let Some(tab) = self.navigator.active_tab() else {
            self.set_display(Display::Empty);
            return;
        };

        let path = tab.path.clone();
        let display = if tab.is_directory {
            self.directory_display(&path)
        } else {
            self.file_display(&path)
        };
        self.set_display(display);
    }

    fn directory_display(&self, path: &Path) -> Display {
        let entries = if self.tree_mode {
            build_tree(path, self.options.tree_depth, &self.options.list)
        } else {
            list_directory_with_options(path, &self.options.list)
        };
        Display::Directory {
            entries,
            tree: self.tree_mode,
        }
    }

    fn file_display(&mut self, path: &Path) -> Display {
        let classified = classify(path);
        match self.previewer.preview(path, &classified) {
            Ok(preview) => Display::Preview(preview),
            Err(e) => {
                log::warn!(
                    "preview of {} ({:?}) failed: {}",
                    path.display(),
                    classified.kind,
                    e
                );
                Display::Placeholder(placeholder_message(classified.kind, &e))
            }
        }
    }
}
