//! Open tabs and the active-tab pointer

use super::classify::icon_for;
use std::path::{Path, PathBuf};

/// A navigation context bound to one file or directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub is_active: bool,
}

impl Tab {
    pub fn new(path: PathBuf, name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            path,
            is_directory,
            is_active: false,
        }
    }

    /// Name shown in the tab list; unnamed directory tabs (e.g. `/`) show their path
    pub fn display_name(&self) -> String {
        if self.is_directory && self.name.is_empty() {
            self.path.display().to_string()
        } else {
            self.name.clone()
        }
    }

    pub fn icon(&self) -> &'static str {
        icon_for(&self.path, self.is_directory)
    }

    /// Case-insensitive path comparison used to reuse tabs
    pub fn has_path(&self, path: &Path) -> bool {
        same_path(&self.path, path)
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// The open-tab collection of one window.
///
/// Tabs are only ever appended; once any tab exists exactly one is active.
#[derive(Debug, Default)]
pub struct Navigator {
    tabs: Vec<Tab>,
    current: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the tab for `path`, creating it first if no tab has that path.
    ///
    /// Returns the index of the now-active tab.
    pub fn open(&mut self, path: &Path, name: &str, is_directory: bool) -> usize {
        if let Some(index) = self.find(path) {
            log::debug!("reusing tab {} for {}", index, path.display());
            self.activate(index);
            return index;
        }

        self.tabs.push(Tab::new(path.to_path_buf(), name, is_directory));
        let index = self.tabs.len() - 1;
        self.activate(index);
        index
    }

    /// Makes the tab at `index` the only active one. Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<&Tab> {
        if index >= self.tabs.len() {
            return None;
        }

        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.is_active = i == index;
        }
        self.current = Some(index);
        self.tabs.get(index)
    }

    /// Index of the tab whose path matches `path` ignoring case
    pub fn find(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|t| t.has_path(path))
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.current
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    /// Window title: the active tab's full path
    pub fn title(&self) -> Option<String> {
        self.active_tab().map(|t| t.path.display().to_string())
    }

    /// Activates the next tab, wrapping around
    pub fn activate_next(&mut self) -> Option<&Tab> {
        let len = self.tabs.len();
        let next = self.current.map_or(0, |i| (i + 1) % len.max(1));
        self.activate(next)
    }

    /// Activates the previous tab, wrapping around
    pub fn activate_previous(&mut self) -> Option<&Tab> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }
        let previous = self.current.map_or(0, |i| (i + len - 1) % len);
        self.activate(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(nav: &Navigator) -> usize {
        nav.tabs().iter().filter(|t| t.is_active).count()
    }

    mod tab_tests {
        use super::*;

        #[test]
        fn test_display_name_for_named_tab() {
            let tab = Tab::new(PathBuf::from("/home/user/src"), "src", true);
            assert_eq!(tab.display_name(), "src");
        }

        #[test]
        fn test_display_name_falls_back_to_path_for_unnamed_directory() {
            let tab = Tab::new(PathBuf::from("/"), "", true);
            assert_eq!(tab.display_name(), "/");
        }

        #[test]
        fn test_display_name_of_unnamed_file_stays_empty() {
            let tab = Tab::new(PathBuf::from("/x"), "", false);
            assert_eq!(tab.display_name(), "");
        }

        #[test]
        fn test_icon_uses_shared_table() {
            let tab = Tab::new(PathBuf::from("/a/app.js"), "app.js", false);
            assert_eq!(tab.icon(), crate::domain::classify::ICON_SCRIPT);
        }

        #[test]
        fn test_has_path_ignores_case() {
            let tab = Tab::new(PathBuf::from("/Data/Report.TXT"), "Report.TXT", false);
            assert!(tab.has_path(Path::new("/data/report.txt")));
            assert!(!tab.has_path(Path::new("/data/report.md")));
        }
    }

    mod navigator_tests {
        use super::*;

        #[test]
        fn test_new_navigator_is_empty() {
            let nav = Navigator::new();
            assert!(nav.is_empty());
            assert!(nav.active_tab().is_none());
            assert!(nav.title().is_none());
        }

        #[test]
        fn test_open_appends_and_activates() {
            let mut nav = Navigator::new();
            let first = nav.open(Path::new("/root"), "root", true);
            let second = nav.open(Path::new("/root/a.txt"), "a.txt", false);

            assert_eq!((first, second), (0, 1));
            assert_eq!(nav.len(), 2);
            assert_eq!(nav.active_index(), Some(1));
            assert!(!nav.tabs()[0].is_active);
            assert!(nav.tabs()[1].is_active);
            assert_eq!(nav.title().as_deref(), Some("/root/a.txt"));
        }

        #[test]
        fn test_reopen_same_path_differing_case_reuses_tab() {
            let mut nav = Navigator::new();
            nav.open(Path::new("/Docs/Readme.md"), "Readme.md", false);
            nav.open(Path::new("/other"), "other", true);

            let index = nav.open(Path::new("/docs/README.MD"), "README.MD", false);

            assert_eq!(index, 0);
            assert_eq!(nav.len(), 2);
            assert_eq!(nav.active_index(), Some(0));
            // original name is kept
            assert_eq!(nav.tabs()[0].name, "Readme.md");
        }

        #[test]
        fn test_exactly_one_active_after_any_sequence() {
            let mut nav = Navigator::new();
            let paths = ["/a", "/b", "/A", "/c", "/b", "/d"];
            for (i, p) in paths.iter().enumerate() {
                nav.open(Path::new(p), p, i % 2 == 0);
                assert_eq!(active_count(&nav), 1);
            }
            for i in [3, 0, 2, 99, 1] {
                nav.activate(i);
                assert_eq!(active_count(&nav), 1);
            }
            assert_eq!(nav.len(), 4);
        }

        #[test]
        fn test_activate_out_of_range_keeps_current() {
            let mut nav = Navigator::new();
            nav.open(Path::new("/a"), "a", true);

            assert!(nav.activate(5).is_none());
            assert_eq!(nav.active_index(), Some(0));
            assert!(nav.tabs()[0].is_active);
        }

        #[test]
        fn test_activate_next_and_previous_wrap() {
            let mut nav = Navigator::new();
            nav.open(Path::new("/a"), "a", true);
            nav.open(Path::new("/b"), "b", true);
            nav.open(Path::new("/c"), "c", true);

            assert_eq!(nav.activate_next().map(|t| t.name.as_str()), Some("a"));
            assert_eq!(nav.activate_previous().map(|t| t.name.as_str()), Some("c"));
            assert_eq!(nav.activate_previous().map(|t| t.name.as_str()), Some("b"));
            assert_eq!(active_count(&nav), 1);
        }

        #[test]
        fn test_cycling_empty_navigator_is_noop() {
            let mut nav = Navigator::new();
            assert!(nav.activate_next().is_none());
            assert!(nav.activate_previous().is_none());
        }
    }
}
