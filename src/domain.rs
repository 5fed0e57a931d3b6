//! Filesystem model: entries, directory listing and bounded tree building

pub mod classify;
pub mod navigation;

pub use classify::{classify, icon_for, ClassifiedFile, FileKind};
pub use navigation::{Navigator, Tab};

use crate::error::{FsViewError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectories kept per level when building a tree
pub const MAX_TREE_DIRS: usize = 50;
/// Files kept per level when building a tree
pub const MAX_TREE_FILES: usize = 100;

/// One node of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    /// Only ever populated for directories
    pub children: Vec<FileEntry>,
}

impl FileEntry {
    pub fn new(path: PathBuf, is_directory: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            name,
            path,
            is_directory,
            children: Vec::new(),
        }
    }

    pub fn icon(&self) -> &'static str {
        icon_for(&self.path, self.is_directory)
    }

    /// Label used by listing views
    pub fn type_label(&self) -> &'static str {
        if self.is_directory {
            "Folder"
        } else {
            "File"
        }
    }
}

/// A row of a flattened tree: nesting depth and the entry itself
pub type TreeRow<'a> = (usize, &'a FileEntry);

/// Walks `entries` depth-first, yielding each node with its nesting level
pub fn flatten(entries: &[FileEntry]) -> Vec<TreeRow<'_>> {
    fn walk<'a>(entries: &'a [FileEntry], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
        for entry in entries {
            rows.push((depth, entry));
            walk(&entry.children, depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    walk(entries, 0, &mut rows);
    rows
}

/// Options for directory listing
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Include names starting with '.'
    pub show_hidden: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

/// Lists the immediate children of `dir_path`, directories first.
///
/// Never fails: a missing or unreadable directory yields an empty listing.
/// The underlying failure is logged; use [`try_list_directory`] to inspect it.
pub fn list_directory(dir_path: &Path) -> Vec<FileEntry> {
    list_directory_with_options(dir_path, &ListOptions::default())
}

/// [`list_directory`] with custom options
pub fn list_directory_with_options(dir_path: &Path, options: &ListOptions) -> Vec<FileEntry> {
    match try_list_directory(dir_path, options) {
        Ok(entries) => entries,
        Err(FsViewError::NotFound(path)) => {
            log::debug!("listing skipped, {} does not exist", path.display());
            Vec::new()
        }
        Err(e) => {
            log::warn!("cannot list {}: {}", dir_path.display(), e);
            Vec::new()
        }
    }
}

/// Lists the immediate children of `dir_path`, reporting why enumeration failed.
///
/// # Behavior
/// - Directories come before files
/// - Each group is ordered by name, byte-wise and case-sensitive
/// - Entries that vanish or cannot be inspected mid-listing are skipped
pub fn try_list_directory(dir_path: &Path, options: &ListOptions) -> Result<Vec<FileEntry>> {
    let (mut dirs, mut files) = read_children(dir_path, options)?;
    dirs.append(&mut files);
    Ok(dirs)
}

/// Reads and sorts children, returning directories and files separately
fn read_children(
    dir_path: &Path,
    options: &ListOptions,
) -> Result<(Vec<FileEntry>, Vec<FileEntry>)> {
    let entries = fs::read_dir(dir_path).map_err(|e| FsViewError::from_io(e, dir_path))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry in {}: {}", dir_path.display(), e);
                continue;
            }
        };

        let path = entry.path();

        if !options.show_hidden && entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        // Follows symlinks so a link to a directory lists as a directory
        if path.is_dir() {
            dirs.push(FileEntry::new(path, true));
        } else {
            files.push(FileEntry::new(path, false));
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok((dirs, files))
}

/// Builds a tree under `dir_path`, expanding `depth` levels of subdirectories.
///
/// Each level keeps at most [`MAX_TREE_DIRS`] directories and [`MAX_TREE_FILES`]
/// files; the rest are dropped without notice. Levels that cannot be read are empty.
pub fn build_tree(dir_path: &Path, depth: usize, options: &ListOptions) -> Vec<FileEntry> {
    let (mut dirs, mut files) = match read_children(dir_path, options) {
        Ok(children) => children,
        Err(e) => {
            log::debug!("tree level {} unreadable: {}", dir_path.display(), e);
            return Vec::new();
        }
    };

    dirs.truncate(MAX_TREE_DIRS);
    files.truncate(MAX_TREE_FILES);

    if depth > 1 {
        for dir in &mut dirs {
            dir.children = build_tree(&dir.path, depth - 1, options);
        }
    }

    dirs.append(&mut files);
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    mod file_entry_tests {
        use super::*;

        #[test]
        fn test_file_entry_new_takes_file_name() {
            let entry = FileEntry::new(PathBuf::from("/tmp/some/report.txt"), false);
            assert_eq!(entry.name, "report.txt");
            assert!(!entry.is_directory);
            assert!(entry.children.is_empty());
            assert_eq!(entry.type_label(), "File");
        }

        #[test]
        fn test_file_entry_root_uses_full_path() {
            let entry = FileEntry::new(PathBuf::from("/"), true);
            assert_eq!(entry.name, "/");
            assert_eq!(entry.type_label(), "Folder");
            assert_eq!(entry.icon(), classify::ICON_FOLDER);
        }

        #[test]
        fn test_flatten_depth_first() {
            let mut parent = FileEntry::new(PathBuf::from("p"), true);
            parent.children = vec![FileEntry::new(PathBuf::from("p/c.txt"), false)];
            let sibling = FileEntry::new(PathBuf::from("s.txt"), false);
            let entries = vec![parent, sibling];

            let rows = flatten(&entries);
            let shape: Vec<_> = rows.iter().map(|(d, e)| (*d, e.name.as_str())).collect();
            assert_eq!(shape, vec![(0, "p"), (1, "c.txt"), (0, "s.txt")]);
        }
    }

    mod listing_tests {
        use super::*;

        fn names(entries: &[FileEntry]) -> Vec<&str> {
            entries.iter().map(|e| e.name.as_str()).collect()
        }

        #[test]
        fn test_directories_before_files() {
            let temp_dir = TempDir::new().unwrap();
            let dir_path = temp_dir.path();

            fs::write(dir_path.join("b.txt"), b"b").unwrap();
            fs::create_dir(dir_path.join("A")).unwrap();
            fs::write(dir_path.join("a.txt"), b"a").unwrap();

            let entries = list_directory(dir_path);

            assert_eq!(names(&entries), vec!["A", "a.txt", "b.txt"]);
            assert!(entries[0].is_directory);
            assert!(!entries[1].is_directory);
        }

        #[test]
        fn test_each_group_sorted_by_name() {
            let temp_dir = TempDir::new().unwrap();
            let dir_path = temp_dir.path();

            for dir in ["zeta", "Alpha", "beta"] {
                fs::create_dir(dir_path.join(dir)).unwrap();
            }
            for file in ["z.rs", "B.md", "a.py"] {
                fs::write(dir_path.join(file), b"x").unwrap();
            }

            let entries = list_directory(dir_path);

            assert_eq!(
                names(&entries),
                vec!["Alpha", "beta", "zeta", "B.md", "a.py", "z.rs"]
            );
        }

        #[test]
        fn test_nonexistent_directory_is_empty() {
            let entries = list_directory(Path::new("/nonexistent/directory"));
            assert!(entries.is_empty());
        }

        #[test]
        fn test_try_list_reports_not_found() {
            let result =
                try_list_directory(Path::new("/nonexistent/directory"), &ListOptions::default());
            assert!(matches!(result, Err(FsViewError::NotFound(_))));
        }

        #[test]
        fn test_listing_a_file_is_empty() {
            let temp_dir = TempDir::new().unwrap();
            let file = temp_dir.path().join("plain.txt");
            fs::write(&file, b"x").unwrap();

            assert!(list_directory(&file).is_empty());
        }

        #[test]
        fn test_listing_is_not_recursive() {
            let temp_dir = TempDir::new().unwrap();
            let dir_path = temp_dir.path();
            fs::create_dir(dir_path.join("sub")).unwrap();
            fs::write(dir_path.join("sub").join("nested.txt"), b"n").unwrap();

            let entries = list_directory(dir_path);

            assert_eq!(names(&entries), vec!["sub"]);
            assert!(entries[0].children.is_empty());
        }

        #[test]
        fn test_hidden_entries_shown_by_default() {
            let temp_dir = TempDir::new().unwrap();
            let dir_path = temp_dir.path();
            fs::write(dir_path.join(".hidden"), b"h").unwrap();
            fs::write(dir_path.join("visible"), b"v").unwrap();

            assert_eq!(names(&list_directory(dir_path)), vec![".hidden", "visible"]);

            let options = ListOptions { show_hidden: false };
            assert_eq!(
                names(&list_directory_with_options(dir_path, &options)),
                vec!["visible"]
            );
        }
    }

    mod tree_tests {
        use super::*;

        #[test]
        fn test_tree_expands_requested_depth() {
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path();
            fs::create_dir_all(root.join("a").join("b")).unwrap();
            fs::write(root.join("a").join("b").join("deep.txt"), b"d").unwrap();
            fs::write(root.join("a").join("top.txt"), b"t").unwrap();

            let tree = build_tree(root, 2, &ListOptions::default());

            assert_eq!(tree.len(), 1);
            assert_eq!(tree[0].name, "a");
            let child_names: Vec<_> = tree[0].children.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(child_names, vec!["b", "top.txt"]);
            // third level is not expanded
            assert!(tree[0].children[0].children.is_empty());
        }

        #[test]
        fn test_tree_caps_entries_per_level() {
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path();
            for i in 0..(MAX_TREE_DIRS + 5) {
                fs::create_dir(root.join(format!("d{:03}", i))).unwrap();
            }
            for i in 0..(MAX_TREE_FILES + 7) {
                fs::write(root.join(format!("f{:03}.txt", i)), b"x").unwrap();
            }

            let tree = build_tree(root, 1, &ListOptions::default());

            let dirs = tree.iter().filter(|e| e.is_directory).count();
            let files = tree.iter().filter(|e| !e.is_directory).count();
            assert_eq!(dirs, MAX_TREE_DIRS);
            assert_eq!(files, MAX_TREE_FILES);
            assert_eq!(tree[0].name, "d000");
            assert_eq!(tree[MAX_TREE_DIRS].name, "f000.txt");
        }

        #[test]
        fn test_tree_of_missing_directory_is_empty() {
            let tree = build_tree(Path::new("/nonexistent/tree"), 3, &ListOptions::default());
            assert!(tree.is_empty());
        }

        #[test]
        fn test_tree_files_have_no_children() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("leaf.txt"), b"x").unwrap();

            let tree = build_tree(temp_dir.path(), 3, &ListOptions::default());
            assert!(tree.iter().all(|e| e.is_directory || e.children.is_empty()));
        }
    }
}
