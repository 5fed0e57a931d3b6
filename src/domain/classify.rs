//! Extension table shared by content classification and icon selection

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected when the extension is not recognised
pub const SNIFF_LEN: u64 = 1024;

pub const ICON_FOLDER: &str = "📁";
pub const ICON_DOCUMENT: &str = "📄";
pub const ICON_IMAGE: &str = "🖼️";
pub const ICON_EXECUTABLE: &str = "⚙️";
pub const ICON_ARCHIVE: &str = "📦";
pub const ICON_CSHARP: &str = "💻";
pub const ICON_SCRIPT: &str = "🟨";
pub const ICON_WEB: &str = "🌐";

/// How a file's content is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Source, markup and config files shown with highlighting
    Code,
    /// Plain text
    Text,
    /// Decodable raster image
    Image,
    /// Recognised non-text format, shown as a metadata table
    KnownBinary,
    /// Unrecognised extension whose first bytes contain a zero byte
    UnknownBinary,
}

use FileKind::{Code, Image, KnownBinary, Text};

/// Every recognised extension, its kind and its icon.
static EXTENSION_TABLE: &[(&str, FileKind, &str)] = &[
    ("cs", Code, ICON_CSHARP),
    ("js", Code, ICON_SCRIPT),
    ("ts", Code, ICON_SCRIPT),
    ("html", Code, ICON_WEB),
    ("htm", Code, ICON_WEB),
    ("css", Code, ICON_DOCUMENT),
    ("xml", Code, ICON_DOCUMENT),
    ("json", Code, ICON_DOCUMENT),
    ("yml", Code, ICON_DOCUMENT),
    ("yaml", Code, ICON_DOCUMENT),
    ("cpp", Code, ICON_DOCUMENT),
    ("c", Code, ICON_DOCUMENT),
    ("h", Code, ICON_DOCUMENT),
    ("java", Code, ICON_DOCUMENT),
    ("py", Code, ICON_DOCUMENT),
    ("rb", Code, ICON_DOCUMENT),
    ("php", Code, ICON_DOCUMENT),
    ("go", Code, ICON_DOCUMENT),
    ("rs", Code, ICON_DOCUMENT),
    ("sql", Code, ICON_DOCUMENT),
    ("txt", Text, ICON_DOCUMENT),
    ("log", Text, ICON_DOCUMENT),
    ("md", Text, ICON_DOCUMENT),
    ("ini", Text, ICON_DOCUMENT),
    ("cfg", Text, ICON_DOCUMENT),
    ("conf", Text, ICON_DOCUMENT),
    ("bat", Text, ICON_DOCUMENT),
    ("sh", Text, ICON_DOCUMENT),
    ("jpg", Image, ICON_IMAGE),
    ("jpeg", Image, ICON_IMAGE),
    ("png", Image, ICON_IMAGE),
    ("gif", Image, ICON_IMAGE),
    ("bmp", Image, ICON_IMAGE),
    ("tiff", Image, ICON_IMAGE),
    ("ico", Image, ICON_IMAGE),
    ("exe", KnownBinary, ICON_EXECUTABLE),
    ("dll", KnownBinary, ICON_EXECUTABLE),
    ("mp3", KnownBinary, ICON_DOCUMENT),
    ("mp4", KnownBinary, ICON_DOCUMENT),
    ("avi", KnownBinary, ICON_DOCUMENT),
    ("zip", KnownBinary, ICON_ARCHIVE),
    ("rar", KnownBinary, ICON_ARCHIVE),
    ("7z", KnownBinary, ICON_ARCHIVE),
    ("pdf", KnownBinary, ICON_DOCUMENT),
    ("docx", KnownBinary, ICON_DOCUMENT),
    ("xlsx", KnownBinary, ICON_DOCUMENT),
];

fn lookup(extension: &str) -> Option<&'static (&'static str, FileKind, &'static str)> {
    let ext = normalize_extension(extension);
    EXTENSION_TABLE.iter().find(|(e, _, _)| *e == ext)
}

/// Lowercases an extension and drops a leading dot
pub fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_lowercase()
}

/// Lowercase extension of `path` without the dot, empty when there is none
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(normalize_extension)
        .unwrap_or_default()
}

impl FileKind {
    /// Kind from the extension table alone; `None` when the content must be sniffed
    pub fn from_extension(extension: &str) -> Option<Self> {
        lookup(extension).map(|(_, kind, _)| *kind)
    }
}

/// Icon for a filesystem node, driven by the same table as classification
pub fn icon_for(path: &Path, is_directory: bool) -> &'static str {
    if is_directory {
        return ICON_FOLDER;
    }
    lookup(&extension_of(path))
        .map(|(_, _, icon)| *icon)
        .unwrap_or(ICON_DOCUMENT)
}

/// Result of classifying one file for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub kind: FileKind,
    /// Lowercase, without the leading dot
    pub extension: String,
}

impl ClassifiedFile {
    /// Extension as shown in metadata tables: uppercase with its dot
    pub fn display_extension(&self) -> String {
        if self.extension.is_empty() {
            String::new()
        } else {
            format!(".{}", self.extension.to_uppercase())
        }
    }
}

/// Returns `true` when none of the first [`SNIFF_LEN`] bytes is zero
pub fn sniff_is_text(path: &Path) -> io::Result<bool> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut prefix)?;
    Ok(!prefix.contains(&0))
}

/// Classifies `path` by extension, falling back to a zero-byte sniff of its prefix.
///
/// A sniff that cannot read the file classifies it as [`FileKind::UnknownBinary`].
pub fn classify(path: &Path) -> ClassifiedFile {
    let extension = extension_of(path);

    let kind = FileKind::from_extension(&extension).unwrap_or_else(|| match sniff_is_text(path) {
        Ok(true) => FileKind::Text,
        Ok(false) => FileKind::UnknownBinary,
        Err(e) => {
            log::debug!("content sniff failed for {}: {}", path.display(), e);
            FileKind::UnknownBinary
        }
    });

    ClassifiedFile { kind, extension }
}
