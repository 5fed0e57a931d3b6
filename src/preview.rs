// Preview module: builds the payload shown for a file and renders images for the terminal

pub mod cache;
pub mod highlight;
pub mod metadata;
pub mod version_info;

pub use cache::PreviewCache;
pub use highlight::Highlighter;
pub use metadata::{file_stats, format_file_size, MetadataEntry};

use crate::domain::{ClassifiedFile, FileKind};
use crate::error::{FsViewError, Result};
use image::{DynamicImage, Pixel};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const UTF8_BOM: &str = "\u{feff}";

/// What the content pane needs to show one file
#[derive(Debug, Clone)]
pub enum Preview {
    /// Source text, highlighted by extension when rendered
    Code { content: String, extension: String },
    /// Plain text
    Text(String),
    /// Fully decoded image, shared between the cache and the display
    Image(Arc<DynamicImage>),
    /// Key/value table for binary files
    Metadata {
        title: String,
        entries: Vec<MetadataEntry>,
    },
}

impl Preview {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Preview::Code { .. } => "Code",
            Preview::Text(_) => "Text",
            Preview::Image(_) => "Image",
            Preview::Metadata { .. } => "File Information",
        }
    }
}

/// Reads a whole file as text, replacing invalid UTF-8 and dropping a BOM
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| FsViewError::from_io(e, path))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content
        .strip_prefix(UTF8_BOM)
        .unwrap_or(content.as_ref())
        .to_string())
}

/// Loads an image from a file path
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(FsViewError::NotFound(path.to_path_buf()));
    }
    Ok(image::open(path)?)
}

fn metadata_title(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("File Information: {}", name)
}

/// Builds the metadata table payload for any file
pub fn generate_file_info(path: &Path, classified: &ClassifiedFile) -> Result<Preview> {
    Ok(Preview::Metadata {
        title: metadata_title(path),
        entries: file_stats(path, classified)?,
    })
}

/// Generates the preview payload for a classified file
pub fn generate_preview(path: &Path, classified: &ClassifiedFile) -> Result<Preview> {
    match classified.kind {
        FileKind::Code => Ok(Preview::Code {
            content: read_text(path)?,
            extension: classified.extension.clone(),
        }),
        FileKind::Text => read_text(path).map(Preview::Text),
        FileKind::Image => Ok(Preview::Image(Arc::new(load_image(path)?))),
        FileKind::KnownBinary | FileKind::UnknownBinary => generate_file_info(path, classified),
    }
}

/// Generates previews, reusing payloads of files that have not changed
#[derive(Debug, Default)]
pub struct Previewer {
    cache: PreviewCache,
}

impl Previewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&mut self, path: &Path, classified: &ClassifiedFile) -> Result<Preview> {
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

        if let Some(modified) = modified {
            if let Some(cached) = self.cache.get(path, modified) {
                log::debug!("preview cache hit for {}", path.display());
                return Ok(cached);
            }
        }

        let preview = generate_preview(path, classified)?;

        if let Some(modified) = modified {
            self.cache.insert(path.to_path_buf(), modified, preview.clone());
            log::debug!(
                "cached preview of {} ({}/{} entries)",
                path.display(),
                self.cache.len(),
                cache::CACHE_SIZE
            );
        }

        Ok(preview)
    }

    /// Drops any cached payload for `path`
    pub fn invalidate(&mut self, path: &Path) {
        self.cache.remove(path);
    }
}

/// Calculates new dimensions to fit image within max width and height while preserving aspect ratio
pub fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if original_width == 0 || original_height == 0 {
        return (0, 0);
    }

    let width_ratio = max_width as f64 / original_width as f64;
    let height_ratio = max_height as f64 / original_height as f64;

    let ratio = width_ratio.min(height_ratio);

    if ratio >= 1.0 {
        // Image is smaller than max dimensions, don't upscale
        (original_width, original_height)
    } else {
        let new_width = ((original_width as f64 * ratio) as u32).max(1);
        let new_height = ((original_height as f64 * ratio) as u32).max(1);
        (new_width, new_height)
    }
}

/// Converts an image to styled lines using half-block characters for terminal display.
/// Uses the upper half block character (▀) with foreground color for the upper pixel
/// and background color for the lower pixel, effectively displaying 2 pixels per cell.
pub fn image_to_halfblock_lines(img: &DynamicImage, width: u32, height: u32) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // Ensure height is even for proper half-block rendering
    let height = if height.is_multiple_of(2) {
        height
    } else {
        height + 1
    };

    // Triangle keeps large photos responsive; Lanczos3 is too slow here
    let img = img.resize_exact(width, height, image::imageops::FilterType::Triangle);
    let img = img.to_rgb8();

    let term_height = height / 2;
    let mut lines = Vec::with_capacity(term_height as usize);

    for y in 0..term_height {
        let upper_y = y * 2;
        let lower_y = upper_y + 1;

        let mut spans = Vec::with_capacity(width as usize);

        for x in 0..width {
            let upper_pixel = img.get_pixel(x, upper_y).to_rgb();
            let lower_pixel = img.get_pixel(x, lower_y).to_rgb();

            let style = Style::default()
                .fg(Color::Rgb(upper_pixel[0], upper_pixel[1], upper_pixel[2]))
                .bg(Color::Rgb(lower_pixel[0], lower_pixel[1], lower_pixel[2]));

            spans.push(Span::styled("▀", style));
        }

        lines.push(Line::from(spans));
    }

    lines
}
