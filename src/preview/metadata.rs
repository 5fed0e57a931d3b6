//! Key/value metadata tables for files that are not rendered directly

use super::version_info::read_version_info;
use crate::domain::ClassifiedFile;
use crate::error::{FsViewError, Result};
use chrono::{DateTime, Local};
use image::GenericImageView;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::SystemTime;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Resolution reported for images that carry none
const DEFAULT_DPI: f64 = 96.0;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of a metadata table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Which extra rows a file gets beyond the base ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatsProfile {
    Executable,
    Audio,
    Image,
    Plain,
}

impl StatsProfile {
    fn for_extension(extension: &str) -> Self {
        match extension {
            "exe" | "dll" => StatsProfile::Executable,
            "mp3" => StatsProfile::Audio,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" => StatsProfile::Image,
            _ => StatsProfile::Plain,
        }
    }
}

/// Formats a byte count as e.g. "1.5 MB".
///
/// Divides by 1024 while the quotient rounds (ties to even) to at least one,
/// stopping at TB. The shown decimal rounds halves away from zero.
pub fn format_file_size(bytes: u64) -> String {
    let mut number = bytes as f64;
    let mut unit = 0;

    while unit < SIZE_UNITS.len() - 1 && (number / 1024.0).round_ties_even() >= 1.0 {
        number /= 1024.0;
        unit += 1;
    }

    // `{:.1}` alone would round 1.25 down to 1.2
    let number = (number * 10.0).round() / 10.0;
    format!("{:.1} {}", number, SIZE_UNITS[unit])
}

fn format_time(time: io::Result<SystemTime>) -> String {
    match time {
        Ok(t) => DateTime::<Local>::from(t).format(TIMESTAMP_FORMAT).to_string(),
        Err(e) => {
            log::debug!("timestamp unavailable: {}", e);
            "Unknown".to_string()
        }
    }
}

/// Builds the metadata table for `path`.
///
/// Base rows (name, size, timestamps, extension) are always present; rows
/// specific to executables, audio and images are added when they can be read
/// and silently left out otherwise.
pub fn file_stats(path: &Path, classified: &ClassifiedFile) -> Result<Vec<MetadataEntry>> {
    let metadata = fs::metadata(path).map_err(|e| FsViewError::from_io(e, path))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut stats = vec![
        MetadataEntry::new("File Name", name),
        MetadataEntry::new("File Size", format_file_size(metadata.len())),
        MetadataEntry::new("Created", format_time(metadata.created())),
        MetadataEntry::new("Modified", format_time(metadata.modified())),
        MetadataEntry::new("Extension", classified.display_extension()),
    ];

    match StatsProfile::for_extension(&classified.extension) {
        StatsProfile::Executable => add_executable_stats(&mut stats, path),
        StatsProfile::Audio => add_audio_stats(&mut stats),
        StatsProfile::Image => {
            if let Err(e) = add_image_stats(&mut stats, path) {
                log::debug!("image stats unavailable for {}: {}", path.display(), e);
            }
        }
        StatsProfile::Plain => {}
    }

    Ok(stats)
}

fn add_executable_stats(stats: &mut Vec<MetadataEntry>, path: &Path) {
    let Some(info) = read_version_info(path) else {
        log::debug!("no version resource in {}", path.display());
        return;
    };

    let fields = [
        ("File Version", info.file_version),
        ("Product Name", info.product_name),
        ("Company", info.company_name),
        ("Description", info.description),
    ];

    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            stats.push(MetadataEntry::new(key, value));
        }
    }
}

// No tag parsing; audio files only get their type row.
fn add_audio_stats(stats: &mut Vec<MetadataEntry>) {
    stats.push(MetadataEntry::new("Type", "Audio File"));
}

fn add_image_stats(stats: &mut Vec<MetadataEntry>, path: &Path) -> Result<()> {
    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    let (dpi_x, dpi_y) = read_dpi(path).unwrap_or((DEFAULT_DPI, DEFAULT_DPI));

    stats.push(MetadataEntry::new(
        "Dimensions",
        format!("{} x {}", width, height),
    ));
    stats.push(MetadataEntry::new(
        "DPI",
        format!("{} x {}", dpi_x.round() as i64, dpi_y.round() as i64),
    ));
    stats.push(MetadataEntry::new("Pixel Format", format!("{:?}", img.color())));
    Ok(())
}

/// Reads the stored resolution of a PNG, JPEG (JFIF or EXIF) or BMP file
pub fn read_dpi(path: &Path) -> Option<(f64, f64)> {
    let mut header = Vec::with_capacity(64 * 1024);
    File::open(path)
        .ok()?
        .take(64 * 1024)
        .read_to_end(&mut header)
        .ok()?;

    if header.starts_with(b"\x89PNG\r\n\x1a\n") {
        png_dpi(&header)
    } else if header.starts_with(&[0xFF, 0xD8]) {
        jpeg_dpi(&header)
    } else if header.starts_with(b"BM") {
        bmp_dpi(&header)
    } else {
        None
    }
}

const INCHES_PER_METRE: f64 = 0.0254;

fn field<const N: usize>(bytes: &[u8], at: usize) -> Option<[u8; N]> {
    bytes.get(at..at.checked_add(N)?)?.try_into().ok()
}

fn be_u32(bytes: &[u8], at: usize) -> Option<u32> {
    field(bytes, at).map(u32::from_be_bytes)
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u16> {
    field(bytes, at).map(u16::from_be_bytes)
}

fn le_i32(bytes: &[u8], at: usize) -> Option<i32> {
    field(bytes, at).map(i32::from_le_bytes)
}

/// Byte order of a TIFF structure inside an EXIF segment
#[derive(Debug, Clone, Copy)]
enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn u16(self, bytes: &[u8], at: usize) -> Option<u16> {
        field(bytes, at).map(match self {
            ByteOrder::Little => u16::from_le_bytes,
            ByteOrder::Big => u16::from_be_bytes,
        })
    }

    fn u32(self, bytes: &[u8], at: usize) -> Option<u32> {
        field(bytes, at).map(match self {
            ByteOrder::Little => u32::from_le_bytes,
            ByteOrder::Big => u32::from_be_bytes,
        })
    }
}

/// Walks PNG chunks looking for `pHYs` with a metre unit
fn png_dpi(bytes: &[u8]) -> Option<(f64, f64)> {
    let mut at = 8;
    while let Some(len) = be_u32(bytes, at) {
        let kind: [u8; 4] = field(bytes, at.checked_add(4)?)?;
        let data = at + 8;
        match &kind {
            b"pHYs" => {
                let x = be_u32(bytes, data)?;
                let y = be_u32(bytes, data + 4)?;
                let unit = *bytes.get(data + 8)?;
                return (unit == 1)
                    .then(|| (x as f64 * INCHES_PER_METRE, y as f64 * INCHES_PER_METRE));
            }
            b"IDAT" | b"IEND" => return None,
            _ => at = data.checked_add(len as usize)?.checked_add(4)?,
        }
    }
    None
}

const JPEG_APP0: u8 = 0xE0;
const JPEG_APP1: u8 = 0xE1;
const JPEG_SOS: u8 = 0xDA;
const JPEG_EOI: u8 = 0xD9;

const EXIF_X_RESOLUTION: u16 = 0x011A;
const EXIF_Y_RESOLUTION: u16 = 0x011B;
const EXIF_RESOLUTION_UNIT: u16 = 0x0128;
const EXIF_UNIT_CENTIMETRE: u16 = 3;

/// Walks the JPEG header segments; JFIF density wins over EXIF resolution
fn jpeg_dpi(bytes: &[u8]) -> Option<(f64, f64)> {
    let mut exif = None;
    let mut at = 2;

    while *bytes.get(at)? == 0xFF {
        let marker = *bytes.get(at + 1)?;
        if marker == JPEG_SOS || marker == JPEG_EOI {
            break;
        }
        let len = be_u16(bytes, at + 2)? as usize;
        // Segments may be cut short by the header read limit
        let end = (at + 2 + len).min(bytes.len());
        let segment = bytes.get(at + 4..end).unwrap_or_default();

        match marker {
            JPEG_APP0 if segment.starts_with(b"JFIF\0") => {
                if let Some(dpi) = jfif_density(segment) {
                    return Some(dpi);
                }
            }
            JPEG_APP1 if exif.is_none() && segment.starts_with(b"Exif\0\0") => {
                exif = exif_dpi(&segment[6..]);
            }
            _ => {}
        }

        at += 2 + len;
    }

    exif
}

/// Density fields of a JFIF APP0 payload
fn jfif_density(segment: &[u8]) -> Option<(f64, f64)> {
    let unit = *segment.get(7)?;
    let x = be_u16(segment, 8)? as f64;
    let y = be_u16(segment, 10)? as f64;
    match unit {
        1 => Some((x, y)),
        2 => Some((x * 2.54, y * 2.54)),
        _ => None,
    }
}

/// XResolution / YResolution from IFD0 of an EXIF TIFF block
fn exif_dpi(tiff: &[u8]) -> Option<(f64, f64)> {
    let order = match tiff.get(0..2)? {
        b"II" => ByteOrder::Little,
        b"MM" => ByteOrder::Big,
        _ => return None,
    };
    let ifd = order.u32(tiff, 4)? as usize;
    let count = order.u16(tiff, ifd)? as usize;

    let rational = |offset: usize| -> Option<f64> {
        let num = order.u32(tiff, offset)?;
        let den = order.u32(tiff, offset.checked_add(4)?)?;
        (den != 0).then(|| num as f64 / den as f64)
    };

    let (mut x, mut y, mut unit) = (None, None, 2);
    for i in 0..count {
        let entry = ifd.checked_add(2 + i * 12)?;
        let value = entry.checked_add(8)?;
        match order.u16(tiff, entry)? {
            EXIF_X_RESOLUTION => x = rational(order.u32(tiff, value)? as usize),
            EXIF_Y_RESOLUTION => y = rational(order.u32(tiff, value)? as usize),
            EXIF_RESOLUTION_UNIT => unit = order.u16(tiff, value)?,
            _ => {}
        }
    }

    let (x, y) = (x?, y?);
    if unit == EXIF_UNIT_CENTIMETRE {
        Some((x * 2.54, y * 2.54))
    } else {
        Some((x, y))
    }
}

/// Pixels-per-metre fields of a BITMAPINFOHEADER
fn bmp_dpi(bytes: &[u8]) -> Option<(f64, f64)> {
    let x = le_i32(bytes, 38)?;
    let y = le_i32(bytes, 42)?;
    if x <= 0 || y <= 0 {
        return None;
    }
    Some((x as f64 * INCHES_PER_METRE, y as f64 * INCHES_PER_METRE))
}
