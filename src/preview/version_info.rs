//! Version resources embedded in executables and libraries

use std::path::Path;

/// String fields of a version resource; `None` when absent or empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub file_version: Option<String>,
    pub product_name: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
}

/// Reads the version resource of `path`.
///
/// Only Windows exposes version resources; elsewhere this is always `None`.
pub fn read_version_info(path: &Path) -> Option<VersionInfo> {
    platform::read(path)
}

#[cfg(windows)]
mod platform {
    use super::VersionInfo;
    use std::ffi::{c_void, OsStr};
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;
    use windows_sys::Win32::Storage::FileSystem::{
        GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW,
    };

    /// US English, Unicode: used when the resource has no translation table
    const FALLBACK_TRANSLATION: (u16, u16) = (0x0409, 0x04B0);

    fn to_wide(s: &OsStr) -> Vec<u16> {
        s.encode_wide().chain(std::iter::once(0)).collect()
    }

    pub fn read(path: &Path) -> Option<VersionInfo> {
        let wide_path = to_wide(path.as_os_str());
        let mut handle = 0u32;

        let size = unsafe { GetFileVersionInfoSizeW(wide_path.as_ptr(), &mut handle) };
        if size == 0 {
            return None;
        }

        let mut block = vec![0u8; size as usize];
        let ok = unsafe {
            GetFileVersionInfoW(wide_path.as_ptr(), 0, size, block.as_mut_ptr() as *mut c_void)
        };
        if ok == 0 {
            return None;
        }

        let (lang, codepage) = translation(&block).unwrap_or(FALLBACK_TRANSLATION);
        let field = |name: &str| {
            query_string(
                &block,
                &format!("\\StringFileInfo\\{:04x}{:04x}\\{}", lang, codepage, name),
            )
        };

        Some(VersionInfo {
            file_version: field("FileVersion"),
            product_name: field("ProductName"),
            company_name: field("CompanyName"),
            description: field("FileDescription"),
        })
    }

    fn query(block: &[u8], sub_block: &str) -> Option<(*const c_void, u32)> {
        let wide_sub_block = to_wide(OsStr::new(sub_block));
        let mut value: *mut c_void = std::ptr::null_mut();
        let mut len = 0u32;

        let ok = unsafe {
            VerQueryValueW(
                block.as_ptr() as *const c_void,
                wide_sub_block.as_ptr(),
                &mut value,
                &mut len,
            )
        };

        if ok == 0 || value.is_null() || len == 0 {
            None
        } else {
            Some((value as *const c_void, len))
        }
    }

    fn translation(block: &[u8]) -> Option<(u16, u16)> {
        let (value, len) = query(block, "\\VarFileInfo\\Translation")?;
        if len < 4 {
            return None;
        }
        // Points into `block`, which outlives this read
        let pair = unsafe { std::slice::from_raw_parts(value as *const u16, 2) };
        Some((pair[0], pair[1]))
    }

    fn query_string(block: &[u8], sub_block: &str) -> Option<String> {
        let (value, len) = query(block, sub_block)?;
        // String values report their length in UTF-16 units
        let units = unsafe { std::slice::from_raw_parts(value as *const u16, len as usize) };
        let text = String::from_utf16_lossy(units);
        let text = text.trim_end_matches('\0').trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[cfg(not(windows))]
mod platform {
    use super::VersionInfo;
    use std::path::Path;

    pub fn read(_path: &Path) -> Option<VersionInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_version_info() {
        assert!(read_version_info(Path::new("/nonexistent/app.dll")).is_none());
    }

    #[test]
    fn test_non_pe_file_has_no_version_info() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fake.exe");
        std::fs::write(&path, b"not a portable executable").unwrap();

        assert!(read_version_info(&path).is_none());
    }
}
