//! LRU cache of preview payloads, invalidated when a file's mtime changes

use super::Preview;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of cached previews
pub const CACHE_SIZE: usize = 10;

#[derive(Debug, Clone)]
struct CachedPreview {
    preview: Preview,
    modified: SystemTime,
}

#[derive(Debug)]
pub struct PreviewCache {
    cache: HashMap<PathBuf, CachedPreview>,
    /// Order of access for LRU eviction (most recent at end)
    access_order: Vec<PathBuf>,
    max_size: usize,
}

impl PreviewCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::new(),
            access_order: Vec::new(),
            max_size,
        }
    }

    /// Returns the cached preview if the file has not changed since it was stored
    pub fn get(&mut self, path: &Path, modified: SystemTime) -> Option<Preview> {
        let cached = self.cache.get(path)?;
        if cached.modified != modified {
            self.remove(path);
            return None;
        }

        let preview = cached.preview.clone();
        self.touch(path);
        Some(preview)
    }

    /// Stores a preview, evicting the least recently used entry when full
    pub fn insert(&mut self, path: PathBuf, modified: SystemTime, preview: Preview) {
        if self.cache.contains_key(&path) {
            self.access_order.retain(|p| p != &path);
        } else if self.cache.len() >= self.max_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.cache.remove(&oldest);
        }

        self.cache.insert(path.clone(), CachedPreview { preview, modified });
        self.access_order.push(path);
    }

    pub fn remove(&mut self, path: &Path) {
        self.cache.remove(path);
        self.access_order.retain(|p| p != path);
    }

    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }

    fn touch(&mut self, path: &Path) {
        self.access_order.retain(|p| p != path);
        self.access_order.push(path.to_path_buf());
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(CACHE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn text(s: &str) -> Preview {
        Preview::Text(s.to_string())
    }

    fn t(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn holds(cache: &PreviewCache, path: &str) -> bool {
        cache.cache.contains_key(Path::new(path))
    }

    #[test]
    fn test_cache_new() {
        let cache = PreviewCache::new(5);
        assert_eq!(cache.len(), 0);
        assert!(cache.access_order.is_empty());
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = PreviewCache::new(5);
        let path = PathBuf::from("/test/file.txt");

        cache.insert(path.clone(), t(1), text("hello"));

        match cache.get(&path, t(1)) {
            Some(Preview::Text(s)) => assert_eq!(s, "hello"),
            other => panic!("Expected cached text, got {:?}", other),
        }
    }

    #[test]
    fn test_cache_stale_entry_is_dropped() {
        let mut cache = PreviewCache::new(5);
        let path = PathBuf::from("/test/file.txt");
        cache.insert(path.clone(), t(1), text("old"));

        assert!(cache.get(&path, t(2)).is_none());
        assert!(!holds(&cache, "/test/file.txt"));
        assert!(cache.access_order.is_empty());
    }

    #[test]
    fn test_cache_lru_eviction() {
        let mut cache = PreviewCache::new(3);
        for i in 0..3 {
            cache.insert(PathBuf::from(format!("/test/file{}.txt", i)), t(0), text("x"));
        }

        cache.insert(PathBuf::from("/test/file3.txt"), t(0), text("x"));

        assert_eq!(cache.len(), 3);
        assert!(!holds(&cache, "/test/file0.txt"));
        assert!(holds(&cache, "/test/file3.txt"));
    }

    #[test]
    fn test_cache_access_updates_order() {
        let mut cache = PreviewCache::new(3);
        for i in 0..3 {
            cache.insert(PathBuf::from(format!("/test/file{}.txt", i)), t(0), text("x"));
        }

        let _ = cache.get(Path::new("/test/file0.txt"), t(0));
        cache.insert(PathBuf::from("/test/file3.txt"), t(0), text("x"));

        assert!(holds(&cache, "/test/file0.txt"));
        assert!(!holds(&cache, "/test/file1.txt"));
    }

    #[test]
    fn test_cache_update_existing_does_not_evict() {
        let mut cache = PreviewCache::new(2);
        cache.insert(PathBuf::from("/a"), t(0), text("a"));
        cache.insert(PathBuf::from("/b"), t(0), text("b"));
        cache.insert(PathBuf::from("/a"), t(1), text("a2"));

        assert_eq!(cache.len(), 2);
        assert!(holds(&cache, "/b"));
        let updated = cache.get(Path::new("/a"), t(1));
        assert!(matches!(updated, Some(Preview::Text(ref s)) if s == "a2"));
    }

    #[test]
    fn test_cache_remove() {
        let mut cache = PreviewCache::new(5);
        cache.insert(PathBuf::from("/a"), t(0), text("a"));
        cache.remove(Path::new("/a"));
        assert_eq!(cache.len(), 0);
        assert!(cache.access_order.is_empty());
    }
}
