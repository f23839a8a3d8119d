//! Local image assets with fallback substitution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where an image reference ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    /// Pixel size when the file could be probed.
    pub dimensions: Option<(u32, u32)>,
    pub is_fallback: bool,
}

/// Resolves asset paths against a root directory.
///
/// Each path is probed once; both successes and failures are remembered.
#[derive(Debug, Default)]
pub struct ImageResolver {
    root: PathBuf,
    probed: HashMap<PathBuf, Option<(u32, u32)>>,
}

impl ImageResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            probed: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Asset references are site-absolute (`/imgs/a.jpg`); map them under the root.
    pub fn locate(&self, reference: &str) -> PathBuf {
        self.root.join(reference.trim_start_matches('/'))
    }

    fn probe(&mut self, path: &Path) -> Option<(u32, u32)> {
        if let Some(cached) = self.probed.get(path) {
            return *cached;
        }
        let result = match image::image_dimensions(path) {
            Ok(dims) => Some(dims),
            Err(e) => {
                tracing::warn!("Image {} failed to load: {}", path.display(), e);
                None
            }
        };
        self.probed.insert(path.to_path_buf(), result);
        result
    }

    /// Use `primary` if it loads, otherwise `fallback`.
    pub fn resolve_image(&mut self, primary: &str, fallback: &str) -> ResolvedImage {
        let primary_path = self.locate(primary);
        if let Some(dims) = self.probe(&primary_path) {
            return ResolvedImage {
                path: primary_path,
                dimensions: Some(dims),
                is_fallback: false,
            };
        }

        let fallback_path = self.locate(fallback);
        let dimensions = self.probe(&fallback_path);
        ResolvedImage {
            path: fallback_path,
            dimensions,
            is_fallback: true,
        }
    }

    /// Number of distinct paths that failed to load.
    pub fn failed_count(&self) -> usize {
        self.probed.values().filter(|v| v.is_none()).count()
    }

    /// Forget every probe result.
    pub fn clear(&mut self) {
        self.probed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, w: u32, h: u32) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbImage::new(w, h).save(path).unwrap();
    }

    #[test]
    fn test_primary_used_when_it_loads() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("imgs/ide.png"), 4, 3);

        let mut resolver = ImageResolver::new(dir.path());
        let resolved = resolver.resolve_image("/imgs/ide.png", "imgs/fallback.png");
        assert!(!resolved.is_fallback);
        assert_eq!(resolved.dimensions, Some((4, 3)));
        assert_eq!(resolved.path, dir.path().join("imgs/ide.png"));
    }

    #[test]
    fn test_missing_primary_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("imgs/fallback.png"), 2, 2);

        let mut resolver = ImageResolver::new(dir.path());
        let resolved = resolver.resolve_image("/imgs/missing.jpg", "imgs/fallback.png");
        assert!(resolved.is_fallback);
        assert_eq!(resolved.path, dir.path().join("imgs/fallback.png"));
        assert_eq!(resolved.dimensions, Some((2, 2)));
    }

    #[test]
    fn test_corrupt_primary_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("imgs/broken.jpg");
        std::fs::create_dir_all(bad.parent().unwrap()).unwrap();
        std::fs::write(&bad, b"not an image").unwrap();

        let mut resolver = ImageResolver::new(dir.path());
        let resolved = resolver.resolve_image("/imgs/broken.jpg", "imgs/fallback.png");
        assert!(resolved.is_fallback);
        // Fallback is missing too, so both failures are recorded
        assert_eq!(resolved.dimensions, None);
        assert_eq!(resolver.failed_count(), 2);
    }

    #[test]
    fn test_failure_is_remembered() {
        let dir = tempfile::tempdir().unwrap();
        let mut resolver = ImageResolver::new(dir.path());
        assert!(resolver.resolve_image("/a.png", "/b.png").is_fallback);

        // Creating the file afterwards does not change the cached outcome
        write_png(&dir.path().join("a.png"), 1, 1);
        assert!(resolver.resolve_image("/a.png", "/b.png").is_fallback);

        resolver.clear();
        assert!(!resolver.resolve_image("/a.png", "/b.png").is_fallback);
    }
}
