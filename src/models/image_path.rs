use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Extensions accepted when no explicit filter is given.
const DEFAULT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp", ".tiff"];

static DEFAULT_SET: Lazy<ExtensionSet> = Lazy::new(|| ExtensionSet::new(DEFAULT_EXTENSIONS));

/// A filesystem path the scanner identified as an image by its extension.
///
/// Produced by the scanner, consumed by the decoder, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath {
    pub path: PathBuf,
    /// Normalized extension: lower-case, dot-prefixed (e.g. ".jpeg").
    pub extension: String,
}

impl ImagePath {
    /// Wraps a path, extracting its normalized extension.
    ///
    /// Returns `None` for paths without a UTF-8 extension.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))?;
        Some(Self { path, extension })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// An inclusion filter of normalized file extensions.
///
/// Immutable once constructed for a scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: BTreeSet<String>,
}

impl ExtensionSet {
    /// Builds a set from extension strings, normalizing each one:
    /// lower-cased, with a leading dot prepended if missing.
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = exts
            .into_iter()
            .map(|e| Self::normalize(e.as_ref()))
            .collect();
        Self { exts }
    }

    fn normalize(ext: &str) -> String {
        let lower = ext.to_lowercase();
        if lower.starts_with('.') {
            lower
        } else {
            format!(".{lower}")
        }
    }

    /// Case-insensitive membership test for a raw extension string.
    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(&Self::normalize(ext))
    }

    /// Whether the path's extension is in the set. Paths without an
    /// extension never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.contains(e))
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(|s| s.as_str())
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}
