//! Directory scanner for discovering image files.
//!
//! Uses walkdir with a sort comparator that yields a deterministic order:
//! within each directory, files sorted case-insensitively by name, before
//! any subdirectory's contents; subdirectories visited top-down in the same
//! name order. Filesystem errors degrade to "no results".

use std::cmp::Ordering;
use std::path::PathBuf;

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::models::{ExtensionSet, ImagePath};

/// Parameters for one scan pass. Value object, built fresh per cycle.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Directory to scan. An empty path yields an empty result.
    pub directory: PathBuf,
    /// Extensions to include.
    pub extensions: ExtensionSet,
    /// Whether to walk subdirectories.
    pub recursive: bool,
    /// Stop after this many matches (early termination, not a post-filter).
    pub limit: Option<usize>,
    /// Maximum directory depth for recursive scans (0 = unlimited).
    pub max_depth: usize,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl ScanRequest {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extensions: ExtensionSet::default(),
            recursive: false,
            limit: None,
            max_depth: 0,
            follow_symlinks: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }
}

/// Scans for image files matching the request.
///
/// A missing or unreadable directory is not an error: the scan returns
/// whatever was collected before the failure, usually nothing.
pub fn scan(request: &ScanRequest) -> Vec<ImagePath> {
    if request.directory.as_os_str().is_empty() || request.limit == Some(0) {
        return Vec::new();
    }

    let mut walker = WalkDir::new(&request.directory)
        .follow_links(request.follow_symlinks)
        .min_depth(1)
        .sort_by(entry_order);

    if !request.recursive {
        walker = walker.max_depth(1);
    } else if request.max_depth > 0 {
        walker = walker.max_depth(request.max_depth);
    }

    let mut results = Vec::new();

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if !request.extensions.matches(entry.path()) {
            trace!(path = ?entry.path(), "Skipping non-matching file");
            continue;
        }
        if let Some(image) = ImagePath::from_path(entry.into_path()) {
            results.push(image);
            if request.limit.is_some_and(|limit| results.len() >= limit) {
                // The walker is lazy, so breaking here really stops the scan.
                break;
            }
        }
    }

    debug!(
        directory = ?request.directory,
        count = results.len(),
        "Scan complete"
    );

    results
}

/// Files before directories, then case-insensitive name order with a
/// bytewise tie-break. Keeps a directory's own files ahead of anything
/// inside its subdirectories.
fn entry_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir
        .cmp(&b_dir)
        .then_with(|| {
            a.file_name()
                .to_ascii_lowercase()
                .cmp(&b.file_name().to_ascii_lowercase())
        })
        .then_with(|| a.file_name().cmp(b.file_name()))
}
