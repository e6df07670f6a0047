use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A discovered PHP source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path to the file.
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Check whether a path looks like a PHP source file.
pub fn is_php_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
}

/// File finder for discovering PHP source files under a root directory.
pub struct FileFinder;

impl FileFinder {
    pub fn new() -> Self {
        Self
    }

    /// Recursively find all `.php` files under `root`. Traversal order is
    /// unspecified; the analysis result does not depend on it.
    pub fn find_files(&self, root: &Path) -> Vec<SourceFile> {
        debug!("Scanning for PHP files in: {}", root.display());

        let walker = WalkBuilder::new(root)
            .hidden(true)        // Skip hidden files
            .git_ignore(true)    // Respect .gitignore
            .git_global(true)    // Respect global gitignore
            .git_exclude(true)   // Respect .git/info/exclude
            .ignore(true)        // Respect .ignore files
            .follow_links(false) // Don't follow symlinks
            .build();

        let files: Vec<SourceFile> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();
                if !is_php_file(path) {
                    return None;
                }
                trace!("Found: {}", path.display());
                Some(SourceFile::new(path.to_path_buf()))
            })
            .collect();

        debug!("Found {} PHP files", files.len());
        files
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new()
    }
}
