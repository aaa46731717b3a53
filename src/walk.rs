//! Directory walker — finds C sources and feeds them to the scanner.

use crate::model::FunctionSet;
use crate::parser::{self, ScanOutcome};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// File suffixes scanned by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h"];

/// Walk configuration derived from the command line.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Suffixes without the leading dot.
    pub extensions: Vec<String>,
    /// Patterns matched against paths relative to the root.
    pub excludes: Vec<glob::Pattern>,
    /// Visit directory entries in file-name order instead of OS order.
    pub sorted: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            excludes: Vec::new(),
            sorted: false,
        }
    }
}

impl WalkOptions {
    /// Compile `--exclude` patterns, failing on the first invalid one.
    pub fn with_excludes(mut self, patterns: &[String]) -> Result<Self, glob::PatternError> {
        self.excludes = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    fn matches_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .and_then(|stem| stem.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
        })
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        self.excludes.iter().any(|pat| pat.matches_path(rel))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Recursively scan `root`, appending every function found to `functions`.
///
/// Hidden entries are skipped without descent. Unreadable entries and files
/// are skipped silently, and so is a root that is not a directory. Returns
/// the paths that were scanned, in visit order.
pub fn walk(root: &Path, options: &WalkOptions, functions: &mut FunctionSet) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(true);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    let mut scanned = Vec::new();
    let entries = walker.into_iter().filter_entry(|e| {
        e.depth() == 0 || (!is_hidden(e) && !options.is_excluded(root, e.path()))
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.depth() == 0 && !entry.file_type().is_dir() {
            debug!("{} is not a directory", entry.path().display());
            break;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            trace!("skipping non-UTF-8 name: {}", entry.path().display());
            continue;
        };
        if !options.matches_extension(name) {
            continue;
        }

        if functions.is_full() {
            debug!("function limit {} reached, stopping walk", functions.capacity());
            break;
        }

        println!("  → {}", entry.path().display());
        match parser::scan_file(entry.path(), functions) {
            Ok(ScanOutcome::Complete) => {}
            Ok(ScanOutcome::Truncated) => {
                debug!(
                    "function limit {} reached in {}",
                    functions.capacity(),
                    entry.path().display()
                );
            }
            Err(err) => {
                debug!("{}", err);
                continue;
            }
        }
        scanned.push(entry.into_path());
    }

    scanned
}
