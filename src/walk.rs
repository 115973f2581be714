use crate::config::RenameConfig;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Collects every path a rename run should look at, in processing order.
///
/// Explicit files come first (in configured order, only those that exist),
/// followed by the allow-listed files found under each configured directory.
/// Excluded directories are pruned together with their subtrees. A path is
/// returned at most once.
///
/// Walk errors such as an unreadable directory are handed to `on_error`
/// with the offending path and cause; the walk carries on.
pub fn collect_candidates<F>(config: &RenameConfig, mut on_error: F) -> Vec<PathBuf>
where
    F: FnMut(&Path, String),
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for name in &config.files {
        let path = config.base_dir.join(name);
        if path.exists() && seen.insert(path.clone()) {
            out.push(path);
        }
    }

    for name in &config.dirs {
        let dir = config.base_dir.join(name);
        if !dir.is_dir() {
            continue;
        }

        let walker = WalkDir::new(&dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_pruned(config, e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let at = e.path().unwrap_or(dir.as_path()).to_path_buf();
                    on_error(&at, e.to_string());
                    continue;
                }
            };

            if !is_candidate_file(&entry) {
                continue;
            }

            let wanted = entry
                .file_name()
                .to_str()
                .map(|n| config.matches_extension(n))
                .unwrap_or(false);

            if wanted && seen.insert(entry.path().to_path_buf()) {
                out.push(entry.into_path());
            }
        }
    }

    out
}

// Symlinked directories are never descended into, but a link to anything
// else is read through the link. A dangling link is kept so the read fails
// loudly later.
fn is_candidate_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }

    entry.path_is_symlink()
        && !fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
}

// The walk root itself is never pruned, only directories found beneath it.
fn is_pruned(config: &RenameConfig, entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|n| config.is_excluded_dir(n))
            .unwrap_or(false)
}
