use crate::config::ReplacementRule;
use crate::rules::apply_rules;

use std::{
    fmt,
    fs::{self, read_to_string},
    io::Write,
    path::Path,
};
use tempfile::NamedTempFile;

/// Whether changed files are written back or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// What happened to a file that could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and the file was rewritten.
    Updated,
    /// Content would change, but the run is a dry run.
    WouldUpdate,
    /// No rule matched; the file was not touched.
    Unchanged,
}

/// A per-file failure. The run reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    Read(String),
    Write(String),
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Read(cause) => write!(f, "read failed: {}", cause),
            RewriteError::Write(cause) => write!(f, "write failed: {}", cause),
        }
    }
}

/// Reads `path` as UTF-8, applies `rules`, and writes the result back when it
/// differs from what was read.
///
/// # Returns
///
/// * `Ok(FileOutcome::Unchanged)` if no rule changed the content. Nothing is
///   written, so the modification time is preserved.
/// * `Ok(FileOutcome::Updated)` after a successful rewrite in [`Mode::Write`].
/// * `Ok(FileOutcome::WouldUpdate)` for a changed file in [`Mode::DryRun`].
///
/// # Errors
///
/// * [`RewriteError::Read`] if the file cannot be opened or is not valid
///   UTF-8. No rule is applied.
/// * [`RewriteError::Write`] if the rewritten content cannot be stored.
pub fn process_file(
    path: &Path,
    rules: &[ReplacementRule],
    mode: Mode,
) -> Result<FileOutcome, RewriteError> {
    process_file_with(path, rules, mode, write_content)
}

/// [`process_file`] with the final store step supplied by the caller.
pub(crate) fn process_file_with<W>(
    path: &Path,
    rules: &[ReplacementRule],
    mode: Mode,
    mut store: W,
) -> Result<FileOutcome, RewriteError>
where
    W: FnMut(&Path, &str) -> Result<(), RewriteError>,
{
    let original = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(RewriteError::Read(e.to_string())),
    };

    let rewritten = apply_rules(&original, rules);
    if rewritten == original {
        return Ok(FileOutcome::Unchanged);
    }

    match mode {
        Mode::DryRun => Ok(FileOutcome::WouldUpdate),
        Mode::Write => {
            store(path, &rewritten)?;
            Ok(FileOutcome::Updated)
        }
    }
}

/// Replaces the file behind `path` with `content`.
///
/// The content goes to a temporary file in the same directory, which is then
/// renamed over the target, so a failed write never leaves a truncated file.
/// Symlinks are resolved first and the link itself is left in place. The
/// target's permissions carry over to the new file.
pub(crate) fn write_content(path: &Path, content: &str) -> Result<(), RewriteError> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = match NamedTempFile::new_in(dir) {
        Ok(f) => f,
        Err(e) => return Err(RewriteError::Write(e.to_string())),
    };

    if let Err(e) = tmp.write_all(content.as_bytes()) {
        return Err(RewriteError::Write(e.to_string()));
    }

    if let Ok(meta) = fs::metadata(&target) {
        if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
            return Err(RewriteError::Write(e.to_string()));
        }
    }

    match tmp.persist(&target) {
        Ok(_) => Ok(()),
        Err(e) => Err(RewriteError::Write(e.error.to_string())),
    }
}
