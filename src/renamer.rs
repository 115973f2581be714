use crate::config::RenameConfig;
use crate::rewrite::{FileOutcome, Mode, RewriteError, process_file_with, write_content};
use crate::walk::collect_candidates;

use console::style;
use std::path::Path;

/// Receives per-file progress from [`run`].
///
/// Decouples the rename pass from stdout so it can be observed in tests.
pub trait Reporter {
    fn updated(&mut self, path: &Path);
    fn would_update(&mut self, path: &Path);
    fn skipped(&mut self, path: &Path, cause: &str);
    fn write_failed(&mut self, path: &Path, cause: &str);
}

/// Prints one line per event to stdout, colored when attached to a terminal.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn updated(&mut self, path: &Path) {
        println!("{} {}", style("Updated").green(), path.display());
    }

    fn would_update(&mut self, path: &Path) {
        println!("{} {}", style("Would update").cyan(), path.display());
    }

    fn skipped(&mut self, path: &Path, cause: &str) {
        println!(
            "{} {}: {}",
            style("Skipping").yellow(),
            path.display(),
            cause
        );
    }

    fn write_failed(&mut self, path: &Path, cause: &str) {
        println!(
            "{} {}: {}",
            style("Failed to write").red().bold(),
            path.display(),
            cause
        );
    }
}

/// Tally of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub write_failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.write_failed > 0
    }
}

/// Runs one rename pass over the tree described by `config`.
///
/// Files are handled one at a time: read, rewrite, and (in [`Mode::Write`])
/// store back before the next candidate is considered. Per-file errors are
/// reported and never stop the pass. A missing base directory produces an
/// empty summary.
pub fn run<R: Reporter>(config: &RenameConfig, mode: Mode, reporter: &mut R) -> RunSummary {
    run_with(config, mode, reporter, write_content)
}

/// [`run`] with the store step for changed files supplied by the caller.
pub(crate) fn run_with<R, W>(
    config: &RenameConfig,
    mode: Mode,
    reporter: &mut R,
    mut store: W,
) -> RunSummary
where
    R: Reporter,
    W: FnMut(&Path, &str) -> Result<(), RewriteError>,
{
    let mut summary = RunSummary::default();

    let candidates = collect_candidates(config, |path, cause| {
        summary.skipped += 1;
        reporter.skipped(path, &cause);
    });

    for path in &candidates {
        summary.scanned += 1;

        match process_file_with(path, &config.rules, mode, &mut store) {
            Ok(FileOutcome::Updated) => {
                summary.updated += 1;
                reporter.updated(path);
            }
            Ok(FileOutcome::WouldUpdate) => {
                summary.updated += 1;
                reporter.would_update(path);
            }
            Ok(FileOutcome::Unchanged) => {
                summary.unchanged += 1;
            }
            Err(RewriteError::Read(cause)) => {
                summary.skipped += 1;
                reporter.skipped(path, &cause);
            }
            Err(RewriteError::Write(cause)) => {
                summary.write_failed += 1;
                reporter.write_failed(path, &cause);
            }
        }
    }

    summary
}
