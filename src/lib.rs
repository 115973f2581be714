//! # auricyn-rename
//!
//! A CLI tool to rename the `bolt` brand to `auricyn` across a source tree.
//!
//! This crate provides functionality to:
//! - Enumerate known top-level files and walk the app, public, styles, docs
//!   and scripts directories, skipping `node_modules`
//! - Apply an ordered list of literal, case-sensitive replacements
//! - Rewrite a file only when its content actually changed
//!
//! ## Usage
//!
//! ```bash
//! # Rewrite the tree rooted at the current directory
//! auricyn-rename
//!
//! # Preview changes under another root
//! auricyn-rename --dry-run ~/src/my-app
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`config`] - Paths, extensions and replacement rules for a run
//! - [`rules`] - Ordered literal replacement
//! - [`walk`] - Candidate file enumeration
//! - [`rewrite`] - Per-file read, transform and conditional write
//! - [`renamer`] - The rename pass and its progress reporting
//! - [`prompt`] - Confirmation prompt abstraction
//! - [`banner`] - Boxed plan shown before a run: root, mode and rules

pub mod banner;
pub mod cli;
pub mod config;
pub mod prompt;
pub mod renamer;
pub mod rewrite;
pub mod rules;
pub mod walk;
