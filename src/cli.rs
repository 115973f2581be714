use crate::{
    banner::print_banner,
    config::{self, RenameConfig},
    prompt,
    renamer::{self, ConsoleReporter, RunSummary},
    rewrite::Mode,
};

use console::style;
use std::env;

/// Flags and arguments accepted on the command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    help: bool,
    version: bool,
    dry_run: bool,
    yes: bool,
    root: Option<String>,
}

/// Parses everything after the program name.
///
/// Returns `Err` with a message for unknown options or a second positional
/// argument.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => opts.help = true,
            "-V" | "--version" => opts.version = true,
            "-n" | "--dry-run" => opts.dry_run = true,
            "-y" | "--yes" => opts.yes = true,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(format!("unknown option `{}`", s));
            }
            s => {
                if opts.root.is_some() {
                    return Err(format!("unexpected argument `{}`", s));
                }
                opts.root = Some(s.to_string());
            }
        }
    }

    Ok(opts)
}

/// Whether to ask before touching files. Dry runs and `--yes` never ask, and
/// neither does an unattended session.
fn should_confirm(opts: &Options, attended: bool) -> bool {
    !opts.yes && !opts.dry_run && attended
}

/// Maps a finished run to the process exit code.
fn exit_code(summary: &RunSummary) -> i32 {
    if summary.has_failures() { 1 } else { 0 }
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
auricyn-rename {}

Rename the `bolt` brand to `auricyn` across a source tree.

USAGE:
    auricyn-rename [OPTIONS] [ROOT]

ARGS:
    ROOT             Source-tree root. Defaults to ${} or the current directory.

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information
    -n, --dry-run    List the files that would change without writing them
    -y, --yes        Do not ask for confirmation

DESCRIPTION:
    Known top-level files and the app, public, styles, docs and scripts
    directories are scanned. node_modules, .git and .bolt are never entered.
    A file is rewritten only when one of the replacements changed it.",
        env!("CARGO_PKG_VERSION"),
        config::ROOT_ENV_VAR
    );
}

fn print_summary(summary: &RunSummary, mode: Mode) {
    println!("{}", style("Renaming complete.").green().bold());

    let changed_label = match mode {
        Mode::Write => "updated",
        Mode::DryRun => "would update",
    };
    let line = format!(
        "{} scanned, {} {}, {} unchanged, {} skipped",
        summary.scanned, summary.updated, changed_label, summary.unchanged, summary.skipped
    );
    println!("{}", style(line).dim());

    if summary.write_failed > 0 {
        eprintln!(
            "{}",
            style(format!("{} file(s) could not be written.", summary.write_failed))
                .red()
                .bold()
        );
    }
}

/// Main CLI entry point for `auricyn-rename`.
///
/// 1. Parses flags and the optional root argument.
/// 2. Resolves the root (argument, then environment, then working directory).
/// 3. Prints the plan banner.
/// 4. Asks for confirmation when attended, unless `--yes` or `--dry-run`.
/// 5. Runs the rename pass and prints a summary.
///
/// # Exit Codes
///
/// * `0` – Completed, including runs where unreadable files were skipped.
/// * `1` – At least one file could not be written back.
/// * `2` – Invalid command-line usage.
///
/// # Errors
///
/// Returns `Err(())` if the working directory cannot be determined or the
/// confirmation prompt fails.
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red().bold());
            eprintln!("Run `auricyn-rename --help` for usage.");
            return Ok(2);
        }
    };

    if opts.help {
        print_help();
        return Ok(0);
    }

    if opts.version {
        println!("auricyn-rename {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let cwd = match env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: cannot read current directory ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };

    let root = config::resolve_root(
        opts.root.as_deref(),
        env::var(config::ROOT_ENV_VAR).ok(),
        &cwd,
    );
    let cfg = RenameConfig::for_root(root);
    let mode = if opts.dry_run {
        Mode::DryRun
    } else {
        Mode::Write
    };

    if !cfg.base_dir.is_dir() {
        eprintln!(
            "{}",
            style(format!(
                "Warning: {} is not a directory; nothing will be changed.",
                cfg.base_dir.display()
            ))
            .yellow()
            .bold()
        );
    }

    print_banner(&cfg, mode);

    if should_confirm(&opts, console::user_attended()) {
        let mut confirm_prompter = prompt::DialoguerConfirmPrompter;
        match prompt::confirm_start(&mut confirm_prompter, &cfg.base_dir) {
            Ok(true) => {}
            Ok(false) => {
                println!(
                    "{}",
                    style("Canceled by user. No changes made.").yellow().bold()
                );
                return Ok(0);
            }
            Err(e) => {
                eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
                return Err(());
            }
        }
    }

    let summary = renamer::run(&cfg, mode, &mut ConsoleReporter);
    print_summary(&summary, mode);

    Ok(exit_code(&summary))
}

#[cfg(test)]
mod tests {
    use super::{Options, exit_code, parse_args, should_confirm};
    use crate::renamer::RunSummary;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_default() {
        let opts = parse_args(&[]).expect("parse failed");
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn flags_and_root_are_parsed() {
        let opts = parse_args(&args(&["-n", "/srv/app", "--yes"])).expect("parse failed");
        assert!(opts.dry_run);
        assert!(opts.yes);
        assert_eq!(opts.root.as_deref(), Some("/srv/app"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let result = parse_args(&args(&["--force"]));
        assert_eq!(result.unwrap_err(), "unknown option `--force`");
    }

    #[test]
    fn second_root_is_rejected() {
        let result = parse_args(&args(&["a", "b"]));
        assert_eq!(result.unwrap_err(), "unexpected argument `b`");
    }

    #[test]
    fn confirmation_only_when_attended_and_writing() {
        let plain = Options::default();
        assert!(should_confirm(&plain, true));
        assert!(!should_confirm(&plain, false));

        let yes = Options {
            yes: true,
            ..Options::default()
        };
        assert!(!should_confirm(&yes, true));

        let dry = Options {
            dry_run: true,
            ..Options::default()
        };
        assert!(!should_confirm(&dry, true));
    }

    #[test]
    fn write_failures_set_exit_code() {
        let ok = RunSummary {
            skipped: 3,
            ..RunSummary::default()
        };
        assert_eq!(exit_code(&ok), 0);

        let failed = RunSummary {
            write_failed: 1,
            ..RunSummary::default()
        };
        assert_eq!(exit_code(&failed), 1);
    }
}
