use crate::config::RenameConfig;
use crate::rewrite::Mode;

use console::{measure_text_width, style};
use std::iter;

/// Prints a boxed summary of what a rename run is about to do.
///
/// The box is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so that inline ANSI styling does not throw
/// off the padding. Borders are styled separately from the content.
///
/// # Examples
///
/// ```no_run
/// use auricyn_rename::banner::print_banner;
/// use auricyn_rename::config::RenameConfig;
/// use auricyn_rename::rewrite::Mode;
///
/// let cfg = RenameConfig::for_root("/srv/app");
/// print_banner(&cfg, Mode::DryRun);
/// ```
pub fn print_banner(config: &RenameConfig, mode: Mode) {
    let lines = banner_lines(config, mode);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible;
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Builds the banner content: title, root, mode, then the rule list in the
/// order the rules will be applied.
///
/// Mode lines may carry ANSI styling; measure them with
/// `console::measure_text_width`, not `str::len()`.
fn banner_lines(config: &RenameConfig, mode: Mode) -> Vec<String> {
    let top = [
        "Rebrand source tree".to_string(),
        String::new(),
        format!("Root: {}", config.base_dir.display()),
    ]
    .into_iter();

    let mode_line = match mode {
        Mode::Write => style("Changed files will be rewritten in place.")
            .yellow()
            .bold()
            .to_string(),
        Mode::DryRun => style("Dry run: no file will be modified.")
            .cyan()
            .bold()
            .to_string(),
    };

    let rules = config
        .rules
        .iter()
        .enumerate()
        .map(|(i, r)| format!("  {}) {} -> {}", i + 1, r.pattern, r.replacement));

    top.chain(iter::once(mode_line))
        .chain(iter::once(String::new()))
        .chain(iter::once("Replacements, applied in order:".to_string()))
        .chain(rules)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::banner_lines;
    use crate::config::RenameConfig;
    use crate::rewrite::Mode;

    #[test]
    fn banner_lists_rules_in_order() {
        let cfg = RenameConfig::for_root("/srv/app");
        let lines = banner_lines(&cfg, Mode::Write);
        let s = lines.join("\n");

        assert!(s.contains("Root: /srv/app"));
        assert!(s.contains("Changed files will be rewritten in place."));

        let first = s.find("1) bolt.diy -> auricyn").expect("first rule missing");
        let sixth = s.find("6) bolt -> auricyn").expect("bare rule missing");
        assert!(first < sixth);
    }

    #[test]
    fn banner_dry_run_mode_line() {
        let cfg = RenameConfig::for_root("/srv/app");
        let lines = banner_lines(&cfg, Mode::DryRun);
        let s = lines.join("\n");

        assert!(s.contains("Dry run: no file will be modified."));
        assert!(!s.contains("rewritten in place"));
    }
}
