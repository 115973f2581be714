use std::path::{Path, PathBuf};

/// Environment variable consulted for the source-tree root when no positional
/// argument is given.
pub const ROOT_ENV_VAR: &str = "AURICYN_RENAME_ROOT";

const DEFAULT_DIRS: &[&str] = &["app", "public", "styles", "docs", "scripts"];

const DEFAULT_FILES: &[&str] = &[
    "package.json",
    "README.md",
    "PROJECT.md",
    "FAQ.md",
    "CONTRIBUTING.md",
    "CHANGES.md",
    "Dockerfile",
    "docker-compose.yaml",
    "electron-builder.yml",
    "electron-update.yml",
    "uno.config.ts",
    "vite.config.ts",
    "vite-electron.config.ts",
];

const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".json", ".md", ".html", ".css", ".scss", ".sh", ".yml",
    ".yaml",
];

const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", ".bolt"];

// Multi-token patterns must come before the bare tokens they contain.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("bolt.diy", "auricyn"),
    ("bolt.new", "auricyn.new"),
    ("Bolt.new", "Auricyn.new"),
    ("Bolt.DIY", "Auricyn"),
    ("Bolt.diy", "Auricyn"),
    ("bolt", "auricyn"),
    ("Bolt", "Auricyn"),
    ("BOLT", "AURICYN"),
];

/// A literal pattern and the text that replaces every occurrence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// The policy for a single rename run.
///
/// Everything is relative to `base_dir`: `files` are processed directly when
/// they exist, `dirs` are walked recursively. Only files whose names end in
/// one of `extensions` are picked up during a walk, and directories named in
/// `excluded_dirs` are never entered.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub base_dir: PathBuf,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
    pub rules: Vec<ReplacementRule>,
}

impl RenameConfig {
    /// Builds the default bolt → auricyn policy rooted at `base_dir`.
    pub fn for_root(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dirs: to_owned_list(DEFAULT_DIRS),
            files: to_owned_list(DEFAULT_FILES),
            extensions: to_owned_list(DEFAULT_EXTENSIONS),
            excluded_dirs: to_owned_list(DEFAULT_EXCLUDED_DIRS),
            rules: DEFAULT_RULES
                .iter()
                .map(|(p, r)| ReplacementRule::new(*p, *r))
                .collect(),
        }
    }

    /// Returns `true` if `file_name` ends with an allow-listed extension.
    ///
    /// Matching is a case-sensitive suffix test, so `README.MD` is not picked
    /// up while `types.d.ts` is.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Picks the source-tree root.
///
/// Precedence: the positional argument, then the value of
/// [`ROOT_ENV_VAR`] (ignored when empty), then `cwd`.
///
/// # Examples
///
/// ```
/// use auricyn_rename::config::resolve_root;
/// use std::path::{Path, PathBuf};
///
/// let root = resolve_root(None, Some("/srv/app".to_string()), Path::new("/tmp"));
/// assert_eq!(root, PathBuf::from("/srv/app"));
/// ```
pub fn resolve_root(arg: Option<&str>, env_value: Option<String>, cwd: &Path) -> PathBuf {
    if let Some(a) = arg {
        return PathBuf::from(a);
    }

    match env_value {
        Some(v) if !v.trim().is_empty() => PathBuf::from(v),
        _ => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_keep_specific_patterns_first() {
        let cfg = RenameConfig::for_root("/tmp/x");
        let patterns: Vec<&str> = cfg.rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec![
                "bolt.diy", "bolt.new", "Bolt.new", "Bolt.DIY", "Bolt.diy", "bolt", "Bolt", "BOLT"
            ]
        );
    }

    #[test]
    fn extension_allow_list_is_suffix_based() {
        let cfg = RenameConfig::for_root("/tmp/x");
        assert!(cfg.matches_extension("index.tsx"));
        assert!(cfg.matches_extension("types.d.ts"));
        assert!(cfg.matches_extension("docker-compose.yaml"));
        assert!(!cfg.matches_extension("logo.png"));
        assert!(!cfg.matches_extension("setup.exe"));
        assert!(!cfg.matches_extension("Dockerfile"));
    }

    #[test]
    fn node_modules_is_excluded() {
        let cfg = RenameConfig::for_root("/tmp/x");
        assert!(cfg.is_excluded_dir("node_modules"));
        assert!(cfg.is_excluded_dir(".git"));
        assert!(!cfg.is_excluded_dir("components"));
    }

    #[test]
    fn root_prefers_argument() {
        let root = resolve_root(Some("/a"), Some("/b".to_string()), Path::new("/c"));
        assert_eq!(root, PathBuf::from("/a"));
    }

    #[test]
    fn root_falls_back_to_env_then_cwd() {
        let root = resolve_root(None, Some("/b".to_string()), Path::new("/c"));
        assert_eq!(root, PathBuf::from("/b"));

        let root = resolve_root(None, Some("  ".to_string()), Path::new("/c"));
        assert_eq!(root, PathBuf::from("/c"));

        let root = resolve_root(None, None, Path::new("/c"));
        assert_eq!(root, PathBuf::from("/c"));
    }
}
