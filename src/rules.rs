use crate::config::ReplacementRule;

/// Applies `rules` in order to `content` and returns the result.
///
/// Each rule sees the output of the rules before it. Matching is literal and
/// case-sensitive; occurrences are replaced left to right without overlap.
/// Rules with an empty pattern are ignored.
///
/// # Examples
///
/// ```
/// use auricyn_rename::config::RenameConfig;
/// use auricyn_rename::rules::apply_rules;
///
/// let cfg = RenameConfig::for_root(".");
/// assert_eq!(apply_rules("try bolt.new", &cfg.rules), "try auricyn.new");
/// ```
pub fn apply_rules(content: &str, rules: &[ReplacementRule]) -> String {
    rules
        .iter()
        .filter(|rule| !rule.pattern.is_empty())
        .fold(content.to_string(), |acc, rule| {
            if acc.contains(rule.pattern.as_str()) {
                acc.replace(rule.pattern.as_str(), &rule.replacement)
            } else {
                acc
            }
        })
}
