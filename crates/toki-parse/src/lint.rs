//! Token document linting.
//!
//! Collects structural, reference and accessibility findings into one list
//! instead of stopping at the first error:
//! - Structural validation problems
//! - Unresolved or circular aliases
//! - Tokens whose flattened names collide in exported output
//! - Low text/background contrast in themes
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use toki_core::ThemeSet;
//! use toki_parse::lint::{self, Severity};
//!
//! let source = json!({ "a": { "value": "{missing}" } });
//! let issues = lint::lint(&source, &ThemeSet::new());
//!
//! assert!(lint::has_errors(&issues));
//! assert_eq!(issues[0].severity, Severity::Error);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use toki_color::{WcagLevel, contrast_ratio, hex_to_rgb, perceived_brightness};
use toki_core::{Diagnostic, ThemeSet, TokenError, TokenGroup, TokenPath, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::builder::build;
use crate::resolve::alias_errors;
use crate::themes::resolve_theme;

/// Foreground token checked against the background in every theme.
pub const TEXT_TOKEN: &str = "color.text.primary";
/// Background token checked against the foreground in every theme.
pub const BACKGROUND_TOKEN: &str = "color.background.default";
/// Minimum YIQ brightness difference between text and background.
pub const MIN_BRIGHTNESS_DIFFERENCE: f64 = 50.0;

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning - output is produced but may be wrong.
    Warning,
    /// Error - parsing or export would fail.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Categories of lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    /// Structural validation problem.
    Structure,
    /// Alias pointing nowhere or at a group.
    UnresolvedReference,
    /// Alias chain that loops.
    CircularReference,
    /// Two tokens that flatten to the same exported name.
    DuplicateName,
    /// Theme that cannot be merged or resolved.
    Theme,
    /// Text and background too close in perceived brightness.
    LowBrightnessDifference,
    /// Text and background below the WCAG AA contrast ratio.
    LowContrast,
}

/// A lint finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Severity level.
    pub severity: Severity,
    /// Issue category.
    pub category: IssueCategory,
    /// Human-readable message.
    pub message: String,
    /// Related element (token path or theme name).
    pub context: Option<String>,
}

impl Issue {
    fn new(
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
        context: Option<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            context,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Lints a token document and a theme collection.
///
/// `themes` may be empty. Never fails: every problem becomes an [`Issue`].
pub fn lint(source: &Value, themes: &ThemeSet) -> Vec<Issue> {
    let mut issues = Vec::new();

    match build(source) {
        Ok((group, diagnostics)) => {
            check_structure(&diagnostics, &mut issues);
            check_references(&group, &mut issues);
            check_names(&group, &mut issues);
        }
        Err(e) => {
            let diagnostic = Diagnostic::new(TokenPath::root(), e.to_string());
            check_structure(&[diagnostic], &mut issues);
        }
    }
    for theme in themes.names() {
        check_theme(themes, theme, &mut issues);
    }

    debug!(issues = issues.len(), "lint finished");
    issues
}

/// Validation diagnostics become errors.
fn check_structure(diagnostics: &[Diagnostic], issues: &mut Vec<Issue>) {
    for diagnostic in diagnostics {
        issues.push(Issue::new(
            Severity::Error,
            IssueCategory::Structure,
            diagnostic.to_string(),
            Some(diagnostic.path.to_string()),
        ));
    }
}

/// One error per broken alias chain in the leniently built tree.
fn check_references(group: &TokenGroup, issues: &mut Vec<Issue>) {
    for e in alias_errors(group) {
        let (category, context) = match &e {
            TokenError::UnresolvedReference { token, .. } => {
                (IssueCategory::UnresolvedReference, Some(token.to_string()))
            }
            TokenError::CircularReference { cycle } => (
                IssueCategory::CircularReference,
                cycle.first().map(ToString::to_string),
            ),
            _ => (IssueCategory::Structure, None),
        };
        issues.push(Issue::new(Severity::Error, category, e.to_string(), context));
    }
}

/// Tokens whose paths flatten to the same exported variable name.
fn check_names(group: &TokenGroup, issues: &mut Vec<Issue>) {
    let mut seen: HashMap<String, TokenPath> = HashMap::new();
    for (path, _) in group.tokens() {
        let flat = path.flat_name();
        if let Some(first) = seen.get(&flat) {
            issues.push(Issue::new(
                Severity::Warning,
                IssueCategory::DuplicateName,
                format!("tokens '{first}' and '{path}' both export as '{flat}'"),
                Some(path.to_string()),
            ));
        } else {
            seen.insert(flat, path);
        }
    }
}

/// Text/background readability within one theme.
fn check_theme(themes: &ThemeSet, name: &str, issues: &mut Vec<Issue>) {
    let tree = match resolve_theme(themes, name) {
        Ok(tree) => tree,
        Err(e) => {
            issues.push(Issue::new(
                Severity::Error,
                IssueCategory::Theme,
                format!("theme '{name}' cannot be resolved: {e}"),
                Some(name.to_string()),
            ));
            return;
        }
    };

    let (Some(text), Some(background)) = (color_at(&tree, TEXT_TOKEN), color_at(&tree, BACKGROUND_TOKEN))
    else {
        trace!(theme = name, "no text/background pair; skipping contrast");
        return;
    };

    let (Some(text_rgb), Some(background_rgb)) = (hex_to_rgb(text), hex_to_rgb(background)) else {
        issues.push(Issue::new(
            Severity::Info,
            IssueCategory::LowContrast,
            format!("theme '{name}': {TEXT_TOKEN} or {BACKGROUND_TOKEN} is not a hex color; contrast not checked"),
            Some(name.to_string()),
        ));
        return;
    };

    let difference = (perceived_brightness(text_rgb) - perceived_brightness(background_rgb)).abs();
    if difference < MIN_BRIGHTNESS_DIFFERENCE {
        issues.push(Issue::new(
            Severity::Warning,
            IssueCategory::LowBrightnessDifference,
            format!(
                "theme '{name}': low brightness difference between {TEXT_TOKEN} and {BACKGROUND_TOKEN} ({difference:.0}, minimum {MIN_BRIGHTNESS_DIFFERENCE:.0})"
            ),
            Some(name.to_string()),
        ));
    }

    let ratio = contrast_ratio(text, background);
    let level = WcagLevel::Aa;
    if ratio < level.threshold() {
        issues.push(Issue::new(
            Severity::Warning,
            IssueCategory::LowContrast,
            format!(
                "theme '{name}': contrast ratio {ratio:.2}:1 between {TEXT_TOKEN} and {BACKGROUND_TOKEN} is below {level} ({:.1}:1)",
                level.threshold()
            ),
            Some(name.to_string()),
        ));
    }
}

fn color_at<'a>(tree: &'a TokenTree, path: &str) -> Option<&'a str> {
    tree.get(&TokenPath::parse(path))?.value.as_str()
}

/// Returns true if there are any errors.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

/// Returns true if there are any warnings or errors.
pub fn has_warnings(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity >= Severity::Warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;
    use crate::themes::parse_themes;
    use serde_json::json;

    fn themes(entries: Value) -> ThemeSet {
        parse_themes(&json!({ "themes": entries }), ParseOptions::default()).unwrap()
    }

    fn pair(text: &str, background: &str) -> Value {
        json!({
            "color": {
                "text": { "primary": { "value": text, "type": "color" } },
                "background": { "default": { "value": background, "type": "color" } }
            }
        })
    }

    fn categories(issues: &[Issue]) -> Vec<IssueCategory> {
        issues.iter().map(|i| i.category).collect()
    }

    #[test]
    fn clean_document() {
        let source = json!({ "color": { "a": { "value": "#ffffff", "type": "color" } } });
        let set = themes(json!([{ "name": "light", "tokens": pair("#111111", "#ffffff") }]));
        let issues = lint(&source, &set);
        assert!(issues.is_empty(), "{issues:?}");
        assert!(!has_warnings(&issues));
    }

    #[test]
    fn structure_problems_are_errors() {
        let issues = lint(&json!({ "a": 1, "b": { "value": null } }), &ThemeSet::new());
        assert_eq!(categories(&issues), [IssueCategory::Structure, IssueCategory::Structure]);
        assert!(has_errors(&issues));
        assert_eq!(issues[0].context.as_deref(), Some("a"));
    }

    #[test]
    fn non_object_root() {
        let issues = lint(&json!([1]), &ThemeSet::new());
        assert_eq!(categories(&issues), [IssueCategory::Structure]);
    }

    #[test]
    fn reference_problems_are_errors() {
        let missing = lint(&json!({ "a": { "value": "{nope}" } }), &ThemeSet::new());
        assert_eq!(categories(&missing), [IssueCategory::UnresolvedReference]);
        assert_eq!(missing[0].context.as_deref(), Some("a"));

        let cycle = lint(
            &json!({ "a": { "value": "{b}" }, "b": { "value": "{a}" } }),
            &ThemeSet::new(),
        );
        assert_eq!(categories(&cycle), [IssueCategory::CircularReference]);
        assert!(cycle[0].message.contains("a -> b -> a"));
    }

    #[test]
    fn every_broken_alias_is_an_issue() {
        let issues = lint(
            &json!({
                "a": { "value": "{x}" },
                "b": { "value": "{y}" },
                "c": { "value": "{c}" },
                "d": { "value": "{e}" },
                "e": { "value": "{d}" }
            }),
            &ThemeSet::new(),
        );
        assert_eq!(
            categories(&issues),
            [
                IssueCategory::UnresolvedReference,
                IssueCategory::UnresolvedReference,
                IssueCategory::CircularReference,
                IssueCategory::CircularReference,
            ]
        );
        let contexts: Vec<_> = issues.iter().filter_map(|i| i.context.as_deref()).collect();
        assert_eq!(contexts, ["a", "b", "c", "d"]);
        assert!(issues[3].message.contains("d -> e -> d"));
    }

    #[test]
    fn flattened_name_collision() {
        let source = json!({
            "space": { "sm": { "value": "4px" } },
            "space-sm": { "value": "8px" }
        });
        let issues = lint(&source, &ThemeSet::new());
        assert_eq!(categories(&issues), [IssueCategory::DuplicateName]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!has_errors(&issues));
        assert!(has_warnings(&issues));
    }

    #[test]
    fn escaped_name_collision() {
        let source = json!({
            "color": {
                "primary text": { "value": "#111111", "type": "color" },
                "primary_text": { "value": "#222222", "type": "color" }
            }
        });
        let issues = lint(&source, &ThemeSet::new());
        assert_eq!(categories(&issues), [IssueCategory::DuplicateName]);
        assert!(issues[0].message.contains("'color-primary_text'"), "{}", issues[0].message);
    }

    #[test]
    fn low_contrast_theme() {
        let set = themes(json!([{ "name": "muddy", "tokens": pair("#777777", "#888888") }]));
        let issues = lint(&json!({}), &set);
        assert_eq!(
            categories(&issues),
            [IssueCategory::LowBrightnessDifference, IssueCategory::LowContrast]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues[1].message.contains("below AA"));
    }

    #[test]
    fn contrast_only_warning() {
        // Bright enough apart by YIQ, still below 4.5:1.
        let set = themes(json!([{ "name": "soft", "tokens": pair("#888888", "#ffffff") }]));
        let issues = lint(&json!({}), &set);
        assert_eq!(categories(&issues), [IssueCategory::LowContrast]);
        assert!(issues[0].message.contains("3.54:1"), "{}", issues[0].message);
    }

    #[test]
    fn inherited_pair_is_checked() {
        let set = themes(json!([
            { "name": "base", "tokens": pair("#111111", "#ffffff") },
            { "name": "broken", "extends": "base", "tokens": {
                "color": { "text": { "primary": { "value": "#fefefe", "type": "color" } } }
            } }
        ]));
        let issues = lint(&json!({}), &set);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.context.as_deref() == Some("broken")));
    }

    #[test]
    fn unresolvable_theme() {
        let set = themes(json!([{ "name": "orphan", "extends": "ghost" }]));
        let issues = lint(&json!({}), &set);
        assert_eq!(categories(&issues), [IssueCategory::Theme]);
        assert!(has_errors(&issues));
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Info), "INFO");
        assert_eq!(format!("{}", Severity::Warning), "WARN");
        assert_eq!(format!("{}", Severity::Error), "ERROR");
    }
}
