//! Integration tests for toki crates.
//!
//! End-to-end tests that drive the parser, color engine and exporters
//! together over the documents in `fixtures/`.

use std::path::PathBuf;

/// Absolute path of a file in `fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[cfg(test)]
mod tests {
    use super::fixture;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use toki_color::{WcagLevel, contrast_ratio, find_accessible_color, generate_shades, is_accessible};
    use toki_core::{TokenError, TokenPath, TokenTree, TokenType};
    use toki_export::{ExportOptions, Exporter, Format, TokenExporter, export};
    use toki_parse::lint::{self, IssueCategory, Severity};
    use toki_parse::{ParseOptions, ProjectConfig, parse_file, parse_str, read_source, resolve_theme};

    fn color(tree: &TokenTree, path: &str) -> String {
        tree.get(&TokenPath::parse(path))
            .and_then(|t| t.value.as_str())
            .unwrap_or_else(|| panic!("no color at {path}"))
            .to_string()
    }

    /// Alias to a sibling token resolves to the target's literal and type.
    #[test]
    fn test_alias_resolves_to_target() {
        let tree = parse_str(
            r##"{ "color": {
                "primary": { "value": "#ff0000", "type": "color" },
                "link": { "value": "{color.primary}" }
            } }"##,
            ParseOptions::validating(),
        )
        .unwrap();

        let link = tree.get(&TokenPath::parse("color.link")).unwrap();
        assert_eq!(link.value.as_str(), Some("#ff0000"));
        assert_eq!(link.token_type, Some(TokenType::Color));
    }

    #[test]
    fn test_mutual_aliases_fail() {
        let err = parse_str(
            r#"{ "a": { "value": "{b}" }, "b": { "value": "{a}" } }"#,
            ParseOptions::default(),
        )
        .unwrap_err();

        let TokenError::CircularReference { cycle } = &err else {
            panic!("expected a cycle, got {err}");
        };
        assert!(cycle.contains(&TokenPath::parse("a")));
        assert!(cycle.contains(&TokenPath::parse("b")));
    }

    #[test]
    fn test_yaml_and_json_sources_agree() {
        let json = parse_file(fixture("tokens.json"), ParseOptions::validating()).unwrap();
        let yaml = parse_file(fixture("tokens.yaml"), ParseOptions::validating()).unwrap();
        assert_eq!(json, yaml);
        assert_eq!(json.len(), 9);

        for format in Format::ALL {
            let options = ExportOptions::default();
            assert_eq!(
                export(&json, format, &options).unwrap(),
                export(&yaml, format, &options).unwrap(),
                "{format}"
            );
        }
    }

    #[test]
    fn test_project_themes_inherit_and_override() {
        let config = ProjectConfig::from_file(fixture("toki.config.json")).unwrap();
        let themes = config.theme_set(ParseOptions::validating()).unwrap();
        assert_eq!(themes.names().collect::<Vec<_>>(), ["light", "dim"]);

        let light = resolve_theme(&themes, "light").unwrap();
        assert_eq!(color(&light, "color.background.default"), "#ffffff");
        assert_eq!(color(&light, "color.accent"), "#111827");

        // Child value wins; parent alias still resolves through the merge.
        let dim = resolve_theme(&themes, "dim").unwrap();
        assert_eq!(color(&dim, "color.background.default"), "#374151");
        assert_eq!(color(&dim, "color.text.primary"), "#111827");
        assert_eq!(color(&dim, "color.accent"), "#111827");
    }

    #[test]
    fn test_project_lint_flags_dim_theme_only() {
        let config = ProjectConfig::from_file(fixture("toki.config.json")).unwrap();
        let source = config.load_source().unwrap();
        let themes = config.theme_set(ParseOptions::validating()).unwrap();

        let issues = lint::lint(&source, &themes);
        assert!(!lint::has_errors(&issues));
        assert!(lint::has_warnings(&issues));

        let categories: Vec<_> = issues.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            [IssueCategory::LowBrightnessDifference, IssueCategory::LowContrast]
        );
        assert!(issues.iter().all(|i| i.context.as_deref() == Some("dim")));
        assert!(issues[1].message.contains("1.72:1"), "{}", issues[1].message);
    }

    #[test]
    fn test_lint_broken_document() {
        let source = read_source(&fixture("broken.json")).unwrap();
        let issues = lint::lint(&source, &Default::default());
        assert!(lint::has_errors(&issues));

        let find = |category: IssueCategory| issues.iter().find(|i| i.category == category);
        let structure = find(IssueCategory::Structure).unwrap();
        assert_eq!(structure.severity, Severity::Error);
        assert_eq!(structure.context.as_deref(), Some("color.bad"));

        let cycle = find(IssueCategory::CircularReference).unwrap();
        assert!(cycle.message.contains("color.a -> color.b -> color.a"), "{}", cycle.message);

        let duplicate = find(IssueCategory::DuplicateName).unwrap();
        assert_eq!(duplicate.severity, Severity::Warning);
        assert!(duplicate.message.contains("'space-sm'"));
    }

    #[test]
    fn test_strict_parse_reports_every_problem() {
        let err = parse_file(fixture("broken.json"), ParseOptions::validating()).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].path, TokenPath::parse("color.bad"));
    }

    /// Mirrors what `toki build` writes for the fixture project.
    #[test]
    fn test_build_outputs() {
        let config = ProjectConfig::from_file(fixture("toki.config.json")).unwrap();
        let tree = config.load_tokens(ParseOptions::validating()).unwrap();
        let dir = tempdir().unwrap();

        let mut options = ExportOptions::default().with_dark_selector("[data-theme=\"dark\"]");
        options.prefix = config.prefix.clone();

        let mut written = Vec::new();
        for name in &config.formats {
            let format: Format = name.parse().unwrap();
            let exporter = TokenExporter::new(format, options.clone());
            let path = dir.path().join(exporter.file_name("tokens"));
            std::fs::write(&path, exporter.export(&tree).unwrap()).unwrap();
            written.push(path);
        }
        assert_eq!(written.len(), 3);

        let css = std::fs::read_to_string(dir.path().join("tokens.css")).unwrap();
        let (light, dark) = css.split_once("\n[data-theme=\"dark\"] {\n").unwrap();
        assert!(light.starts_with(":root {\n  /* Brand red */\n  --ds-color-primary: #ff0000;\n"));
        assert!(light.contains("  --ds-color-link: #ff0000;\n"));
        assert!(light.contains("  --ds-font-family-body: Inter, sans-serif;\n"));
        assert!(light.contains("  --ds-font-weight-bold: 700;\n"));
        assert!(dark.contains("  --ds-color-background-default: #999999;\n"));
        assert!(!dark.contains("--ds-space-sm"));

        let scss = std::fs::read_to_string(dir.path().join("tokens.scss")).unwrap();
        assert!(scss.contains("$ds-space-md: 8px;\n"));

        let ts = std::fs::read_to_string(dir.path().join("tokens.ts")).unwrap();
        assert!(ts.contains("    sm: '4px',\n"));
        assert!(ts.ends_with("} as const;\n\nexport type Tokens = typeof tokens;\n"));
    }

    #[test]
    fn test_json_export_reparses() {
        let tree = parse_file(fixture("tokens.json"), ParseOptions::validating()).unwrap();
        let json = export(&tree, Format::Json, &ExportOptions::default()).unwrap();
        let again = parse_str(&json, ParseOptions::validating()).unwrap();
        assert_eq!(again, tree);
        assert_eq!(export(&again, Format::Json, &ExportOptions::default()).unwrap(), json);
    }

    #[test]
    fn test_fix_dim_theme_text() {
        let config = ProjectConfig::from_file(fixture("toki.config.json")).unwrap();
        let themes = config.theme_set(ParseOptions::validating()).unwrap();
        let dim = resolve_theme(&themes, "dim").unwrap();

        let text = color(&dim, "color.text.primary");
        let background = color(&dim, "color.background.default");
        assert!(!is_accessible(&text, &background, WcagLevel::Aa));

        // Text darker than its surface is only searched darker; black is as far as it gets.
        let best = find_accessible_color(&text, &background, WcagLevel::Aa);
        assert_eq!(best, "#000000");
        assert!(!is_accessible(&best, &background, WcagLevel::Aa));

        // Lighter text on the same surface is pushed lighter until it passes.
        let fixed = find_accessible_color("#6b7280", &background, WcagLevel::Aa);
        assert!(contrast_ratio(&fixed, &background) >= 4.5);
    }

    #[test]
    fn test_brand_shades_span_black_to_white() {
        let tree = parse_file(fixture("tokens.json"), ParseOptions::validating()).unwrap();
        let shades = generate_shades(&color(&tree, "color.primary"), 10);

        assert_eq!(shades.len(), 10);
        assert_eq!(shades["0"], "#000000");
        assert_eq!(shades["900"], "#ffffff");
        assert_abs_diff_eq!(contrast_ratio(&shades["0"], &shades["900"]), 21.0, epsilon = 1e-9);
    }
}
