//! Project build: every configured format, dark variants and themes

use crate::BuildArgs;
use anyhow::{Context, Result};
use std::path::Path;
use toki_core::TokenTree;
use toki_export::{ExportOptions, Exporter, Format, TokenExporter};
use toki_parse::{ParseOptions, resolve_theme};
use tracing::{debug, info};

/// Selector of the dark rule appended to CSS output in dark mode.
const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";
const STEM: &str = "tokens";

pub fn run(args: BuildArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let out_dir = args.output.unwrap_or_else(|| config.output_path());

    let formats = config
        .formats
        .iter()
        .map(|name| name.parse::<Format>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid format in config")?;

    let tree = config
        .load_tokens(ParseOptions::validating())
        .with_context(|| format!("Failed to load tokens: {}", config.input_path().display()))?;
    let themes = config
        .theme_set(ParseOptions::validating())
        .context("Failed to build themes")?;
    info!(tokens = tree.len(), themes = themes.len(), formats = formats.len(), "building");

    let mut options = ExportOptions::default();
    options.prefix = config.prefix.clone();

    let mut written = 0;
    for format in formats {
        let mut format_options = options.clone();
        if config.dark_mode && format == Format::Css {
            format_options = format_options.with_dark_selector(DARK_SELECTOR);
        }
        let exporter = TokenExporter::new(format, format_options);
        write(&exporter, &tree, &out_dir.join(exporter.file_name(STEM)))?;
        written += 1;

        if config.dark_mode && format != Format::Css {
            let dark = TokenTree::new(toki_color::generate_dark_theme(tree.root()));
            let name = exporter.file_name(&format!("{STEM}.dark"));
            write(&exporter, &dark, &out_dir.join(name))?;
            written += 1;
        }

        for theme in themes.names() {
            let themed = resolve_theme(&themes, theme)
                .with_context(|| format!("Failed to resolve theme '{theme}'"))?;
            let name = exporter.file_name(&format!("{STEM}.{theme}"));
            write(&exporter, &themed, &out_dir.join(name))?;
            written += 1;
        }
    }

    println!("Wrote {written} file(s) to {}", out_dir.display());
    Ok(())
}

fn write(exporter: &TokenExporter, tree: &TokenTree, path: &Path) -> Result<()> {
    let text = exporter
        .export(tree)
        .with_context(|| format!("Failed to export {}", exporter.format()))?;
    debug!(path = %path.display(), "writing");
    super::write_output(Some(path), &text)
}
