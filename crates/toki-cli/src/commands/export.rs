//! Single-format export and dark variant commands

use crate::{DarkArgs, ExportArgs};
use anyhow::{Context, Result, bail};
use toki_core::TokenTree;
use toki_export::{ExportOptions, Format, export, export_dark};
use toki_parse::ParseOptions;
use tracing::debug;

pub fn run(args: ExportArgs) -> Result<()> {
    let format = resolve_format(&args)?;
    let options = ParseOptions {
        validate: !args.lenient,
    };
    let tree = super::load_tokens(&args.input, options)?;

    let mut export_options = ExportOptions::default().with_selector(args.selector);
    if let Some(prefix) = args.prefix {
        export_options = export_options.with_prefix(prefix);
    }
    if let Some(selector) = args.dark_selector {
        export_options = export_options.with_dark_selector(selector);
    }
    debug!(%format, dark = args.dark, tokens = tree.len(), "exporting");

    let text = if args.dark {
        export_dark(&tree, format, &export_options)
    } else {
        export(&tree, format, &export_options)
    }
    .with_context(|| format!("Failed to export {format}"))?;

    super::write_output(args.output.as_deref(), &text)
}

/// `--format` wins; otherwise the output extension decides.
fn resolve_format(args: &ExportArgs) -> Result<Format> {
    if let Some(name) = &args.format {
        return Ok(name.parse::<Format>()?);
    }
    match args.output.as_deref().and_then(|p| Format::from_extension(p)) {
        Some(format) => Ok(format),
        None => bail!("No --format given and no recognizable output extension"),
    }
}

pub fn run_dark(args: DarkArgs) -> Result<()> {
    let tree = super::load_tokens(&args.input, ParseOptions::validating())?;
    let dark = TokenTree::new(toki_color::generate_dark_theme(tree.root()));
    debug!(tokens = dark.len(), "generated dark variant");

    let text = export(&dark, Format::Json, &ExportOptions::default())
        .context("Failed to serialize dark tokens")?;
    super::write_output(args.output.as_deref(), &text)
}
