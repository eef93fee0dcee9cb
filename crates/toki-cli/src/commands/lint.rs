//! Token lint command

use crate::LintArgs;
use anyhow::{Context, Result, bail};
use toki_core::ThemeSet;
use toki_parse::{ParseOptions, Severity, lint};
use tracing::debug;

pub fn run(args: LintArgs) -> Result<()> {
    let config = if args.config.exists() {
        Some(super::load_config(&args.config)?)
    } else {
        debug!(path = %args.config.display(), "no project config");
        None
    };

    let input = match (&args.input, &config) {
        (Some(input), _) => input.clone(),
        (None, Some(config)) => config.input_path(),
        (None, None) => bail!(
            "No input given and no config at {}",
            args.config.display()
        ),
    };
    let source = toki_parse::read_source(&input)
        .with_context(|| format!("Failed to read tokens: {}", input.display()))?;

    // Themes with structural problems still get linted for contrast.
    let themes = match &config {
        Some(config) => config
            .theme_set(ParseOptions::default())
            .context("Failed to build themes")?,
        None => ThemeSet::new(),
    };

    let issues = lint(&source, &themes);
    println!("Linting {}", input.display());
    for issue in &issues {
        match &issue.context {
            Some(context) => println!("  {issue} ({context})"),
            None => println!("  {issue}"),
        }
    }

    let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
    let (errors, warnings) = (count(Severity::Error), count(Severity::Warning));
    if issues.is_empty() {
        println!("  No issues found");
    } else {
        println!("  {errors} error(s), {warnings} warning(s)");
    }

    if toki_parse::lint::has_errors(&issues) {
        bail!("Lint failed with {errors} error(s)");
    }
    Ok(())
}
