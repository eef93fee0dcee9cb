//! toki - design token toolkit
//!
//! Lints token documents, exports them to stylesheet and script formats,
//! and exposes the color engine on the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "toki")]
#[command(author, version, about = "Design token toolkit")]
#[command(long_about = "
Parses design token documents (JSON or YAML), validates and resolves aliases,
and exports them as CSS, SCSS, JavaScript, TypeScript or JSON.

Examples:
  toki lint                                  # Lint the project in toki.config.json
  toki export tokens.json -f css             # CSS custom properties to stdout
  toki export tokens.json -f ts -o tokens.ts
  toki build                                 # Write every configured format
  toki contrast '#777777' '#ffffff' --fix    # WCAG ratio and a passing color
  toki shades '#3b82f6' -n 10
  toki palette '#3b82f6' -n 5
  toki dark tokens.json -o tokens.dark.json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate tokens, references and theme contrast
    #[command(visible_alias = "l")]
    Lint(LintArgs),

    /// Export a token file to one format
    #[command(visible_alias = "e")]
    Export(ExportArgs),

    /// Write every format listed in the project config
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// Contrast ratio between two colors
    Contrast(ContrastArgs),

    /// Lightness scale of a color
    Shades(ShadesArgs),

    /// Hue-rotated palette of a color
    Palette(PaletteArgs),

    /// Dark variant of a token file
    Dark(DarkArgs),
}

#[derive(Args)]
struct LintArgs {
    /// Token file (defaults to the config's input)
    input: Option<PathBuf>,

    /// Project config
    #[arg(short, long, default_value = toki_parse::CONFIG_FILE_NAME)]
    config: PathBuf,
}

#[derive(Args)]
struct ExportArgs {
    /// Token file (.json, .yaml, .yml)
    input: PathBuf,

    /// Output format: css, scss, js, ts, json (defaults to the output extension)
    #[arg(short, long)]
    format: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Variable name prefix
    #[arg(short, long)]
    prefix: Option<String>,

    /// CSS selector for the main rule
    #[arg(long, default_value = toki_export::DEFAULT_SELECTOR)]
    selector: String,

    /// Add a dark CSS rule under this selector
    #[arg(long)]
    dark_selector: Option<String>,

    /// Export the dark variant instead
    #[arg(long)]
    dark: bool,

    /// Skip structural validation
    #[arg(long)]
    lenient: bool,
}

#[derive(Args)]
struct BuildArgs {
    /// Project config
    #[arg(short, long, default_value = toki_parse::CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ContrastArgs {
    /// Foreground color (#rrggbb)
    foreground: String,

    /// Background color (#rrggbb)
    background: String,

    /// Level used by --fix: AA or AAA
    #[arg(short, long, default_value = "AA")]
    level: String,

    /// Suggest the nearest passing foreground
    #[arg(long)]
    fix: bool,
}

#[derive(Args)]
struct ShadesArgs {
    /// Base color (#rrggbb)
    color: String,

    /// Number of shades
    #[arg(short = 'n', long, default_value_t = toki_color::DEFAULT_SHADE_COUNT)]
    count: usize,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PaletteArgs {
    /// Base color (#rrggbb)
    color: String,

    /// Number of colors
    #[arg(short = 'n', long, default_value_t = toki_color::DEFAULT_PALETTE_SIZE)]
    count: usize,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DarkArgs {
    /// Token file (.json, .yaml, .yml)
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Lint(args) => commands::lint::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Build(args) => commands::build::run(args),
        Commands::Contrast(args) => commands::color::run_contrast(args),
        Commands::Shades(args) => commands::color::run_shades(args),
        Commands::Palette(args) => commands::color::run_palette(args),
        Commands::Dark(args) => commands::export::run_dark(args),
    }
}
