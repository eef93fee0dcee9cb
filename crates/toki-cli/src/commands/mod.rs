//! CLI command implementations

pub mod build;
pub mod color;
pub mod export;
pub mod lint;

use anyhow::{Context, Result};
use std::path::Path;
use toki_core::TokenTree;
use toki_parse::{ParseOptions, ProjectConfig};

/// Parse and resolve a token file
pub fn load_tokens(path: &Path, options: ParseOptions) -> Result<TokenTree> {
    toki_parse::parse_file(path, options)
        .with_context(|| format!("Failed to load tokens: {}", path.display()))
}

/// Load the project config
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    ProjectConfig::from_file(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Write to `path`, creating parent directories, or print when `None`
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    let Some(path) = path else {
        print!("{text}");
        return Ok(());
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("Failed to write: {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_output_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist/nested/tokens.css");
        write_output(Some(&path), ":root {\n}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ":root {\n}\n");
    }

    #[test]
    fn load_tokens_names_the_file() {
        let err = load_tokens(Path::new("missing.json"), ParseOptions::default()).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
