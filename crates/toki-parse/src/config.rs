//! Project configuration (`toki.config.json`).
//!
//! ```json
//! {
//!   "input": "tokens/base.json",
//!   "outputDir": "dist",
//!   "formats": ["css", "js", "json"],
//!   "prefix": "ds",
//!   "darkMode": true,
//!   "themes": [ { "name": "light", "tokens": { ... } } ]
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toki_core::{ThemeSet, TokenError, TokenResult, TokenTree};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::parser::{ParseOptions, parse, read_source};
use crate::themes::{ThemeSource, build_theme_set};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "toki.config.json";

/// Project-level settings for building token outputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Token source file.
    pub input: PathBuf,
    /// Directory receiving exported files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Export format names.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Variable name prefix.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Also emit dark variants.
    #[serde(default)]
    pub dark_mode: bool,
    /// Inline theme collection.
    #[serde(default)]
    pub themes: Vec<ThemeSource>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_formats() -> Vec<String> {
    ["css", "js", "json"].map(String::from).to_vec()
}

impl ProjectConfig {
    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// [`TokenError::FileNotFound`] if the file is missing, otherwise I/O or
    /// JSON errors.
    pub fn from_file(path: impl AsRef<Path>) -> TokenResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TokenError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        debug!(path = %path.display(), "loading project config");
        Self::from_json_str(&content, base_dir)
    }

    /// Parses config JSON, resolving relative paths against `base_dir`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toki_parse::ProjectConfig;
    ///
    /// let config = ProjectConfig::from_json_str(r#"{ "input": "tokens.json" }"#, "/project").unwrap();
    /// assert_eq!(config.formats, ["css", "js", "json"]);
    /// assert_eq!(config.output_path(), std::path::Path::new("/project/dist"));
    /// ```
    pub fn from_json_str(json: &str, base_dir: impl Into<PathBuf>) -> TokenResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.base_dir = base_dir.into();
        trace!(?config, "parsed project config");
        Ok(config)
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute (or base-relative) path of the token source.
    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(&self.input)
    }

    /// Absolute (or base-relative) output directory.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir)
    }

    /// Raw token document named by `input`.
    pub fn load_source(&self) -> TokenResult<serde_json::Value> {
        read_source(&self.input_path())
    }

    /// Parses the token document named by `input`.
    pub fn load_tokens(&self, options: ParseOptions) -> TokenResult<TokenTree> {
        parse(&self.load_source()?, options)
    }

    /// Builds the inline theme collection.
    pub fn theme_set(&self, options: ParseOptions) -> TokenResult<ThemeSet> {
        build_theme_set(&self.themes, options)
    }
}
