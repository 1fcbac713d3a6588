//! Renderer configuration (ezcode.toml).

use std::fs;
use std::path::{Path, PathBuf};

use ezcode_mdx::HighlightConfig;
use pulldown_cmark::Options;
use serde::Deserialize;

/// Configuration file structure.
///
/// ```toml
/// [markdown]
/// tables = true
///
/// [highlight]
/// linenums = true
/// css_class = "codehilite"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Highlighter options; only used when a highlighter is attached
    #[serde(default)]
    pub highlight: Option<HighlightConfig>,

    #[serde(default)]
    pub markdown: MarkdownConfig,
}

/// Markdown extensions to enable.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MarkdownConfig {
    #[serde(default = "default_true")]
    pub tables: bool,
    #[serde(default = "default_true")]
    pub footnotes: bool,
    #[serde(default = "default_true")]
    pub strikethrough: bool,
    #[serde(default = "default_true")]
    pub tasklists: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
        }
    }
}

impl MarkdownConfig {
    /// pulldown-cmark options for the enabled extensions.
    pub fn options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RenderConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path` if it exists.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());

        Ok(config)
    }
}
