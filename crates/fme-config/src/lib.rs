//! Configuration management for fme.
//!
//! Parses `fme.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section and
//! field is optional; missing values take the stock footnote settings.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [list]
//! style = "lower-roman"
//!
//! [delimiters]
//! open = " (("
//! close = "))"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use fme_core::{FootnoteOptions, NumberingStyle, SuppressionRules};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override list numbering style.
    pub style: Option<String>,
    /// Override the combine identical notes flag.
    pub combine_identical_notes: Option<bool>,
    /// Override opening delimiter.
    pub open: Option<String>,
    /// Override closing delimiter.
    pub close: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fme.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inline reference configuration.
    pub identifier: IdentifierConfig,
    /// Footnote list configuration.
    pub list: ListConfig,
    /// Back-link configuration.
    pub backlink: BacklinkConfig,
    /// Footnote delimiters.
    pub delimiters: DelimitersConfig,
    /// Display suppression configuration.
    pub display: DisplayConfig,
    /// Content filter configuration.
    pub filter: FilterConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Inline reference configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Text before the reference.
    pub pre: String,
    /// Text inside the reference, before the number.
    pub inner_pre: String,
    /// Text inside the reference, after the number.
    pub inner_post: String,
    /// Text after the reference.
    pub post: String,
    /// Whether references are superscripted.
    pub superscript: bool,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            pre: String::new(),
            inner_pre: String::new(),
            inner_post: String::new(),
            post: String::new(),
            superscript: true,
        }
    }
}

/// Footnote list configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Numbering style name (e.g., `decimal`, `upper-roman`, `symbol`).
    pub style: String,
    /// Symbol for the `symbol` style.
    pub symbol: String,
    /// Markup before the list.
    pub pre: String,
    /// Markup after the list.
    pub post: String,
    /// Share one number between identical footnotes.
    pub combine_identical_notes: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            style: "decimal".to_owned(),
            symbol: "&dagger;".to_owned(),
            pre: String::new(),
            post: String::new(),
            combine_identical_notes: true,
        }
    }
}

/// Back-link configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BacklinkConfig {
    /// Text before the back-link.
    pub pre: String,
    /// Back-link label.
    pub text: String,
    /// Text after the back-link.
    pub post: String,
}

impl Default for BacklinkConfig {
    fn default() -> Self {
        Self {
            pre: " [".to_owned(),
            text: "&#8617;".to_owned(),
            post: "]".to_owned(),
        }
    }
}

/// Footnote delimiters.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DelimitersConfig {
    /// Opening delimiter.
    pub open: String,
    /// Closing delimiter.
    pub close: String,
}

impl Default for DelimitersConfig {
    fn default() -> Self {
        Self {
            open: " ((".to_owned(),
            close: "))".to_owned(),
        }
    }
}

/// Display suppression configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Hide footnotes on the home view.
    pub no_home: bool,
    /// Hide footnotes in previews.
    pub no_preview: bool,
    /// Hide footnotes in archives.
    pub no_archive: bool,
    /// Hide footnotes in date archives.
    pub no_date: bool,
    /// Hide footnotes in category archives.
    pub no_category: bool,
    /// Hide footnotes in search results.
    pub no_search: bool,
    /// Hide footnotes in feeds.
    pub no_feed: bool,
    /// Newline-separated URLs or paths where footnotes are hidden.
    pub excluded_urls: String,
}

/// Content filter configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Ordering of the footnote filter among the host's content filters.
    pub priority: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { priority: 11 }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `fme.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(style) = &settings.style {
            self.list.style.clone_from(style);
        }
        if let Some(combine) = settings.combine_identical_notes {
            self.list.combine_identical_notes = combine;
        }
        if let Some(open) = &settings.open {
            self.delimiters.open.clone_from(open);
        }
        if let Some(close) = &settings.close {
            self.delimiters.close.clone_from(close);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    /// Search for config file in `dir` and its parents.
    fn discover_config_from(mut dir: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied. An unknown list style is not an error: it renders as
    /// `decimal`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.delimiters.open, "delimiters.open")?;
        require_non_empty(&self.delimiters.close, "delimiters.close")?;

        if self.list.style == "symbol" {
            require_non_empty(&self.list.symbol, "list.symbol")?;
        }

        if NumberingStyle::parse(&self.list.style, &self.list.symbol).is_none() {
            tracing::warn!(style = %self.list.style, "Unknown list style, using decimal");
        }

        Ok(())
    }

    /// Numbering style resolved from `list.style` and `list.symbol`.
    #[must_use]
    pub fn numbering_style(&self) -> NumberingStyle {
        NumberingStyle::from_name(&self.list.style, &self.list.symbol)
    }

    /// Build the footnote options for the renderer.
    #[must_use]
    pub fn footnote_options(&self) -> FootnoteOptions {
        FootnoteOptions {
            superscript: self.identifier.superscript,
            pre_identifier: self.identifier.pre.clone(),
            inner_pre_identifier: self.identifier.inner_pre.clone(),
            inner_post_identifier: self.identifier.inner_post.clone(),
            post_identifier: self.identifier.post.clone(),
            style: self.numbering_style(),
            pre_backlink: self.backlink.pre.clone(),
            backlink: self.backlink.text.clone(),
            post_backlink: self.backlink.post.clone(),
            pre_footnotes: self.list.pre.clone(),
            post_footnotes: self.list.post.clone(),
            footnotes_open: self.delimiters.open.clone(),
            footnotes_close: self.delimiters.close.clone(),
            combine_identical_notes: self.list.combine_identical_notes,
            suppression: SuppressionRules {
                home: self.display.no_home,
                preview: self.display.no_preview,
                archive: self.display.no_archive,
                date: self.display.no_date,
                category: self.display.no_category,
                search: self.display.no_search,
                feed: self.display.no_feed,
                excluded_urls: self.display.excluded_urls.clone(),
            },
        }
    }
}
