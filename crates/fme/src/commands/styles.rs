//! `fme styles` command implementation.

use std::path::PathBuf;

use clap::Args;
use fme_config::{CliSettings, Config};

use crate::error::CliError;
use crate::input::write_document;

/// Arguments for the styles command.
#[derive(Args)]
pub(crate) struct StylesArgs {
    /// Path to configuration file (default: auto-discover fme.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List numbering style (overrides config).
    #[arg(long)]
    style: Option<String>,
}

impl StylesArgs {
    /// Execute the styles command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            style: self.style,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let css = fme_core::stylesheet(&config.footnote_options());
        write_document(None, &css)?;
        Ok(())
    }
}
