//! `fme render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use fme_config::{CliSettings, Config};
use fme_core::{DocumentContext, ViewFlags};

use crate::error::CliError;
use crate::input::{read_document, write_document};
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document to process (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover fme.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document identifier used in footnote anchor ids.
    #[arg(long)]
    id: Option<String>,

    /// JSON file with the document context (`id`, `view`, `url`).
    #[arg(long)]
    context: Option<PathBuf>,

    /// URL of the page being rendered.
    #[arg(long)]
    url: Option<String>,

    #[command(flatten)]
    view: ViewArgs,

    /// List numbering style (overrides config).
    #[arg(long)]
    style: Option<String>,

    /// Combine identical notes (overrides config).
    #[arg(long, overrides_with = "no_combine")]
    combine: bool,

    /// Do not combine identical notes (overrides config).
    #[arg(long, overrides_with = "combine")]
    no_combine: bool,
}

/// View the document is rendered in.
#[derive(Args, Default)]
struct ViewArgs {
    /// Render as the home view.
    #[arg(long)]
    home: bool,
    /// Render as a preview.
    #[arg(long)]
    preview: bool,
    /// Render as an archive listing.
    #[arg(long)]
    archive: bool,
    /// Render as a date archive.
    #[arg(long)]
    date: bool,
    /// Render as a category archive.
    #[arg(long)]
    category: bool,
    /// Render as search results.
    #[arg(long)]
    search: bool,
    /// Render as a feed.
    #[arg(long)]
    feed: bool,
}

impl ViewArgs {
    /// Set the flags given on the command line; others are left as they are.
    fn apply(&self, view: &mut ViewFlags) {
        view.home |= self.home;
        view.preview |= self.preview;
        view.archive |= self.archive;
        view.date |= self.date;
        view.category |= self.category;
        view.search |= self.search;
        view.feed |= self.feed;
    }
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the document context cannot be
    /// loaded, or the document cannot be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            style: self.style.clone(),
            combine_identical_notes: self.resolve_combine(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = config.footnote_options();
        tracing::debug!(
            config = ?config.config_path,
            style = options.style.name(),
            priority = config.filter.priority,
            "Loaded footnote options"
        );

        let context = self.document_context()?;
        if context.is_none() {
            output.warning("No document context (--id or --context); footnotes left as is");
        }

        let content = read_document(self.input.as_deref())?;
        let rendered = fme_core::transform(&content, &options, context.as_ref());
        write_document(self.output.as_deref(), &rendered)?;

        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }

    /// Resolve `combine_identical_notes` from --combine/--no-combine flags.
    ///
    /// The last of the two flags wins; with neither, config decides.
    fn resolve_combine(&self) -> Option<bool> {
        if self.no_combine {
            Some(false)
        } else if self.combine {
            Some(true)
        } else {
            None
        }
    }

    /// Build the document context from --context, --id, --url and view flags.
    ///
    /// Returns `None` when neither --context nor --id is given.
    fn document_context(&self) -> Result<Option<DocumentContext>, CliError> {
        let mut context = match (&self.context, &self.id) {
            (Some(path), _) => load_context(path)?,
            (None, Some(id)) => DocumentContext::new(id.clone()),
            (None, None) => return Ok(None),
        };

        if let Some(id) = &self.id {
            context.id.clone_from(id);
        }
        if let Some(url) = &self.url {
            context.url = Some(url.clone());
        }
        self.view.apply(&mut context.view);

        Ok(Some(context))
    }
}

/// Load a JSON document context.
fn load_context(path: &Path) -> Result<DocumentContext, CliError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
