//! `fme extract` command implementation.

use std::path::PathBuf;

use clap::Args;
use fme_config::{CliSettings, Config};
use fme_core::{Numbering, Occurrence, assign_numbers, extract};
use serde::Serialize;

use crate::error::CliError;
use crate::input::{read_document, write_document};

/// Arguments for the extract command.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Document to scan (default: stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover fme.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not combine identical notes.
    #[arg(long)]
    no_combine: bool,
}

/// Footnotes found in a document.
#[derive(Serialize)]
struct ExtractReport<'a> {
    /// First footnote number.
    start: u64,
    occurrences: &'a [Occurrence],
    numbering: &'a Numbering,
}

impl ExtractArgs {
    /// Execute the extract command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            combine_identical_notes: self.no_combine.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let content = read_document(self.input.as_deref())?;

        let json = report_json(&content, &config)?;
        write_document(None, &json)?;
        Ok(())
    }
}

/// Extract and number footnotes, formatted as pretty JSON.
fn report_json(content: &str, config: &Config) -> Result<String, CliError> {
    let extraction = extract(content, &config.delimiters.open, &config.delimiters.close)?;
    let numbering = assign_numbers(
        &extraction.occurrences,
        extraction.start(),
        config.list.combine_identical_notes,
    )?;

    let report = ExtractReport {
        start: extraction.start(),
        occurrences: &extraction.occurrences,
        numbering: &numbering,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_json() {
        let json = report_json("<!--startnum=2-->a ((x)) b ((x))", &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["start"], 2);
        assert_eq!(value["occurrences"][0]["body"], "x");
        assert_eq!(value["occurrences"][0]["span"]["start"], 18);
        assert_eq!(value["occurrences"][0]["span"]["end"], 24);
        assert_eq!(value["numbering"]["resolved"], serde_json::json!([2, 2]));
        assert_eq!(
            value["numbering"]["entries"],
            serde_json::json!([{"number": 2, "body": "x"}])
        );
    }

    #[test]
    fn test_report_json_without_combining() {
        let mut config = Config::default();
        config.list.combine_identical_notes = false;

        let json = report_json("a ((x)) b ((x))", &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["numbering"]["resolved"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_report_json_large_start() {
        let json = report_json("<!--startnum=4294967295-->a ((x)) b ((y))", &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"], 4_294_967_295_u64);
        assert_eq!(
            value["numbering"]["resolved"],
            serde_json::json!([4_294_967_295_u64, 4_294_967_296_u64])
        );
    }

    #[test]
    fn test_report_json_numbering_overflow() {
        let err = report_json("<!--startnum=18446744073709551615-->a ((x)) b ((y))", &Config::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Numbering(_)));
    }

    #[test]
    fn test_report_json_no_footnotes() {
        let json = report_json("plain", &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"], 1);
        assert_eq!(value["occurrences"], serde_json::json!([]));
    }
}
