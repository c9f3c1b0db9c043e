//! Footnote marker extraction.
//!
//! Finds the `<!--startnum=N-->` directive and every `OPEN ... CLOSE` span in
//! document order. Delimiters are literal text; the body between them is
//! matched non-greedily and may span lines.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static START_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--startnum=(\d+)-->").unwrap());

/// Error building the footnote matcher.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// One of the delimiters is empty.
    #[error("footnote delimiters must not be empty")]
    EmptyDelimiter,
    /// The delimiter pattern could not be compiled.
    #[error("invalid footnote delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One footnote marker found in the content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Occurrence {
    /// Byte range of the whole marker, delimiters included.
    pub span: Range<usize>,
    /// Text between the delimiters, verbatim.
    pub body: String,
}

/// Result of scanning a document for footnotes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extraction {
    /// Number from the `<!--startnum=N-->` directive, if present.
    pub start_number: Option<u64>,
    /// Markers in document order.
    pub occurrences: Vec<Occurrence>,
}

impl Extraction {
    /// First footnote number: the directive value, or 1.
    #[must_use]
    pub fn start(&self) -> u64 {
        self.start_number.unwrap_or(1)
    }

    /// Whether no markers were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Scan `content` for the start directive and all footnote markers.
///
/// The start directive is reported but not removed from the content.
///
/// # Example
///
/// ```
/// use fme_core::extract;
///
/// let extraction = extract("Hello ((world)).", " ((", "))").unwrap();
/// assert_eq!(extraction.occurrences.len(), 1);
/// assert_eq!(extraction.occurrences[0].body, "world");
/// assert_eq!(extraction.start(), 1);
/// ```
pub fn extract(content: &str, open: &str, close: &str) -> Result<Extraction, ExtractError> {
    if open.is_empty() || close.is_empty() {
        return Err(ExtractError::EmptyDelimiter);
    }

    let pattern = Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(open),
        regex::escape(close)
    ))?;

    let occurrences = pattern
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(Occurrence {
                span: whole.range(),
                body: body.as_str().to_owned(),
            })
        })
        .collect();

    Ok(Extraction {
        start_number: start_number(content),
        occurrences,
    })
}

/// Parse the first `<!--startnum=N-->` directive.
fn start_number(content: &str) -> Option<u64> {
    let digits = START_NUMBER_RE.captures(content)?.get(1)?.as_str();
    match digits.parse() {
        Ok(number) => Some(number),
        Err(e) => {
            tracing::warn!(value = digits, error = %e, "Ignoring out of range start number");
            None
        }
    }
}
