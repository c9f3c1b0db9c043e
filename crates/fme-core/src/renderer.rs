//! Footnote renderer.
//!
//! Assigns display numbers to extracted markers, replaces each marker with a
//! reference link and appends the footnote list.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::display::should_display;
use crate::extract::{Extraction, Occurrence, extract};
use crate::splice::Splices;
use crate::{DocumentContext, FootnoteOptions, convert};

/// A footnote as it appears in the rendered list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FootnoteEntry {
    /// Display number.
    pub number: u64,
    /// Footnote text.
    pub body: String,
}

/// Display numbers assigned to a sequence of markers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Numbering {
    /// Number of each marker, index-aligned with the occurrences.
    pub resolved: Vec<u64>,
    /// List entries in ascending number order.
    pub entries: Vec<FootnoteEntry>,
}

/// Error assigning display numbers.
#[derive(Debug, thiserror::Error)]
pub enum NumberingError {
    /// A footnote would need a number past `u64::MAX`.
    #[error("footnote number overflows after {last}")]
    Overflow {
        /// Last number that could be assigned.
        last: u64,
    },
}

/// Assign display numbers to markers in document order.
///
/// Numbers start at `start`. With `combine` set, a marker whose body text
/// already appeared earlier reuses that earlier number and creates no entry.
///
/// # Errors
///
/// Returns [`NumberingError::Overflow`] if a new number past `u64::MAX` is
/// needed.
///
/// # Example
///
/// ```
/// use fme_core::{assign_numbers, extract};
///
/// let extraction = extract("a ((x)) b ((y)) c ((x))", " ((", "))").unwrap();
/// let numbering = assign_numbers(&extraction.occurrences, 1, true).unwrap();
///
/// assert_eq!(numbering.resolved, vec![1, 2, 1]);
/// assert_eq!(numbering.entries.len(), 2);
/// ```
pub fn assign_numbers(
    occurrences: &[Occurrence],
    start: u64,
    combine: bool,
) -> Result<Numbering, NumberingError> {
    // None once u64::MAX has been handed out.
    let mut next_number = Some(start);
    let mut seen: HashMap<&str, u64> = HashMap::new();
    let mut numbering = Numbering {
        resolved: Vec::with_capacity(occurrences.len()),
        entries: Vec::with_capacity(occurrences.len()),
    };

    for occurrence in occurrences {
        let body = occurrence.body.as_str();

        if combine
            && let Some(&number) = seen.get(body)
            && Some(number) != next_number
        {
            numbering.resolved.push(number);
            continue;
        }

        let number = next_number.ok_or(NumberingError::Overflow { last: u64::MAX })?;
        numbering.resolved.push(number);
        numbering.entries.push(FootnoteEntry {
            number,
            body: body.to_owned(),
        });
        seen.entry(body).or_insert(number);
        next_number = number.checked_add(1);
    }

    Ok(numbering)
}

/// Replace footnote markers with reference links and append the footnote list.
///
/// Returns `content` unchanged when there is no document context, when no
/// markers are found, when the delimiters are unusable, or when the numbers
/// would run past `u64::MAX`.
///
/// When display is suppressed for the context, markers are removed and no
/// list is appended.
///
/// # Example
///
/// ```
/// use fme_core::{DocumentContext, FootnoteOptions, transform};
///
/// let ctx = DocumentContext::new("7");
/// let html = transform("Hello ((world)).", &FootnoteOptions::default(), Some(&ctx));
///
/// assert!(html.starts_with(r##"Hello<sup id="fnref-7-1"><a href="#fn-7-1">1</a></sup>."##));
/// assert!(html.contains(r#"<li id="fn-7-1">world"#));
/// ```
pub fn transform(
    content: &str,
    options: &FootnoteOptions,
    context: Option<&DocumentContext>,
) -> String {
    let Some(context) = context else {
        return content.to_owned();
    };

    let extraction = match extract(content, &options.footnotes_open, &options.footnotes_close) {
        Ok(extraction) => extraction,
        Err(e) => {
            tracing::warn!(document = %context.id, error = %e, "Skipping footnote processing");
            return content.to_owned();
        }
    };

    if extraction.is_empty() {
        return content.to_owned();
    }

    let numbering = match assign_numbers(
        &extraction.occurrences,
        extraction.start(),
        options.combine_identical_notes,
    ) {
        Ok(numbering) => numbering,
        Err(e) => {
            tracing::warn!(document = %context.id, error = %e, "Skipping footnote processing");
            return content.to_owned();
        }
    };
    let shown = should_display(&options.suppression, context);

    tracing::debug!(
        document = %context.id,
        occurrences = extraction.occurrences.len(),
        entries = numbering.entries.len(),
        display = shown,
        "Rendering footnotes"
    );

    let renderer = Renderer {
        options,
        context,
        total: extraction.occurrences.len(),
    };
    renderer.render(content, &extraction, &numbering, shown)
}

/// Markup builder for one document.
struct Renderer<'a> {
    options: &'a FootnoteOptions,
    context: &'a DocumentContext,
    /// Number of markers in the document.
    total: usize,
}

impl Renderer<'_> {
    fn render(
        &self,
        content: &str,
        extraction: &Extraction,
        numbering: &Numbering,
        display: bool,
    ) -> String {
        let mut splices = Splices::with_capacity(extraction.occurrences.len());
        for (occurrence, &number) in extraction.occurrences.iter().zip(&numbering.resolved) {
            let reference = if display {
                self.reference(number)
            } else {
                String::new()
            };
            splices.add(occurrence.span.clone(), reference);
        }

        let mut out = splices.apply(content);
        if display && !numbering.entries.is_empty() {
            self.write_list(&mut out, extraction.start(), &numbering.entries);
        }
        out
    }

    /// Inline reference markup for footnote `number`.
    fn reference(&self, number: u64) -> String {
        let options = self.options;
        let mut link = String::new();

        if !options.pre_identifier.is_empty() {
            let _ = write!(link, "<sup>{}</sup>", options.pre_identifier);
        }

        let _ = write!(
            link,
            r##"<sup id="{}">{}<a href="#{}">"##,
            self.context.reference_id(number),
            options.inner_pre_identifier,
            self.context.note_id(number),
        );

        if options.style.is_symbol() {
            link.push_str(&convert(number, &options.style, self.total));
        } else {
            let _ = write!(link, "{number}");
        }

        link.push_str("</a>");
        link.push_str(&options.inner_post_identifier);
        link.push_str("</sup>");

        link.push_str(&options.post_identifier);
        if !options.post_identifier.is_empty() {
            link.push_str("</sup>");
        }

        link
    }

    /// Append the footnote list.
    fn write_list(&self, out: &mut String, start: u64, entries: &[FootnoteEntry]) {
        let options = self.options;
        let symbol = options.style.is_symbol();

        out.push_str(&options.pre_footnotes);
        if symbol {
            out.push_str(r#"<ul class="footnotes">"#);
        } else if start == 1 {
            out.push_str(r#"<ol class="footnotes">"#);
        } else {
            let _ = write!(out, r#"<ol start="{start}" class="footnotes">"#);
        }

        for entry in entries {
            let _ = write!(
                out,
                r##"<li id="{}">{}{}<a href="#{}">{}</a>{}</li>"##,
                self.context.note_id(entry.number),
                entry.body,
                options.pre_backlink,
                self.context.reference_id(entry.number),
                options.backlink,
                options.post_backlink,
            );
        }

        out.push_str(if symbol { "</ul>" } else { "</ol>" });
        out.push_str(&options.post_footnotes);
    }
}
