//! Footnote rendering options.

use crate::NumberingStyle;

/// Options controlling how footnotes are found and rendered.
///
/// The value is read-only during a transformation. Loading it from a file is
/// the job of `fme-config`; [`Default`] gives the stock settings.
///
/// # Example
///
/// ```
/// use fme_core::{FootnoteOptions, NumberingStyle};
///
/// let options = FootnoteOptions::default()
///     .with_style(NumberingStyle::LowerRoman)
///     .with_delimiters("[[", "]]");
///
/// assert_eq!(options.footnotes_open, "[[");
/// assert!(options.combine_identical_notes);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootnoteOptions {
    /// Whether references are superscripted. Informational: the markup always
    /// uses `<sup>`.
    pub superscript: bool,
    /// Text before the inline reference (wrapped in its own `<sup>`).
    pub pre_identifier: String,
    /// Text inside the reference `<sup>`, before the link.
    pub inner_pre_identifier: String,
    /// Text inside the reference `<sup>`, after the link.
    pub inner_post_identifier: String,
    /// Text after the inline reference.
    pub post_identifier: String,
    /// Numbering style of the footnote list.
    pub style: NumberingStyle,
    /// Text before each back-link.
    pub pre_backlink: String,
    /// Back-link label.
    pub backlink: String,
    /// Text after each back-link.
    pub post_backlink: String,
    /// Markup placed before the footnote list.
    pub pre_footnotes: String,
    /// Markup placed after the footnote list.
    pub post_footnotes: String,
    /// Opening footnote delimiter.
    pub footnotes_open: String,
    /// Closing footnote delimiter.
    pub footnotes_close: String,
    /// Share one number between footnotes with identical text.
    pub combine_identical_notes: bool,
    /// Views and URLs in which footnotes are stripped instead of rendered.
    pub suppression: SuppressionRules,
}

impl Default for FootnoteOptions {
    fn default() -> Self {
        Self {
            superscript: true,
            pre_identifier: String::new(),
            inner_pre_identifier: String::new(),
            inner_post_identifier: String::new(),
            post_identifier: String::new(),
            style: NumberingStyle::Decimal,
            pre_backlink: " [".to_owned(),
            backlink: "&#8617;".to_owned(),
            post_backlink: "]".to_owned(),
            pre_footnotes: String::new(),
            post_footnotes: String::new(),
            footnotes_open: " ((".to_owned(),
            footnotes_close: "))".to_owned(),
            combine_identical_notes: true,
            suppression: SuppressionRules::default(),
        }
    }
}

impl FootnoteOptions {
    /// Set the numbering style.
    #[must_use]
    pub fn with_style(mut self, style: NumberingStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the footnote delimiters.
    #[must_use]
    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.footnotes_open = open.into();
        self.footnotes_close = close.into();
        self
    }

    /// Enable or disable combining identical notes.
    #[must_use]
    pub fn with_combine_identical_notes(mut self, combine: bool) -> Self {
        self.combine_identical_notes = combine;
        self
    }

    /// Set the suppression rules.
    #[must_use]
    pub fn with_suppression(mut self, suppression: SuppressionRules) -> Self {
        self.suppression = suppression;
        self
    }
}

/// Views and URLs in which footnotes are not displayed.
///
/// Each flag corresponds to a field of [`ViewFlags`](crate::ViewFlags).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuppressionRules {
    /// Suppress on the home view.
    pub home: bool,
    /// Suppress in previews.
    pub preview: bool,
    /// Suppress in archives.
    pub archive: bool,
    /// Suppress in date archives.
    pub date: bool,
    /// Suppress in category archives.
    pub category: bool,
    /// Suppress in search results.
    pub search: bool,
    /// Suppress in feeds.
    pub feed: bool,
    /// Newline-separated full URLs (starting with `http`) or paths.
    pub excluded_urls: String,
}
