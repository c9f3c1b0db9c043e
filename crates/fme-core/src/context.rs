//! Document rendering context.
//!
//! Describes the document being transformed and the view it is rendered in.
//! Everything here is supplied by the caller; the core never inspects a
//! request or a page itself.

/// The kind of view the document is being rendered in.
///
/// Several flags may be set at once (a date archive is both an archive and a
/// date view).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewFlags {
    /// Blog home / posts index.
    pub home: bool,
    /// Draft preview.
    pub preview: bool,
    /// Any archive listing.
    pub archive: bool,
    /// Date-based archive.
    pub date: bool,
    /// Category archive.
    pub category: bool,
    /// Search results.
    pub search: bool,
    /// Syndication feed.
    pub feed: bool,
}

/// Context for one document transformation.
///
/// # Example
///
/// ```
/// use fme_core::{DocumentContext, ViewFlags};
///
/// let ctx = DocumentContext::new("42")
///     .with_url("https://example.com/blog/hello/")
///     .with_view(ViewFlags { home: true, ..ViewFlags::default() });
///
/// assert_eq!(ctx.id, "42");
/// assert!(ctx.view.home);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DocumentContext {
    /// Document identifier, used to keep anchor ids unique per document.
    pub id: String,
    /// Current view.
    #[cfg_attr(feature = "serde", serde(default))]
    pub view: ViewFlags,
    /// Full URL of the current request (if known).
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
}

impl DocumentContext {
    /// Create a context for the document with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view: ViewFlags::default(),
            url: None,
        }
    }

    /// Set the current request URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the view flags.
    #[must_use]
    pub fn with_view(mut self, view: ViewFlags) -> Self {
        self.view = view;
        self
    }

    /// Anchor id of the inline reference for footnote `number`.
    pub(crate) fn reference_id(&self, number: u64) -> String {
        format!("fnref-{}-{number}", self.id)
    }

    /// Anchor id of the list entry for footnote `number`.
    pub(crate) fn note_id(&self, number: u64) -> String {
        format!("fn-{}-{number}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_anchor_ids() {
        let ctx = DocumentContext::new("17");
        assert_eq!(ctx.reference_id(3), "fnref-17-3");
        assert_eq!(ctx.note_id(3), "fn-17-3");
    }

    #[test]
    fn test_builder() {
        let ctx = DocumentContext::new("post")
            .with_url("/about")
            .with_view(ViewFlags {
                feed: true,
                ..ViewFlags::default()
            });

        assert_eq!(ctx.url.as_deref(), Some("/about"));
        assert!(ctx.view.feed);
        assert!(!ctx.view.home);
    }

    #[test]
    fn test_default_view_is_empty() {
        let ctx = DocumentContext::new("1");
        assert_eq!(ctx.view, ViewFlags::default());
        assert!(ctx.url.is_none());
    }
}
