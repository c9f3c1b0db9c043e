//! Single-pass span substitution.
//!
//! Collects replacements keyed by byte ranges of the original string and
//! applies them in one pass, so no replacement shifts the offsets of another.

use std::ops::Range;

/// Collects span replacements for single-pass application.
///
/// Spans must be added in increasing order and must not overlap, which is what
/// the extractor produces.
///
/// ```text
/// source:  "a ((x)) b ((y))"
/// splices: [1..7 -> "<1>", 9..15 -> "<2>"]
/// result:  "a<1> b<2>"
/// ```
#[derive(Debug, Default)]
pub(crate) struct Splices {
    items: Vec<(Range<usize>, String)>,
}

impl Splices {
    /// Create a new splice collector with pre-allocated capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Register a replacement of `span` with `to`.
    pub(crate) fn add(&mut self, span: Range<usize>, to: impl Into<String>) {
        debug_assert!(
            self.items.last().is_none_or(|(last, _)| last.end <= span.start),
            "splices must be added in order without overlap"
        );
        self.items.push((span, to.into()));
    }

    /// Apply all registered replacements to `source`.
    ///
    /// Consumes the collector to prevent accidental reuse.
    pub(crate) fn apply(self, source: &str) -> String {
        if self.items.is_empty() {
            return source.to_owned();
        }

        let replaced: usize = self.items.iter().map(|(span, _)| span.len()).sum();
        let inserted: usize = self.items.iter().map(|(_, to)| to.len()).sum();
        let mut out = String::with_capacity(source.len() - replaced + inserted);

        let mut cursor = 0;
        for (span, to) in self.items {
            out.push_str(&source[cursor..span.start]);
            out.push_str(&to);
            cursor = span.end;
        }
        out.push_str(&source[cursor..]);
        out
    }

    /// Get the number of registered replacements.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
