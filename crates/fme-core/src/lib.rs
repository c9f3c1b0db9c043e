//! Inline footnote extraction and rendering.
//!
//! Authors write footnotes inline, between two delimiters:
//!
//! ```text
//! Rust was first released in 2015 ((Version 1.0, in May.)).
//! ```
//!
//! [`transform`] replaces every marker with a numbered superscript link and
//! appends an ordered list of the footnote texts, each linking back to its
//! reference.
//!
//! # Architecture
//!
//! Processing is a pure function of the content, a [`FootnoteOptions`] value
//! and a [`DocumentContext`]:
//!
//! 1. **Extraction** ([`extract`]): finds the optional `<!--startnum=N-->`
//!    directive and all `OPEN ... CLOSE` spans in document order.
//! 2. **Numbering** ([`assign_numbers`]): assigns display numbers, sharing a
//!    number between identical footnotes when combining is enabled.
//! 3. **Rendering**: decides whether footnotes are displayed for the context
//!    ([`should_display`]), substitutes each marker in a single pass and
//!    appends the list.
//!
//! # Example
//!
//! ```
//! use fme_core::{DocumentContext, FootnoteOptions, transform};
//!
//! let options = FootnoteOptions::default();
//! let ctx = DocumentContext::new("42");
//!
//! let html = transform("Released in 2015 ((In May.)).", &options, Some(&ctx));
//! assert!(html.contains(r##"<a href="#fn-42-1">1</a>"##));
//! assert!(html.contains(r#"<li id="fn-42-1">In May."#));
//! ```

mod context;
mod display;
mod extract;
mod numbering;
mod options;
mod renderer;
mod splice;
mod styles;

pub use context::{DocumentContext, ViewFlags};
pub use display::should_display;
pub use extract::{ExtractError, Extraction, Occurrence, extract};
pub use numbering::{NumberingStyle, convert};
pub use options::{FootnoteOptions, SuppressionRules};
pub use renderer::{FootnoteEntry, Numbering, NumberingError, assign_numbers, transform};
pub use styles::stylesheet;
