//! Stylesheet for rendered footnote lists.

use crate::FootnoteOptions;

/// Build the `<style>` block for pages containing footnotes.
///
/// List items carry no literal numbers, so the configured numbering style is
/// applied through `list-style-type`. The symbol style renders a `<ul>` and
/// gets no list-style rule.
///
/// # Example
///
/// ```
/// use fme_core::{FootnoteOptions, NumberingStyle, stylesheet};
///
/// let css = stylesheet(&FootnoteOptions::default().with_style(NumberingStyle::LowerRoman));
/// assert!(css.contains("ol.footnotes>li {list-style-type:lower-roman;}"));
/// ```
pub fn stylesheet(options: &FootnoteOptions) -> String {
    let mut css = String::from("<style type=\"text/css\">\n");
    if !options.style.is_symbol() {
        css.push_str("ol.footnotes>li {list-style-type:");
        css.push_str(options.style.name());
        css.push_str(";}\n");
    }
    css.push_str("ol.footnotes { color:#666666; }\n");
    css.push_str("ol.footnotes li { font-size:80%; }\n");
    css.push_str("</style>\n");
    css
}
