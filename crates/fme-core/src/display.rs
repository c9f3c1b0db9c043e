//! Display suppression.
//!
//! Decides, once per document, whether footnotes are rendered or stripped.

use url::Url;

use crate::{DocumentContext, SuppressionRules};

/// Whether footnotes should be displayed for this document.
///
/// Returns `false` when an enabled suppression flag matches the current view,
/// or when the current URL is listed in [`SuppressionRules::excluded_urls`].
///
/// # Example
///
/// ```
/// use fme_core::{DocumentContext, SuppressionRules, ViewFlags, should_display};
///
/// let rules = SuppressionRules { home: true, ..SuppressionRules::default() };
/// let home = DocumentContext::new("1").with_view(ViewFlags { home: true, ..ViewFlags::default() });
///
/// assert!(!should_display(&rules, &home));
/// assert!(should_display(&rules, &DocumentContext::new("1")));
/// ```
pub fn should_display(rules: &SuppressionRules, context: &DocumentContext) -> bool {
    let view = &context.view;
    let suppressed_view = (rules.home && view.home)
        || (rules.archive && view.archive)
        || (rules.date && view.date)
        || (rules.category && view.category)
        || (rules.search && view.search)
        || (rules.feed && view.feed)
        || (rules.preview && view.preview);

    if suppressed_view {
        return false;
    }

    !context
        .url
        .as_deref()
        .is_some_and(|url| is_url_excluded(&rules.excluded_urls, url))
}

/// Match the current URL against newline-separated exclusion rules.
///
/// Rules starting with `http` must equal the full URL. Other rules are paths
/// and match the URL's path with or without a leading slash.
fn is_url_excluded(exclusions: &str, current_url: &str) -> bool {
    let current_path = url_path(current_url);

    exclusions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .any(|rule| {
            if rule.starts_with("http") {
                rule == current_url
            } else {
                current_path.as_deref().is_some_and(|path| {
                    path == rule || path.strip_prefix('/') == Some(rule.trim_start_matches('/'))
                })
            }
        })
}

/// Path component of a URL.
///
/// Relative URLs are taken as a path with any query or fragment removed.
fn url_path(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed.path().to_owned()),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            let path = &url[..end];
            (!path.is_empty()).then(|| path.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewFlags;
    use pretty_assertions::assert_eq;

    fn at_url(url: &str) -> DocumentContext {
        DocumentContext::new("1").with_url(url)
    }

    fn excluding(urls: &str) -> SuppressionRules {
        SuppressionRules {
            excluded_urls: urls.to_owned(),
            ..SuppressionRules::default()
        }
    }

    #[test]
    fn test_displays_by_default() {
        let ctx = at_url("https://example.com/blog/");
        assert!(should_display(&SuppressionRules::default(), &ctx));
    }

    #[test]
    fn test_view_flags_require_rule() {
        let ctx = DocumentContext::new("1").with_view(ViewFlags {
            home: true,
            archive: true,
            date: true,
            category: true,
            search: true,
            feed: true,
            preview: true,
        });
        assert!(should_display(&SuppressionRules::default(), &ctx));
    }

    #[test]
    fn test_each_view_flag_suppresses() {
        let cases: [(fn(&mut SuppressionRules), fn(&mut ViewFlags)); 7] = [
            (|r| r.home = true, |v| v.home = true),
            (|r| r.preview = true, |v| v.preview = true),
            (|r| r.archive = true, |v| v.archive = true),
            (|r| r.date = true, |v| v.date = true),
            (|r| r.category = true, |v| v.category = true),
            (|r| r.search = true, |v| v.search = true),
            (|r| r.feed = true, |v| v.feed = true),
        ];

        for (set_rule, set_view) in cases {
            let mut rules = SuppressionRules::default();
            set_rule(&mut rules);
            let mut view = ViewFlags::default();
            set_view(&mut view);

            let ctx = DocumentContext::new("1").with_view(view);
            assert!(!should_display(&rules, &ctx), "{rules:?} should suppress {view:?}");
            assert!(should_display(&rules, &DocumentContext::new("1")));
        }
    }

    #[test]
    fn test_rule_for_other_view_does_not_suppress() {
        let rules = SuppressionRules {
            feed: true,
            ..SuppressionRules::default()
        };
        let ctx = DocumentContext::new("1").with_view(ViewFlags {
            search: true,
            ..ViewFlags::default()
        });
        assert!(should_display(&rules, &ctx));
    }

    #[test]
    fn test_path_rule_matches() {
        let rules = excluding("/blog/");
        assert!(!should_display(&rules, &at_url("https://x.com/blog/")));
        assert!(should_display(&rules, &at_url("https://x.com/blog/post/")));
    }

    #[test]
    fn test_path_rule_without_leading_slash() {
        let rules = excluding("page");
        assert!(!should_display(&rules, &at_url("https://x.com/page")));
    }

    #[test]
    fn test_path_rule_with_extra_leading_slashes() {
        let rules = excluding("//page");
        assert!(!should_display(&rules, &at_url("https://x.com/page")));
    }

    #[test]
    fn test_path_rule_ignores_query() {
        let rules = excluding("/page");
        assert!(!should_display(&rules, &at_url("https://x.com/page?ref=feed#top")));
    }

    #[test]
    fn test_full_url_rule_exact_match_only() {
        let rules = excluding("https://x.com/a");
        assert!(!should_display(&rules, &at_url("https://x.com/a")));
        assert!(should_display(&rules, &at_url("https://x.com/a/b")));
        assert!(should_display(&rules, &at_url("https://x.com/ab")));
    }

    #[test]
    fn test_full_url_rule_does_not_match_path() {
        let rules = excluding("https://x.com/a");
        assert!(should_display(&rules, &at_url("/a")));
    }

    #[test]
    fn test_rules_trimmed_and_blank_lines_skipped() {
        let rules = excluding("\n   \n  /about  \r\n\nhttps://x.com/contact\n");
        assert!(!should_display(&rules, &at_url("https://x.com/about")));
        assert!(!should_display(&rules, &at_url("https://x.com/contact")));
        assert!(should_display(&rules, &at_url("https://x.com/")));
    }

    #[test]
    fn test_relative_current_url() {
        let rules = excluding("about");
        assert!(!should_display(&rules, &at_url("/about?x=1")));
    }

    #[test]
    fn test_no_url_skips_exclusions() {
        let rules = excluding("/");
        assert!(should_display(&rules, &DocumentContext::new("1")));
    }

    #[test]
    fn test_url_path() {
        assert_eq!(url_path("https://x.com/a/b?c#d").as_deref(), Some("/a/b"));
        assert_eq!(url_path("https://x.com").as_deref(), Some("/"));
        assert_eq!(url_path("/a/b#frag").as_deref(), Some("/a/b"));
        assert_eq!(url_path("?only=query"), None);
    }
}
