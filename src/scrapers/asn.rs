//! ASN news scraper.
//!
//! This module scrapes [ASN](https://www.asn-news.ru), the Insurance News
//! Agency. The listing page links each story through an anchor carrying the
//! `default-new__title` class; article pages mark their title, lead, and body
//! with dedicated classes, which keeps extraction to three CSS selectors.
//!
//! # URL Pattern
//!
//! Listing anchors use site-relative URLs that are resolved against the site
//! base to absolute URLs like `https://www.asn-news.ru/news/12345`.

use crate::models::ArticleSections;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// The news listing page, checked once per run.
pub const LISTING_URL: &str = "https://www.asn-news.ru/news";

/// Base URL that relative article links are resolved against.
pub const BASE_URL: &str = "https://www.asn-news.ru/";

/// Locate the most recent article link on the listing page.
///
/// Scans anchors matching `a.default-new__title` in document order and
/// returns the first one whose `href` resolves against `base`. Anchors
/// without an `href` are skipped.
///
/// # Arguments
///
/// * `html` - Raw HTML of the listing page
/// * `base` - Site base URL for resolving relative links
///
/// # Returns
///
/// The absolute article URL, or `None` when the listing carries no usable
/// article anchor.
pub fn latest_article_link(html: &str, base: &Url) -> Option<Url> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a.default-new__title").unwrap();

    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            debug!(%href, "Found article link on listing page");
            if let Ok(resolved) = base.join(href) {
                return Some(resolved);
            }
        }
    }
    None
}

/// Extract the three structural sections from an article page.
///
/// Each section is taken from the first element matching its marker:
/// `h1.main-article__title` for the title, `div.main-article__lead` for the
/// lead, and `div.article-text-editor` for the body. A missing marker yields
/// an empty section, never an error.
pub fn article_sections(html: &str) -> ArticleSections {
    let document = Html::parse_document(html);
    ArticleSections {
        title: first_text(&document, "h1.main-article__title"),
        lead: first_text(&document, "div.main-article__lead"),
        body: first_text(&document, "div.article-text-editor"),
    }
}

/// Text of the first element matching `selector`, or empty when absent.
fn first_text(document: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    #[test]
    fn test_latest_article_link_resolves_relative_href() {
        let html = r#"<html><body>
            <a class="default-new__title" href="/articles/42">Headline</a>
        </body></html>"#;
        let link = latest_article_link(html, &base()).unwrap();
        assert_eq!(link.as_str(), "https://www.asn-news.ru/articles/42");
    }

    #[test]
    fn test_latest_article_link_takes_first_anchor() {
        let html = r#"<html><body>
            <a class="default-new__title" href="/articles/1">Newest</a>
            <a class="default-new__title" href="/articles/2">Older</a>
        </body></html>"#;
        let link = latest_article_link(html, &base()).unwrap();
        assert_eq!(link.as_str(), "https://www.asn-news.ru/articles/1");
    }

    #[test]
    fn test_latest_article_link_skips_anchor_without_href() {
        let html = r#"<html><body>
            <a class="default-new__title">No link here</a>
            <a class="default-new__title" href="/articles/7">Linked</a>
        </body></html>"#;
        let link = latest_article_link(html, &base()).unwrap();
        assert_eq!(link.as_str(), "https://www.asn-news.ru/articles/7");
    }

    #[test]
    fn test_latest_article_link_missing_marker() {
        let html = r#"<html><body>
            <a class="other-class" href="/articles/42">Not a story</a>
        </body></html>"#;
        assert!(latest_article_link(html, &base()).is_none());
    }

    #[test]
    fn test_latest_article_link_ignores_non_anchor_elements() {
        let html = r#"<html><body>
            <div class="default-new__title">Same class, wrong tag</div>
        </body></html>"#;
        assert!(latest_article_link(html, &base()).is_none());
    }

    #[test]
    fn test_article_sections_full_page() {
        let html = r#"<html><body>
            <h1 class="main-article__title">Big News</h1>
            <div class="main-article__lead">Something happened.</div>
            <div class="article-text-editor">Full details here.</div>
        </body></html>"#;
        let sections = article_sections(html);
        assert_eq!(sections.title, "Big News");
        assert_eq!(sections.lead, "Something happened.");
        assert_eq!(sections.body, "Full details here.");
        assert_eq!(
            sections.message(),
            "Big News Something happened. Full details here."
        );
    }

    #[test]
    fn test_article_sections_all_markers_missing() {
        let html = "<html><body><p>Nothing structured at all</p></body></html>";
        let sections = article_sections(html);
        assert_eq!(sections, ArticleSections::default());
        assert!(sections.message().is_empty());
    }

    #[test]
    fn test_article_sections_uses_first_match_only() {
        let html = r#"<html><body>
            <h1 class="main-article__title">First title</h1>
            <h1 class="main-article__title">Second title</h1>
        </body></html>"#;
        assert_eq!(article_sections(html).title, "First title");
    }

    #[test]
    fn test_article_sections_nested_markup() {
        let html = r#"<html><body>
            <div class="article-text-editor"><p>First.</p><p>Second.</p></div>
        </body></html>"#;
        let sections = article_sections(html);
        assert_eq!(sections.message(), "First. Second.");
    }
}
