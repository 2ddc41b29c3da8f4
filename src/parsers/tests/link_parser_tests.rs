use crate::error::ScrapeError;
use crate::filter::LinkFilter;
use crate::parsers::{Selectors, html};

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
            <nav>
                <a href="/">Home</a>
                <a href="/announcements">Announcements</a>
                <a href="/announcements/search">Search</a>
            </nav>
            <ol class="results">
                <li><a href="/ministers-welcome-new-funding">New funding</a>
                    <a class="series-link" href="/series/funding">Funding series</a></li>
                <li><a href="/road-closures-update">Road closures</a></li>
                <li><a href="https://example.org/external-notice">External</a></li>
            </ol>
            <a>No target</a>
            <nav class="pagination">
                <a href="?keywords=&amp;page=1">Next</a>
                <a href="?keywords=&amp;page=2">2</a>
            </nav>
            <footer><a href="/contact">Contact</a></footer>
        </body></html>
    "#;

    #[test]
    fn test_parse_links_between_markers() {
        let selectors = Selectors::default();
        let links = html::parse_links(SEARCH_PAGE, &selectors.anchor, &LinkFilter::default())
            .unwrap();

        assert_eq!(
            links,
            vec![
                "/ministers-welcome-new-funding",
                "/road-closures-update",
                "https://example.org/external-notice",
            ]
        );
    }

    #[test]
    fn test_series_links_are_dropped() {
        let selectors = Selectors::default();
        let links = html::parse_links(SEARCH_PAGE, &selectors.anchor, &LinkFilter::default())
            .unwrap();

        assert!(!links.iter().any(|l| l.starts_with("/series/")));
    }

    #[test]
    fn test_missing_landing_marker_fails() {
        let page = r#"<html><body>
            <a href="/some-announcement">A</a>
            <a href="?keywords=&page=1">Next</a>
        </body></html>"#;
        let selectors = Selectors::default();

        let result = html::parse_links(page, &selectors.anchor, &LinkFilter::default());
        assert!(matches!(
            result,
            Err(ScrapeError::MarkerNotFound { ref marker }) if marker == "/announcements/search"
        ));
    }

    #[test]
    fn test_anchor_targets_in_document_order() {
        let doc = scraper::Html::parse_document(SEARCH_PAGE);
        let selectors = Selectors::default();
        let targets = html::anchor_targets(&doc, &selectors.anchor, &LinkFilter::default());

        assert_eq!(targets.first().map(String::as_str), Some("/"));
        assert_eq!(targets.last().map(String::as_str), Some("/contact"));
        // Anchors without an href are never collected
        assert_eq!(targets.len(), 9);
    }
}
