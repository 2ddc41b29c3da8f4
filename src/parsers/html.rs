use crate::error::Result;
use crate::filter::LinkFilter;
use scraper::{ElementRef, Html, Selector};

/// Collects anchor targets in document order, skipping filtered anchors
pub fn anchor_targets(doc: &Html, anchor: &Selector, filter: &LinkFilter) -> Vec<String> {
    doc.select(anchor)
        .filter(|e| filter.keep_anchor(e.value().attr("class")))
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect()
}

/// Parses a search-results page and returns the announcement links on it
pub fn parse_links(html: &str, anchor: &Selector, filter: &LinkFilter) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let targets = anchor_targets(&doc, anchor, filter);

    ::log::debug!("HTML parser found {} anchor targets", targets.len());

    let links = filter.window(&targets)?;
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    Ok(links)
}

/// Full descendant text of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
