use crate::error::{Result, ScrapeError};
use crate::parsers::html::element_text;
use crate::parsers::{Selectors, text};
use crate::results::AnnouncementRecord;
use scraper::{Html, Selector};

/// Fields parsed from one announcement page, before the URL is attached
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementFields {
    pub title: String,
    pub release_date: String,
    pub summary: String,
    pub body: String,
}

impl AnnouncementFields {
    /// Summary and body joined by a single space
    pub fn text(&self) -> String {
        format!("{} {}", self.summary, self.body)
    }

    pub fn into_record(self, url: &str) -> AnnouncementRecord {
        let text = self.text();
        AnnouncementRecord::new(url.to_string(), self.title, self.release_date, text)
    }
}

/// Parses the title, date, summary and body out of an announcement page
pub fn parse(html: &str, selectors: &Selectors) -> Result<AnnouncementFields> {
    let doc = Html::parse_document(html);

    Ok(AnnouncementFields {
        title: title(&doc, &selectors.title),
        release_date: release_date(&doc, &selectors.date_container, &selectors.date_item),
        summary: first_block(&doc, &selectors.summary, selectors.summary_source())?,
        body: first_block(&doc, &selectors.body, selectors.body_source())?,
    })
}

/// Headings serialized as a bracketed list, then stripped of markup and brackets
fn title(doc: &Html, heading: &Selector) -> String {
    let headings: Vec<String> = doc.select(heading).map(|h| h.html()).collect();
    let listed = format!("[{}]", headings.join(", "));
    let stripped = text::strip_tags(&listed);

    text::strip_brackets(&stripped).to_string()
}

fn release_date(doc: &Html, container: &Selector, item: &Selector) -> String {
    let mut fragments = Vec::new();

    for block in doc.select(container) {
        for nested in block.select(item) {
            let fragment = element_text(nested);
            if text::starts_with_digit(&fragment) {
                fragments.push(fragment);
            }
        }
    }

    fragments.join(" ")
}

/// Cleaned text of the first element matching `selector`
fn first_block(doc: &Html, selector: &Selector, source: &str) -> Result<String> {
    let block = doc
        .select(selector)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound {
            selector: source.to_string(),
        })?;

    Ok(text::clean_block(&element_text(block)))
}
