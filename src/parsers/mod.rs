pub mod announcement;
pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::FieldSelectors;
use crate::error::{Result, ScrapeError};
use scraper::Selector;

/// Field selectors compiled once from configuration
#[derive(Debug, Clone)]
pub struct Selectors {
    pub anchor: Selector,
    pub title: Selector,
    pub date_container: Selector,
    pub date_item: Selector,
    pub summary: Selector,
    pub body: Selector,
    /// Source text of the summary and body selectors, used in error reports
    summary_source: String,
    body_source: String,
}

impl Selectors {
    /// Compile every configured selector, failing on the first invalid one
    pub fn new(config: &FieldSelectors) -> Result<Self> {
        Ok(Self {
            anchor: compile(&config.anchor)?,
            title: compile(&config.title)?,
            date_container: compile(&config.date_container)?,
            date_item: compile(&config.date_item)?,
            summary: compile(&config.summary)?,
            body: compile(&config.body)?,
            summary_source: config.summary.clone(),
            body_source: config.body.clone(),
        })
    }

    pub fn summary_source(&self) -> &str {
        &self.summary_source
    }

    pub fn body_source(&self) -> &str {
        &self.body_source
    }
}

#[cfg(test)]
impl Default for Selectors {
    fn default() -> Self {
        Self::new(&FieldSelectors::default()).expect("Default selectors should be valid")
    }
}

/// Parse a single CSS selector
pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
