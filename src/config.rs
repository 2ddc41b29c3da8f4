use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Markers used to slice the announcement links out of a search page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkMarkers {
    /// Anchor target of the search page's own landing link; the window starts after it
    #[serde(default = "default_landing_path")]
    pub landing_path: String,

    /// Prefix of the first query-string-only anchor; the window ends before it
    #[serde(default = "default_query_prefix")]
    pub query_prefix: String,

    /// Anchors whose class list is exactly this single class are dropped
    #[serde(default = "default_excluded_class")]
    pub excluded_class: String,
}

/// CSS selectors locating each field on an announcement page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSelectors {
    /// Anchors considered by the link collector
    #[serde(default = "default_anchor_selector")]
    pub anchor: String,

    /// Title headings
    #[serde(default = "default_title_selector")]
    pub title: String,

    /// Containers holding the publication date
    #[serde(default = "default_date_container_selector")]
    pub date_container: String,

    /// Elements nested in a date container
    #[serde(default = "default_date_item_selector")]
    pub date_item: String,

    /// Summary container (first match is used)
    #[serde(default = "default_summary_selector")]
    pub summary: String,

    /// Body container (first match is used)
    #[serde(default = "default_body_selector")]
    pub body: String,
}

/// Site layout and request policy for the announcement scraper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Base URL relative announcement links are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search URL the page index is appended to
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Pause after every request, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Optional HTTP timeout; requests are unbounded when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub markers: LinkMarkers,

    #[serde(default)]
    pub selectors: FieldSelectors,
}

fn default_base_url() -> String {
    "https://gov.wales".to_string()
}

fn default_search_url() -> String {
    "https://gov.wales/announcements/search?keywords=&published_after=&published_before=&page="
        .to_string()
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_landing_path() -> String {
    "/announcements/search".to_string()
}

fn default_query_prefix() -> String {
    "?keywords".to_string()
}

fn default_excluded_class() -> String {
    "series-link".to_string()
}

fn default_anchor_selector() -> String {
    "a[href]".to_string()
}

fn default_title_selector() -> String {
    "h1".to_string()
}

fn default_date_container_selector() -> String {
    r#"div[class="row first-published"]"#.to_string()
}

fn default_date_item_selector() -> String {
    "div".to_string()
}

fn default_summary_selector() -> String {
    "div.hero-block__summary".to_string()
}

fn default_body_selector() -> String {
    r#"div[class="container-fluid announcement-item__body"]"#.to_string()
}

impl Default for LinkMarkers {
    fn default() -> Self {
        Self {
            landing_path: default_landing_path(),
            query_prefix: default_query_prefix(),
            excluded_class: default_excluded_class(),
        }
    }
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            anchor: default_anchor_selector(),
            title: default_title_selector(),
            date_container: default_date_container_selector(),
            date_item: default_date_item_selector(),
            summary: default_summary_selector(),
            body: default_body_selector(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_url: default_search_url(),
            delay_ms: default_delay_ms(),
            timeout_secs: None,
            markers: LinkMarkers::default(),
            selectors: FieldSelectors::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// URL of one page of search results
    pub fn search_page_url(&self, page: usize) -> String {
        format!("{}{}", self.search_url, page)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
