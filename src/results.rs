use serde::{Deserialize, Serialize};

/// Text fields extracted from one announcement page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnouncementRecord {
    /// URL the page was fetched from
    pub url: String,

    /// Heading text with markup stripped
    pub title: String,

    /// Digit-leading fragments of the publication date block
    pub release_date: String,

    /// Summary followed by body text, ASCII only
    pub text: String,
}

impl AnnouncementRecord {
    /// Create a new announcement record
    pub fn new(url: String, title: String, release_date: String, text: String) -> Self {
        Self {
            url,
            title,
            release_date,
            text,
        }
    }
}
