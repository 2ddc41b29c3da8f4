use thiserror::Error;

/// Errors raised while collecting links or extracting announcements
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network-level failure (connection refused, DNS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A scan boundary was missing from the search page's anchor list
    #[error("marker not found in anchor list: {marker}")]
    MarkerNotFound { marker: String },

    /// A required container was missing from an announcement page
    #[error("no element matches selector: {selector}")]
    ElementNotFound { selector: String },

    /// A configured CSS selector could not be parsed
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A link or base URL could not be parsed or joined
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration could not be decoded or a record could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
