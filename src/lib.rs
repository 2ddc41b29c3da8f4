// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod pages;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::SiteConfig;
pub use error::{Result, ScrapeError};
pub use pages::Announcements;
pub use results::AnnouncementRecord;
