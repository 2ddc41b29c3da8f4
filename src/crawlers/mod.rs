pub mod crawler;
pub mod web;

pub use crawler::{Fetch, FetchedPage, FixedInterval, Throttle, Unthrottled};
pub use web::HttpFetcher;
