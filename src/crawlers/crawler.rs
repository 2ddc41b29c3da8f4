use crate::error::Result;
use std::future::Future;
use std::time::Duration;

/// Status and body of one fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only a plain 200 counts as success
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Issues a single GET request for a page
pub trait Fetch {
    /// Fetch `url`; only network-level failures are errors, any status is returned
    fn get(&self, url: &str) -> impl Future<Output = Result<FetchedPage>>;
}

/// Pause taken after every request
pub trait Throttle {
    fn pause(&self) -> impl Future<Output = ()>;
}

/// Sleeps for a fixed interval after every request
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Throttle for FixedInterval {
    async fn pause(&self) {
        ::log::trace!("Throttling for {:?}", self.interval);
        tokio::time::sleep(self.interval).await;
    }
}

/// No pause between requests
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl Throttle for Unthrottled {
    async fn pause(&self) {}
}
