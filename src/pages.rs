use crate::config::SiteConfig;
use crate::crawlers::{Fetch, FixedInterval, HttpFetcher, Throttle};
use crate::error::Result;
use crate::filter::LinkFilter;
use crate::parsers::{Selectors, announcement, html};
use crate::results::AnnouncementRecord;
use crate::utils::resolve_link;

/// Collects announcement links from search pages and extracts each announcement
///
/// Requests are issued one at a time, each followed by a pause from the
/// throttle. A page answered with anything other than 200 yields `None`
/// from both stages and is logged; structural mismatches are errors.
pub struct Announcements<F = HttpFetcher, T = FixedInterval> {
    config: SiteConfig,
    selectors: Selectors,
    filter: LinkFilter,
    fetcher: F,
    throttle: T,
}

impl Announcements {
    /// Create a scraper that fetches over HTTP and pauses for the configured delay
    pub fn new(config: SiteConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        let throttle = FixedInterval::new(config.delay());
        Self::with_parts(config, fetcher, throttle)
    }
}

impl<F, T> Announcements<F, T> {
    /// Create a scraper from explicit fetch and throttle policies
    pub fn with_parts(config: SiteConfig, fetcher: F, throttle: T) -> Result<Self> {
        let selectors = Selectors::new(&config.selectors)?;
        let filter = LinkFilter::new(config.markers.clone());

        Ok(Self {
            config,
            selectors,
            filter,
            fetcher,
            throttle,
        })
    }

    /// Replace the throttle policy
    pub fn with_throttle<U>(self, throttle: U) -> Announcements<F, U> {
        Announcements {
            config: self.config,
            selectors: self.selectors,
            filter: self.filter,
            fetcher: self.fetcher,
            throttle,
        }
    }
}

impl<F: Fetch, T: Throttle> Announcements<F, T> {
    /// Fetch one search-results page and return the announcement links on it
    ///
    /// `None` means the page did not answer 200 and contributes no links.
    pub async fn fetch_page_links(&self, url: &str) -> Result<Option<Vec<String>>> {
        let page = self.fetcher.get(url).await?;

        let result = if page.is_success() {
            html::parse_links(&page.body, &self.selectors.anchor, &self.filter).map(Some)
        } else {
            ::log::warn!("Search page {} returned status {}", url, page.status);
            Ok(None)
        };

        match &result {
            Ok(Some(links)) => ::log::info!("Found {} links in {}", links.len(), url),
            Ok(None) => {}
            Err(e) => ::log::error!("Failed to collect links from {}: {}", url, e),
        }

        self.throttle.pause().await;
        result
    }

    /// Fetch search pages `0..num_pages` in order and concatenate their links
    pub async fn fetch_all_links(&self, num_pages: usize) -> Result<Vec<String>> {
        let mut links = Vec::new();

        for page in 0..num_pages {
            let url = self.config.search_page_url(page);
            if let Some(page_links) = self.fetch_page_links(&url).await? {
                links.extend(page_links);
            }
        }

        ::log::info!("Collected {} links from {} pages", links.len(), num_pages);
        Ok(links)
    }

    /// Fetch one announcement page and extract its fields
    ///
    /// `None` means the page did not answer 200 and was not parsed.
    pub async fn extract_announcement(&self, url: &str) -> Result<Option<AnnouncementRecord>> {
        let page = self.fetcher.get(url).await?;

        let result = if page.is_success() {
            announcement::parse(&page.body, &self.selectors)
                .map(|fields| Some(fields.into_record(url)))
        } else {
            ::log::warn!("Announcement {} returned status {}", url, page.status);
            Ok(None)
        };

        if let Err(e) = &result {
            ::log::error!("Failed to extract announcement {}: {}", url, e);
        }

        self.throttle.pause().await;
        result
    }

    /// Collect links from `num_pages` search pages, then extract every announcement
    pub async fn scrape(&self, num_pages: usize) -> Result<Vec<AnnouncementRecord>> {
        let links = self.fetch_all_links(num_pages).await?;
        let mut records = Vec::with_capacity(links.len());

        for (i, link) in links.iter().enumerate() {
            let url = resolve_link(&self.config.base_url, link)?;
            ::log::debug!("Extracting announcement {} of {}: {}", i + 1, links.len(), url);

            if let Some(record) = self.extract_announcement(&url).await? {
                records.push(record);
            }
        }

        ::log::info!(
            "Extracted {} announcements from {} links",
            records.len(),
            links.len()
        );
        Ok(records)
    }
}
