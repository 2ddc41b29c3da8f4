use crate::config::SiteConfig;
use crate::crawlers::crawler::{Fetch, FetchedPage};
use crate::error::Result;
use reqwest::Client;

/// Fetches pages over HTTP with a plain GET
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client from the site configuration
    ///
    /// No timeout is set unless `timeout_secs` is configured.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchedPage> {
        let started = std::time::Instant::now();
        ::log::debug!("GET: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        ::log::debug!(
            "Fetched {} ({}, {} bytes) in {:.2} seconds",
            url,
            status,
            body.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(FetchedPage::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/announcement"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hello</h1>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&SiteConfig::default()).unwrap();
        let page = fetcher
            .get(&format!("{}/announcement", server.uri()))
            .await
            .unwrap();

        assert!(page.is_success());
        assert_eq!(page.body, "<h1>Hello</h1>");
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&SiteConfig::default()).unwrap();
        let page = fetcher.get(&format!("{}/missing", server.uri())).await.unwrap();

        assert_eq!(page.status, 404);
        assert!(!page.is_success());
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        // Reserve a free port, then close it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let fetcher = HttpFetcher::new(&SiteConfig::default()).unwrap();
        assert!(matches!(
            fetcher.get(&uri).await,
            Err(crate::error::ScrapeError::Http(_))
        ));
    }
}
