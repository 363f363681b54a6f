use crate::config::ScannerConfig;
use crate::error::Result;
use crate::locator::{Locator, ProgressCallback};
use crate::result::ScanResult;
use crate::walker::Walker;
use tracing::info;

/// A locator and a walker sharing one HTTP client and configuration.
pub struct Scanner {
    locator: Locator,
    walker: Walker,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Self::with_config(&ScannerConfig::default())
    }

    pub fn with_config(config: &ScannerConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self {
            locator: Locator::new(client.clone()),
            walker: Walker::new(client)
                .with_max_depth(config.max_depth)
                .with_concurrency(config.concurrency),
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.locator = self.locator.with_progress_callback(callback.clone());
        self.walker = self.walker.with_progress_callback(callback);
        self
    }

    /// See [`Locator::locate`].
    pub async fn locate(&self, domain: &str) -> Result<Option<String>> {
        self.locator.locate(domain).await
    }

    /// See [`Walker::walk`].
    pub async fn walk(&self, sitemap_url: &str) -> ScanResult {
        self.walker.walk(sitemap_url).await
    }

    /// Locate the main sitemap of `domain` and return every content URL reachable from it.
    ///
    /// A domain without a sitemap yields an empty list.
    pub async fn content_urls(&self, domain: &str) -> Result<Vec<String>> {
        let Some(sitemap) = self.locate(domain).await? else {
            return Ok(Vec::new());
        };

        let result = self.walk(&sitemap).await;
        info!(
            "Collected {} URLs from {} ({} failed sitemaps)",
            result.urls.len(),
            sitemap,
            result.failures.len()
        );
        Ok(result.urls)
    }
}
