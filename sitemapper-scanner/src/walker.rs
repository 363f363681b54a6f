use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH};
use crate::document::{SitemapDocument, parse_document};
use crate::error::{Result, ScanError};
use crate::locator::ProgressCallback;
use crate::result::ScanResult;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, warn};

/// Walks a sitemap tree depth-first, collecting sub-sitemaps and content URLs.
///
/// A branch that cannot be fetched or parsed is recorded in [`ScanResult::failures`] and
/// contributes nothing else; its siblings are still walked. Recursion is cut off when a
/// sitemap references one of its own ancestors or when the depth limit is reached.
pub struct Walker {
    client: Client,
    max_depth: usize,
    concurrency: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Walker {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Allow up to `concurrency` sibling sitemaps to be fetched at once.
    /// Results are still merged in document order.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub async fn walk(&self, sitemap_url: &str) -> ScanResult {
        self.walk_node(sitemap_url.to_string(), 0, Vec::new()).await
    }

    fn walk_node(
        &self,
        url: String,
        depth: usize,
        ancestors: Vec<String>,
    ) -> BoxFuture<'_, ScanResult> {
        async move {
            if ancestors.contains(&url) {
                let err = ScanError::Cycle(url.clone());
                warn!("Skipping {}: {}", url, err);
                return ScanResult::with_failure(url, err.to_string());
            }
            if depth > self.max_depth {
                let err = ScanError::DepthExceeded {
                    url: url.clone(),
                    limit: self.max_depth,
                };
                warn!("Skipping {}: {}", url, err);
                return ScanResult::with_failure(url, err.to_string());
            }

            if let Some(ref callback) = self.progress_callback {
                callback(format!("Fetching {}", url));
            }

            let document = match self.fetch_document(&url).await {
                Ok(document) => document,
                Err(e) => {
                    warn!("Failed to process sitemap {}: {}", url, e);
                    return ScanResult::with_failure(url, e.to_string());
                }
            };

            let mut result = ScanResult::new();
            match document {
                SitemapDocument::UrlSet { entries } => {
                    debug!("{} lists {} URLs", url, entries.len());
                    result.urls.extend(entries);
                }
                SitemapDocument::Index { entries } => {
                    debug!("{} references {} sitemaps", url, entries.len());
                    result.sitemaps.extend(entries.iter().cloned());

                    let mut lineage = ancestors;
                    lineage.push(url);

                    // `buffered` yields in input order, so any concurrency keeps document order.
                    let children: Vec<ScanResult> = stream::iter(entries)
                        .map(|child| self.walk_node(child, depth + 1, lineage.clone()))
                        .buffered(self.concurrency)
                        .collect()
                        .await;

                    for child in children {
                        result.merge(child);
                    }
                }
                SitemapDocument::Unrecognized => {
                    debug!("{} is neither a sitemap index nor a urlset", url);
                }
            }

            result
        }
        .boxed()
    }

    async fn fetch_document(&self, url: &str) -> Result<SitemapDocument> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_document(&body)
    }
}
