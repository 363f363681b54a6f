use serde::{Deserialize, Serialize};

/// A sitemap branch that contributed nothing because it could not be walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapFailure {
    pub url: String,
    pub reason: String,
}

/// Everything collected while walking one sitemap tree.
///
/// `sitemaps` and `urls` are kept in discovery order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub sitemaps: Vec<String>,
    pub urls: Vec<String>,
    pub failures: Vec<SitemapFailure>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(url: String, reason: String) -> Self {
        Self {
            sitemaps: Vec::new(),
            urls: Vec::new(),
            failures: vec![SitemapFailure { url, reason }],
        }
    }

    /// Append another result after this one, keeping both orders intact.
    pub fn merge(&mut self, other: ScanResult) {
        self.sitemaps.extend(other.sitemaps);
        self.urls.extend(other.urls);
        self.failures.extend(other.failures);
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
