use crate::error::{Result, ScanError};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Conventional sitemap locations, probed in this order.
pub const SITEMAP_CANDIDATES: [&str; 5] = [
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/wp-sitemap.xml",
    "/sitemap-index.xml",
    "/sitemap.xml.gz",
];

/// Finds the main sitemap of a site by probing well-known paths with HEAD requests.
pub struct Locator {
    client: Client,
    progress_callback: Option<ProgressCallback>,
}

impl Locator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Return the first candidate sitemap URL that answers a HEAD request successfully.
    ///
    /// Candidates are checked one at a time and the search stops at the first hit.
    /// `Ok(None)` means no candidate responded; an `Err` only comes from a domain
    /// that cannot be turned into an origin.
    pub async fn locate(&self, domain: &str) -> Result<Option<String>> {
        let origin = normalize_origin(domain)?;
        info!("Searching for sitemap on {}", origin);
        self.report(format!("Searching for sitemap on {}", origin));

        for path in SITEMAP_CANDIDATES {
            let candidate = format!("{}{}", origin, path);
            debug!("Checking {}", candidate);

            match self.exists(&candidate).await {
                Ok(()) => {
                    info!("Found sitemap at {}", candidate);
                    self.report(format!("Found sitemap at {}", candidate));
                    return Ok(Some(candidate));
                }
                Err(e) => debug!("No sitemap at {}: {}", candidate, e),
            }
        }

        info!("No sitemap found on {}", origin);
        self.report(format!("No sitemap found on {}", origin));
        Ok(None)
    }

    async fn exists(&self, url: &str) -> Result<()> {
        self.client.head(url).send().await?.error_for_status()?;
        Ok(())
    }

    fn report(&self, message: String) {
        if let Some(ref callback) = self.progress_callback {
            callback(message);
        }
    }
}

/// Reduce a domain or URL to its origin, assuming `https` when no scheme is given.
///
/// `example.com/blog?x=1` becomes `https://example.com`; an explicit
/// `http://host:8080/path` keeps its scheme and port.
pub fn normalize_origin(domain: &str) -> Result<String> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("empty domain".to_string()));
    }

    let lowered = trimmed.to_ascii_lowercase();
    let with_scheme = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme)
        .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", domain, e)))?;

    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(ScanError::InvalidUrl(format!("{} has no host", domain)));
    }

    Ok(origin.ascii_serialization())
}
