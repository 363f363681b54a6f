use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every existence check and sitemap fetch.
pub const USER_AGENT: &str = concat!(
    "Sitemapper/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/trapdoorsec/sitemapper)"
);

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_DEPTH: usize = 8;
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Tunables shared by the locator and the walker.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Deepest nesting level the walker will fetch. The root sitemap is level 0.
    pub max_depth: usize,
    /// How many sibling sitemaps may be in flight at once.
    pub concurrency: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ScannerConfig {
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = Duration::from_secs(timeout_secs);
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the HTTP client every request in a scan goes through.
    pub fn build_client(&self) -> Result<Client> {
        let client = Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .connect_timeout(self.timeout / 2)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(client)
    }
}
