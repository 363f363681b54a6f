use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use sitemapper_scanner::error::Result;
use sitemapper_scanner::{ScanResult, Scanner, ScannerConfig, normalize_origin};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// What the caller wants out of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Only locate the main sitemap.
    Main,
    /// Walk the tree and report sub-sitemaps.
    Subs,
    /// Walk the tree and report content URLs.
    Urls,
}

impl ScanMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim_start_matches('-').to_lowercase().as_str() {
            "main" => Some(ScanMode::Main),
            "subs" => Some(ScanMode::Subs),
            "urls" => Some(ScanMode::Urls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Main => "main",
            ScanMode::Subs => "subs",
            ScanMode::Urls => "urls",
        }
    }

    pub fn needs_walk(&self) -> bool {
        !matches!(self, ScanMode::Main)
    }
}

/// Options for configuring a scan
pub struct ScanOptions {
    pub domain: String,
    pub mode: ScanMode,
    pub config: ScannerConfig,
    pub show_progress_bars: bool,
}

/// Result of a scan as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// None of the candidate sitemap paths answered.
    NotFound { origin: String },
    /// `result` is `None` in [`ScanMode::Main`], which never walks the tree.
    Found {
        sitemap: String,
        result: Option<ScanResult>,
    },
}

/// Callback for reporting scan progress
pub type ScanProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Execute a scan with the given options
///
/// Locates the main sitemap and, unless only the location was asked for, walks it.
/// A missing sitemap is reported as [`ScanOutcome::NotFound`]; errors are reserved for
/// a domain that cannot be normalized or an HTTP client that cannot be built.
pub async fn execute_scan(
    options: ScanOptions,
    progress_callback: Option<ScanProgressCallback>,
) -> Result<ScanOutcome> {
    let ScanOptions {
        domain,
        mode,
        config,
        show_progress_bars,
    } = options;

    let origin = normalize_origin(&domain)?;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Looking for a sitemap on {}...", origin));
        Some(Arc::new(pb))
    } else {
        None
    };

    // Fan scanner messages out to the spinner and the caller's callback.
    let pb_clone = progress_bar.clone();
    let caller_callback = progress_callback.clone();
    let scanner_callback: sitemapper_scanner::ProgressCallback = Arc::new(move |msg: String| {
        if let Some(ref pb) = pb_clone {
            pb.set_message(msg.clone());
        }
        if let Some(ref callback) = caller_callback {
            callback(msg);
        }
    });

    let scanner = Scanner::with_config(&config)?.with_progress_callback(scanner_callback);

    let outcome = match scanner.locate(&origin).await? {
        None => ScanOutcome::NotFound { origin },
        Some(sitemap) if !mode.needs_walk() => ScanOutcome::Found {
            sitemap,
            result: None,
        },
        Some(sitemap) => {
            let result = scanner.walk(&sitemap).await;
            info!(
                "Walked {}: {} sub-sitemaps, {} URLs, {} failures",
                sitemap,
                result.sitemaps.len(),
                result.urls.len(),
                result.failures.len()
            );
            ScanOutcome::Found {
                sitemap,
                result: Some(result),
            }
        }
    };

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    Ok(outcome)
}

/// Locate the main sitemap of `domain` with default settings and return every content URL
/// reachable from it.
///
/// Returns an empty list when the domain has no sitemap.
pub async fn fetch_content_urls(domain: &str) -> Result<Vec<String>> {
    Scanner::new()?.content_urls(domain).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mode_from_str() {
        assert_eq!(ScanMode::from_str("--main"), Some(ScanMode::Main));
        assert_eq!(ScanMode::from_str("subs"), Some(ScanMode::Subs));
        assert_eq!(ScanMode::from_str("--URLS"), Some(ScanMode::Urls));
        assert_eq!(ScanMode::from_str("--all"), None);
    }

    #[test]
    fn test_only_main_skips_walk() {
        assert!(!ScanMode::Main.needs_walk());
        assert!(ScanMode::Subs.needs_walk());
        assert!(ScanMode::Urls.needs_walk());
    }
}
