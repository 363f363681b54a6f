pub mod config;
pub mod document;
pub mod error;
pub mod locator;
pub mod result;
pub mod scanner;
pub mod walker;

pub use config::ScannerConfig;
pub use document::{SitemapDocument, parse_document};
pub use error::ScanError;
pub use locator::{Locator, ProgressCallback, SITEMAP_CANDIDATES, normalize_origin};
pub use result::{ScanResult, SitemapFailure};
pub use scanner::Scanner;
pub use walker::Walker;
