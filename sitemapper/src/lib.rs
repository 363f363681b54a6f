pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use commands::command_argument_builder;
pub use handlers::{ScanArgs, ScanStatus, handle_scan, init_tracing};

// Re-export the embeddable entry point from sitemapper-core
pub use sitemapper_core::fetch_content_urls;
