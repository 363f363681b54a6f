use colored::Colorize;

pub mod report;
pub mod scan;

pub use scan::{
    ScanMode, ScanOptions, ScanOutcome, ScanProgressCallback, execute_scan, fetch_content_urls,
};

const BANNER: &str = r#"
     _ _
 ___(_) |_ ___ _ __ ___   __ _ _ __  _ __   ___ _ __
/ __| | __/ _ \ '_ ` _ \ / _` | '_ \| '_ \ / _ \ '__|
\__ \ | ||  __/ | | | | | (_| | |_) | |_) |  __/ |
|___/_|\__\___|_| |_| |_|\__,_| .__/| .__/ \___|_|
                              |_|   |_|
"#;

/// Print the banner to stderr so stdout stays clean for piping.
pub fn print_banner() {
    eprintln!("{}", BANNER.bright_cyan());
    eprintln!(
        "  {} {}\n",
        "sitemapper".bright_white().bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
}
