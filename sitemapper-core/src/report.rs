// Report rendering for scan outcomes

use crate::scan::{ScanMode, ScanOutcome};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn generate_report(
    domain: &str,
    mode: ScanMode,
    outcome: &ScanOutcome,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(mode, outcome)),
        ReportFormat::Json => generate_json_report(domain, mode, outcome),
    }
}

/// One line per URL, so the output can be piped straight into other tools.
pub fn generate_text_report(mode: ScanMode, outcome: &ScanOutcome) -> String {
    let (sitemap, result) = match outcome {
        ScanOutcome::NotFound { origin } => {
            return format!("No sitemap found on {}\n", origin);
        }
        ScanOutcome::Found { sitemap, result } => (sitemap, result.as_ref()),
    };

    let (entries, empty_message) = match mode {
        ScanMode::Main => return format!("{}\n", sitemap),
        ScanMode::Subs => (
            result.map(|r| r.sitemaps.as_slice()).unwrap_or_default(),
            "No sub-sitemaps found.",
        ),
        ScanMode::Urls => (
            result.map(|r| r.urls.as_slice()).unwrap_or_default(),
            "No URLs found.",
        ),
    };

    if entries.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut report = String::new();
    for entry in entries {
        report.push_str(entry);
        report.push('\n');
    }
    report
}

pub fn generate_json_report(
    domain: &str,
    mode: ScanMode,
    outcome: &ScanOutcome,
) -> Result<String, serde_json::Error> {
    let mut json_report = serde_json::json!({
        "generator": "Sitemapper",
        "version": env!("CARGO_PKG_VERSION"),
        "domain": domain,
        "mode": mode,
    });

    match outcome {
        ScanOutcome::NotFound { origin } => {
            json_report["origin"] = serde_json::json!(origin);
            json_report["sitemap"] = serde_json::Value::Null;
        }
        ScanOutcome::Found { sitemap, result } => {
            json_report["sitemap"] = serde_json::json!(sitemap);
            if let Some(result) = result {
                match mode {
                    ScanMode::Subs => json_report["sitemaps"] = serde_json::json!(result.sitemaps),
                    ScanMode::Urls => json_report["urls"] = serde_json::json!(result.urls),
                    ScanMode::Main => {}
                }
                json_report["failures"] = serde_json::json!(result.failures);
            }
        }
    }

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
