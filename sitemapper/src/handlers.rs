use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use sitemapper_core::report::{ReportFormat, generate_report, save_report};
use sitemapper_core::scan::{ScanMode, ScanOptions, ScanOutcome, execute_scan};
use sitemapper_scanner::{ScanResult, ScannerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Everything the scan handler needs, pulled out of the parsed command line.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub domain: String,
    pub mode: ScanMode,
    pub config: ScannerConfig,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl ScanArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let domain = matches
            .get_one::<String>("DOMAIN")
            .context("a domain is required")?
            .clone();

        let mode = if matches.get_flag("main") {
            ScanMode::Main
        } else if matches.get_flag("subs") {
            ScanMode::Subs
        } else if matches.get_flag("urls") {
            ScanMode::Urls
        } else {
            bail!("one of --main, --subs or --urls is required");
        };

        let mut config = ScannerConfig::default();
        if let Some(timeout) = matches.get_one::<u64>("timeout") {
            config = config.with_timeout(*timeout);
        }
        if let Some(depth) = matches.get_one::<usize>("max-depth") {
            config = config.with_max_depth(*depth);
        }
        if let Some(concurrency) = matches.get_one::<usize>("concurrency") {
            config = config.with_concurrency(*concurrency);
        }

        let format = matches
            .get_one::<String>("format")
            .and_then(|f| ReportFormat::from_str(f))
            .unwrap_or(ReportFormat::Text);

        Ok(Self {
            domain,
            mode,
            config,
            format,
            output: matches.get_one::<PathBuf>("output").cloned(),
            quiet: matches.get_flag("quiet"),
            verbose: matches.get_flag("verbose"),
        })
    }
}

/// How a scan ended, for choosing the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Completed,
    NotFound,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose` when set.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn handle_scan(args: &ScanArgs) -> Result<ScanStatus> {
    if !args.quiet {
        eprintln!(
            "{} Scanning {} ({})",
            "→".blue(),
            args.domain.bright_white(),
            args.mode.as_str()
        );
    }

    let options = ScanOptions {
        domain: args.domain.clone(),
        mode: args.mode,
        config: args.config.clone(),
        show_progress_bars: !args.quiet,
    };

    let progress_callback: Option<sitemapper_core::ScanProgressCallback> = if args.verbose {
        Some(Arc::new(|msg: String| tracing::debug!("{}", msg)))
    } else {
        None
    };

    let outcome = execute_scan(options, progress_callback)
        .await
        .with_context(|| format!("could not scan {}", args.domain))?;

    match outcome {
        ScanOutcome::NotFound { ref origin } => {
            eprintln!(
                "{} No sitemap found on {}",
                "✗".red().bold(),
                origin.bright_white()
            );
            return Ok(ScanStatus::NotFound);
        }
        ScanOutcome::Found {
            ref sitemap,
            ref result,
        } => {
            if !args.quiet {
                eprintln!("{} Found sitemap at {}", "✓".green().bold(), sitemap);
            }
            if let Some(result) = result {
                print_failures(result);
            }
        }
    }

    let report = generate_report(&args.domain, args.mode, &outcome, args.format)
        .context("could not render report")?;

    match args.output {
        Some(ref path) => {
            save_report(&report, path)
                .with_context(|| format!("could not write report to {}", path.display()))?;
            if !args.quiet {
                eprintln!(
                    "{} Report saved to {}",
                    "✓".green().bold(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => print!("{}", report),
    }

    Ok(ScanStatus::Completed)
}

/// List sitemaps that could not be read so an empty result is not mistaken for a clean one.
fn print_failures(result: &ScanResult) {
    if result.failures.is_empty() {
        return;
    }

    eprintln!(
        "{} {} sitemap(s) could not be read:",
        "⚠".yellow().bold(),
        result.failures.len()
    );
    for failure in &result.failures {
        eprintln!(
            "  {} {} {}",
            "•".yellow(),
            failure.url.bright_white(),
            format!("({})", failure.reason).dimmed()
        );
    }
}
