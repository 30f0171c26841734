//! web-crawler main entry point
//!
//! This is the command-line interface for the single-host web crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use web_crawler::config::{load_settings_or_default, CrawlOptions, Settings};
use web_crawler::crawler::crawl;
use web_crawler::output::{open_sink, Reporter};
use web_crawler::url::parse_root_url;

/// A simple web crawler
///
/// Crawls every page reachable from URL on the same host, skipping localized
/// copies of pages, and reports new links, static assets and dead links.
#[derive(Parser, Debug)]
#[command(name = "web-crawler")]
#[command(version)]
#[command(about = "A simple web crawler", long_about = None)]
#[command(after_help = "EXAMPLES:\n\
    \tweb-crawler www.domain.com\n\
    \tweb-crawler www.domain.com -o out-file.txt\n\
    \tweb-crawler http://www.domain.com --links 3\n\n\
    EXIT STATUS:\n\
    \t0 - Success\n\
    \t1 - Failure")]
struct Cli {
    /// URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of links to crawl (0 = unlimited)
    #[arg(short, long, value_name = "n")]
    links: Option<u32>,

    /// Write output to file (default STDOUT)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Abort the execution if any page does not return a success code
    #[arg(short, long)]
    strict: bool,

    /// Run in quiet mode; it can only be used with --out
    #[arg(short, long)]
    quiet: bool,

    /// Run in verbose mode, listing every dead link
    #[arg(short, long)]
    verbose: bool,

    /// Path to TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Diagnostic log filter (overridden by RUST_LOG)
    #[arg(long, value_name = "FILTER", default_value = "web_crawler=warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(&cli.log_level);

    if cli.strict {
        println!("Running in strict mode");
    }

    let (options, settings) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => return abort(&format!("{:#}", e)),
    };

    if let Some(path) = &options.out {
        if !options.quiet {
            println!("Using out file: {}", path.display());
        }
    } else if options.quiet {
        tracing::warn!("--quiet has no effect without --out");
    }

    let sink = match open_sink(&options) {
        Ok(sink) => sink,
        Err(e) => return abort(&e.to_string()),
    };

    let to_file = options.out.is_some();
    match crawl(options, &settings, Reporter::new(sink)).await {
        Ok(summary) => {
            tracing::debug!(
                "Visited {} pages, {} assets seen",
                summary.visited.len(),
                summary.assets_seen
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_startup_error() {
                tracing::error!("Crawl could not start: {}", e);
            }
            // Already written to the report; make it visible on the terminal too
            if to_file {
                eprintln!("[ERROR] {}: {}", env!("CARGO_PKG_NAME"), e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` wins over the `--log-level` value when set.
fn setup_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Validates the command line and loads the settings file
fn prepare(cli: &Cli) -> anyhow::Result<(CrawlOptions, Settings)> {
    let root_url = parse_root_url(&cli.url).context("Invalid URL")?;

    let settings = load_settings_or_default(cli.config.as_deref())
        .context("Could not load settings")?;

    let options = CrawlOptions {
        root_url,
        page_limit: cli.links.filter(|&n| n > 0),
        strict: cli.strict,
        quiet: cli.quiet,
        verbose: cli.verbose,
        out: cli.out.clone(),
    };

    Ok((options, settings))
}

/// Prints a startup failure and returns the failure exit code
fn abort(message: &str) -> ExitCode {
    tracing::error!("{}", message);
    println!("[ERROR] {}: {}", env!("CARGO_PKG_NAME"), message);
    ExitCode::FAILURE
}
