//! Prints the edge response status distribution of one Cloudflare zone as JSON.
//!
//! Reads `CF_API_TOKEN` and `CF_ZONE_ID` from the environment, queries a fixed
//! window, and writes the result to stdout. Logs go to stderr (`RUST_LOG`
//! controls verbosity, default `warn`); the final failure diagnostic is always
//! written to stderr regardless of the filter.

mod config;
mod output;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use cf_stats_provider::{AnalyticsProvider, CloudflareProvider, FetchOptions};
use config::{Config, ConfigError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const WINDOW_START: &str = "2025-12-17T15:00:00Z";
const WINDOW_END: &str = "2025-12-18T15:00:00Z";
const GROUP_LIMIT: u32 = 10;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let rendered = match run(Config::from_env, CloudflareProvider::new).await {
        Ok(rendered) => rendered,
        Err(e) => {
            report(&e, std::io::stderr().lock());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
    {
        report(
            &anyhow::Error::new(e).context("Failed to write output"),
            std::io::stderr().lock(),
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Writes the one-line failure diagnostic, cause chain included.
fn report(error: &anyhow::Error, mut out: impl Write) {
    // Nowhere left to report a failing stderr.
    let _ = writeln!(out, "Error: {error:#}");
}

/// Loads configuration, fetches the fixed window for the zone and renders it.
///
/// Configuration errors return before `connect` is called. Nothing is
/// written anywhere; the caller prints the returned document only when every
/// step succeeded.
async fn run<L, P, F>(load: L, connect: F) -> anyhow::Result<String>
where
    L: FnOnce() -> Result<Config, ConfigError>,
    P: AnalyticsProvider,
    F: FnOnce(String) -> cf_stats_provider::Result<P>,
{
    let config = load()?;
    let provider = connect(config.api_token).context("Failed to create client")?;

    let options = FetchOptions {
        zone_id: config.zone_id,
        start_date: WINDOW_START.to_string(),
        end_date: WINDOW_END.to_string(),
        limit: GROUP_LIMIT,
    };
    tracing::info!(
        "Fetching {} status groups for zone {} ({} .. {})",
        options.limit,
        options.zone_id,
        options.start_date,
        options.end_date
    );

    let metrics = provider
        .fetch_metrics(&options)
        .await
        .context("Failed to fetch metrics")?;

    output::render_metrics(&metrics).context("Failed to encode JSON")
}
