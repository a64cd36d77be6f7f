mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use price_exporter_lib::render::MAX_PRECISION;
use price_exporter_lib::yahoo_chart_api::Client;
use price_exporter_lib::{Exporter, Query, DEFAULT_PRECISION};

#[derive(Parser)]
#[command(name = "price-exporter")]
#[command(about = "Export daily closing prices for a ticker as JSON")]
struct Cli {
    /// Ticker symbol, e.g. AAPL
    symbol: String,

    /// First day to export (YYYY-MM-DD)
    start_date: String,

    /// Last day to export, inclusive (YYYY-MM-DD). Defaults to today
    #[arg(long)]
    end: Option<String>,

    /// Emit raw closes instead of split/dividend adjusted closes
    #[arg(long)]
    no_adjust: bool,

    /// Lay the provider response out with plain column names
    #[arg(long)]
    flat_columns: bool,

    /// Decimal digits kept in prices
    #[arg(
        long,
        default_value_t = DEFAULT_PRECISION,
        value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64)
    )]
    precision: u32,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Chart API base URL
    #[arg(long, env = "PRICE_EXPORTER_BASE_URL")]
    base_url: Option<String>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("price_exporter={}", level).parse()?)
                .add_directive(format!("price_exporter_lib={}", level).parse()?)
                .add_directive(format!("yahoo_chart_api={}", level).parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut query = Query::new(&cli.symbol, &cli.start_date)?.with_adjusted(!cli.no_adjust);
    if let Some(end) = &cli.end {
        query = query.with_end_date(end)?;
    }

    let client = match &cli.base_url {
        Some(url) => Client::with_base_url(url),
        None => Client::new(),
    }
    .with_timeout(Duration::from_secs(cli.timeout));
    tracing::debug!("using chart API at {}", client.base_url());

    let exporter = Exporter::new(client).with_flat_columns(cli.flat_columns);
    let records = exporter
        .export(&query)
        .await
        .with_context(|| format!("failed to export prices for {}", query.symbol()))?;

    output::print_json(&records, Some(cli.precision))?;

    Ok(())
}
