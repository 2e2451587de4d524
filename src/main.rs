//! Crypto daily prices - main entry point
//!
//! This binary provides two subcommands:
//! - download: Fetch every configured symbol (default when no subcommand is given)
//! - fetch: Fetch a single symbol

use anyhow::Result;
use clap::{Parser, Subcommand};
use crypto_daily_prices::FetchConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "crypto-daily-prices")]
#[command(about = "Download daily crypto prices from Alpha Vantage into the standard JSON format", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to JSON configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download daily prices for a list of symbols
    Download {
        /// Symbols to download (comma-separated). E.g., "BTC,ETH,SOL"
        #[arg(short, long)]
        symbols: Option<String>,

        /// Quote market. E.g., "USD"
        #[arg(short, long)]
        market: Option<String>,

        /// Delay between API calls in seconds
        #[arg(short, long)]
        delay: Option<u64>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download daily prices for one symbol
    Fetch {
        /// Crypto symbol. E.g., "BTC"
        symbol: String,

        /// Quote market. E.g., "USD"
        #[arg(short, long)]
        market: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    std::fs::create_dir_all("logs")?;

    // Log file naming pattern: {command}_{date}.log
    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let log_path = PathBuf::from("logs").join(&log_filename);

    // Filter out noisy HTTP crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    // Same format without ANSI colors
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized");
    info!("Log file: {}", log_path.display());

    Ok(())
}

/// Split a comma-separated symbol list, dropping empty entries
fn parse_symbols(symbols: &str) -> Vec<String> {
    symbols
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_uppercase())
        .collect()
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let command_name = match &cli.command {
        Some(Commands::Fetch { .. }) => "fetch",
        Some(Commands::Download { .. }) | None => "download",
    };

    setup_logging(cli.verbose, command_name)?;

    let mut config = FetchConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Download {
        symbols: None,
        market: None,
        delay: None,
        output: None,
    }) {
        Commands::Download {
            symbols,
            market,
            delay,
            output,
        } => {
            if let Some(symbols) = symbols {
                let parsed = parse_symbols(&symbols);
                if parsed.is_empty() {
                    anyhow::bail!("--symbols must name at least one symbol");
                }
                config.symbols = parsed;
            }
            if let Some(market) = market {
                config.market = market;
            }
            if let Some(delay) = delay {
                config.delay_seconds = delay;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            commands::download::run(config)
        }

        Commands::Fetch {
            symbol,
            market,
            output,
        } => {
            if let Some(market) = market {
                config.market = market;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            commands::fetch::run(config, symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_symbols("btc, ETH,,sol "), vec!["BTC", "ETH", "SOL"]);
        assert!(parse_symbols(" , ").is_empty());
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["crypto-daily-prices"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_download_overrides_parse() {
        let cli = Cli::try_parse_from([
            "crypto-daily-prices",
            "download",
            "--symbols",
            "BTC,ETH",
            "--delay",
            "0",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Download { symbols, delay, .. }) => {
                assert_eq!(symbols.as_deref(), Some("BTC,ETH"));
                assert_eq!(delay, Some(0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
