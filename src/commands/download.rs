//! Download command - fetch the configured symbol list, one file per symbol

use anyhow::Result;
use crypto_daily_prices::batch::run_batch;
use crypto_daily_prices::data::DailyPriceWriter;
use crypto_daily_prices::FetchConfig;
use tracing::info;

pub fn run(config: FetchConfig) -> Result<()> {
    let symbols = config.symbols();
    info!(
        "Starting download of {} symbols into {}",
        symbols.len(),
        config.output_dir.display()
    );

    let client = super::build_client(&config)?;
    let writer = DailyPriceWriter::new(&config.output_dir);
    let rt = super::build_runtime()?;

    println!("\n{}", "=".repeat(60));
    println!("DOWNLOADING DAILY CRYPTO PRICES FROM ALPHA VANTAGE");
    println!("{}", "=".repeat(60));
    println!("  Symbols: {:?}", config.symbols);
    println!("  Market:  {}", config.market);
    println!("  Delay:   {}s", config.delay_seconds);
    println!("  Output:  {}", config.output_dir.display());
    println!("{}\n", "=".repeat(60));

    let result = rt.block_on(run_batch(
        &client,
        &writer,
        &symbols,
        &config.market,
        config.delay(),
    ));

    println!("\n{}", "=".repeat(50));
    println!(
        "Summary: {} successful, {} failed",
        result.successful, result.failed
    );
    println!("Rate limit: {}s delay between calls", result.delay_seconds);
    for (symbol, reason) in &result.failures {
        println!("  ✗ {}: {}", symbol, reason);
    }
    println!("{}", "=".repeat(50));

    Ok(())
}
