//! Fetch command - download a single symbol

use anyhow::Result;
use crypto_daily_prices::batch::fetch_and_save;
use crypto_daily_prices::data::DailyPriceWriter;
use crypto_daily_prices::{FetchConfig, Symbol};

pub fn run(config: FetchConfig, symbol: String) -> Result<()> {
    let symbol = Symbol::new(symbol);
    let client = super::build_client(&config)?;
    let writer = DailyPriceWriter::new(&config.output_dir);
    let rt = super::build_runtime()?;

    match rt.block_on(fetch_and_save(&client, &writer, &symbol, &config.market)) {
        Ok(saved) => println!(
            "✓ {} days for {} saved to {}",
            saved.record.len(),
            symbol,
            saved.path.display()
        ),
        Err(e) => println!("✗ {} failed ({}): {}", symbol, e.kind(), e),
    }

    Ok(())
}
