//! Example: Fetching public market data.
//!
//! Run with: cargo run --example quotation

use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // No credentials needed for public endpoints
    let client = CryptoExchangeClient::new(Exchange::Upbit);

    println!("=== Markets ===");
    let markets = client.list_tradable_markets().await?;
    for market in markets.iter().take(5) {
        println!(
            "{} ({}, {}) risky={}",
            market.market_code, market.english_name, market.korean_name, market.is_risky
        );
    }
    println!("... {} markets in total", markets.len());

    println!("\n=== Current Prices ===");
    let quotes = client
        .list_current_price_by_market_codes(&["KRW-BTC", "KRW-ETH", "BTC-ETH"])
        .await?;
    for quote in quotes {
        println!(
            "{}: {} ({:?} {:+.2}%) at {}",
            quote.market_code,
            quote.trade_price,
            quote.change,
            quote.signed_change_rate * 100.0,
            quote.traded_at_utc
        );
    }

    Ok(())
}
