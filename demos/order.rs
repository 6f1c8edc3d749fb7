//! Example: Placing a market buy order.
//!
//! This places a REAL order. Requires `UPBIT_ACCESS_KEY` and `UPBIT_SECRET_KEY`.
//!
//! Run with: cargo run --example order

use std::sync::Arc;

use rust_decimal::Decimal;

use crypto_exchange_client::auth::EnvCredentials;
use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient, OrderRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::try_from_env()
        .ok_or("UPBIT_ACCESS_KEY and UPBIT_SECRET_KEY must be set")?;
    let client = CryptoExchangeClient::builder(Exchange::Upbit)
        .credentials(Arc::new(credentials))
        .build();

    // Spend 10,000 KRW on ETH at market price
    let request = OrderRequest::market_buy("KRW-ETH", Decimal::new(10_000, 0));
    match client.create_order(&request).await {
        Ok(order) => println!(
            "Order {} placed: {} {} state={}",
            order.id, order.side, order.market_code, order.state
        ),
        Err(e) if e.as_remote().is_some_and(|r| r.is_insufficient_funds()) => {
            println!("Not enough funds: {e}")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
