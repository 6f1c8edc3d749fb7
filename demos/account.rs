//! Example: Listing account holdings.
//!
//! Requires `UPBIT_ACCESS_KEY` and `UPBIT_SECRET_KEY` in the environment (or `.env`).
//!
//! Run with: cargo run --example account

use std::sync::Arc;

use crypto_exchange_client::auth::EnvCredentials;
use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient};

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

    println!("=== Accounts ===");
    for account in client.list_accounts().await? {
        println!(
            "{}: available={}, locked={}, avg price={} {}",
            account.currency,
            account.balance_quantity,
            account.locked_quantity,
            account.average_purchase_price,
            account.unit_currency
        );
    }

    Ok(())
}
