use std::sync::Arc;

use crypto_exchange_client::auth::EnvCredentials;
use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient};

fn live_tests_enabled() -> bool {
    std::env::var("UPBIT_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = CryptoExchangeClient::new(Exchange::Upbit);
    let markets = client.list_tradable_markets().await?;
    assert!(markets.iter().any(|m| m.market_code == "KRW-BTC"));

    let quotes = client.list_current_price_by_market_codes(&["KRW-BTC"]).await?;
    assert_eq!(quotes.len(), 1);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CryptoExchangeClient::builder(Exchange::Upbit)
        .credentials(Arc::new(credentials))
        .build();

    let accounts = client.list_accounts().await?;
    assert!(accounts.iter().all(|a| a.currency != "KRW"));

    Ok(())
}
