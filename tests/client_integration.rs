mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crypto_exchange_client::auth::StaticCredentials;
use crypto_exchange_client::error::ExchangeError;
use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient, OrderRequest};

use common::{ACCESS_KEY, SECRET_KEY, fixed_nonce, received_claims};

fn build_client(server: &MockServer, exchange: Exchange) -> CryptoExchangeClient {
    CryptoExchangeClient::builder(exchange)
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(ACCESS_KEY, SECRET_KEY)))
        .nonce_provider(fixed_nonce())
        .build()
}

fn assert_unsupported<T: std::fmt::Debug>(result: Result<T, ExchangeError>) {
    match result {
        Err(ExchangeError::UnsupportedExchange(exchange)) => {
            assert_eq!(exchange, Exchange::Bithumb)
        }
        other => panic!("expected unsupported exchange, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_exchange_never_reaches_network() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server, Exchange::Bithumb);

    assert_unsupported(client.list_accounts().await);
    assert_unsupported(client.list_tradable_markets().await);
    assert_unsupported(client.list_current_price_by_market_codes(&["KRW-BTC"]).await);
    assert_unsupported(
        client
            .create_order(&OrderRequest::market_buy("KRW-BTC", Decimal::new(5000, 0)))
            .await,
    );
}

#[tokio::test]
async fn test_upbit_facade_routes_to_backend() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "currency": "BTC",
        "balance": "1.0",
        "locked": "0.0",
        "avg_buy_price": "30000000",
        "avg_buy_price_modified": false,
        "unit_currency": "KRW"
    }]);

    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, Exchange::Upbit);
    let accounts = client.list_accounts().await.unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].average_purchase_price, 30_000_000.0);
    assert_eq!(received_claims(&server).await.access_key, ACCESS_KEY);
}

#[tokio::test]
async fn test_custom_transport_is_used() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/market/all"))
        .and(wiremock::matchers::header("user-agent", "custom-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = reqwest::Client::builder()
        .user_agent("custom-agent/1.0")
        .build()
        .unwrap();
    let client = CryptoExchangeClient::builder(Exchange::Upbit)
        .base_url(server.uri())
        .http_client(transport)
        .build();

    let markets = client.list_tradable_markets().await.unwrap();
    assert!(markets.is_empty());
}
