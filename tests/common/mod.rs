#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;
use wiremock::MockServer;

use crypto_exchange_client::auth::{BEARER_PREFIX, Claims, NonceProvider, StaticCredentials};
use crypto_exchange_client::upbit::UpbitRestClient;

pub const ACCESS_KEY: &str = "test_access";
pub const SECRET_KEY: &str = "test_secret";
pub const NONCE: &str = "6f1c3c2e-8d0e-4d8a-9a55-0b7a2b8f5c11";

/// Always hands out the same nonce so tokens can be checked exactly.
pub struct FixedNonce(pub Uuid);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> Uuid {
        self.0
    }
}

pub fn fixed_nonce() -> Arc<FixedNonce> {
    Arc::new(FixedNonce(Uuid::parse_str(NONCE).unwrap()))
}

pub fn build_public_client(server: &MockServer) -> UpbitRestClient {
    UpbitRestClient::builder().base_url(server.uri()).build()
}

pub fn build_private_client(server: &MockServer) -> UpbitRestClient {
    UpbitRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(ACCESS_KEY, SECRET_KEY)))
        .nonce_provider(fixed_nonce())
        .build()
}

/// Verify the signature of an `Authorization` header value and return its claims.
pub fn decode_authorization(header: &str) -> Claims {
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .expect("authorization header must use the Bearer scheme");
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    decode::<Claims>(token, &DecodingKey::from_secret(SECRET_KEY.as_bytes()), &validation)
        .expect("token must verify with the secret key")
        .claims
}

/// Claims of the single request the server received.
pub async fn received_claims(server: &MockServer) -> Claims {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let header = requests[0]
        .headers
        .get("authorization")
        .expect("request must carry an Authorization header")
        .to_str()
        .unwrap();
    decode_authorization(header)
}

pub fn ticker_json(market: &str, change: &str) -> serde_json::Value {
    serde_json::json!({
        "market": market,
        "trade_date": "20231114",
        "trade_time": "221320",
        "trade_date_kst": "20231115",
        "trade_time_kst": "071320",
        "trade_timestamp": 1_700_000_000_123_i64,
        "opening_price": 49_000_000.0,
        "high_price": 50_500_000.0,
        "low_price": 48_800_000.0,
        "trade_price": 50_000_000.0,
        "prev_closing_price": 49_000_000.0,
        "change": change,
        "change_price": 1_000_000.0,
        "change_rate": 0.0204081633,
        "signed_change_price": 1_000_000.0,
        "signed_change_rate": 0.0204081633,
        "trade_volume": 0.0012,
        "acc_trade_price": 123_456_789_000.0,
        "acc_trade_price_24h": 234_567_890_000.0,
        "acc_trade_volume": 2500.5,
        "acc_trade_volume_24h": 4800.25,
        "highest_52_week_price": 52_000_000.0,
        "highest_52_week_date": "2023-04-14",
        "lowest_52_week_price": 20_000_000.0,
        "lowest_52_week_date": "2022-12-30",
        "timestamp": 1_700_000_000_456_i64
    })
}
