//! Wire types for public REST API endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for the market listing.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarketAllParams {
    #[serde(rename = "isDetails")]
    pub is_details: bool,
}

/// Query parameters for the ticker.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TickerParams {
    /// Comma-joined market codes.
    pub markets: String,
}

/// A market as listed by `/v1/market/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketInfo {
    /// Market code (e.g. "KRW-BTC").
    pub market: String,
    /// Korean name.
    pub korean_name: String,
    /// English name.
    pub english_name: String,
    /// "NONE" or "CAUTION"; only present when details are requested.
    #[serde(default)]
    pub market_warning: Option<String>,
}

/// Current price snapshot as returned by `/v1/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub market: String,
    /// Trade date (UTC, `yyyyMMdd`).
    #[serde(default)]
    pub trade_date: String,
    /// Trade time (UTC, `HHmmss`).
    #[serde(default)]
    pub trade_time: String,
    /// Trade date (KST, `yyyyMMdd`).
    #[serde(default)]
    pub trade_date_kst: String,
    /// Trade time (KST, `HHmmss`).
    #[serde(default)]
    pub trade_time_kst: String,
    /// Trade timestamp in milliseconds.
    pub trade_timestamp: i64,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub prev_closing_price: f64,
    /// "EVEN", "RISE" or "FALL".
    pub change: String,
    pub change_price: f64,
    pub change_rate: f64,
    pub signed_change_price: f64,
    pub signed_change_rate: f64,
    pub trade_volume: f64,
    pub acc_trade_price: f64,
    pub acc_trade_price_24h: f64,
    pub acc_trade_volume: f64,
    pub acc_trade_volume_24h: f64,
    pub highest_52_week_price: f64,
    #[serde(default)]
    pub highest_52_week_date: String,
    pub lowest_52_week_price: f64,
    #[serde(default)]
    pub lowest_52_week_date: String,
    /// Server timestamp in milliseconds.
    pub timestamp: i64,
}
