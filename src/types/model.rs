//! Exchange-neutral result types returned by [`ExchangeClient`](crate::ExchangeClient).
//!
//! All values are created fresh per response and never mutated afterwards.

use time::OffsetDateTime;

use crate::types::{OrderSide, OrderState, OrderType, PriceChange};

/// A balance held in one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Currency code (e.g. "BTC").
    pub currency: String,
    /// Available quantity.
    pub balance_quantity: f64,
    /// Quantity locked in open orders or withdrawals.
    pub locked_quantity: f64,
    /// Average purchase price.
    pub average_purchase_price: f64,
    /// Currency the average price is quoted in.
    pub unit_currency: String,
}

/// A tradable market listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    /// Market code (e.g. "KRW-BTC").
    pub market_code: String,
    /// Localized (Korean) name.
    pub korean_name: String,
    /// English name.
    pub english_name: String,
    /// Whether the exchange flags the market for investment caution.
    pub is_risky: bool,
}

/// Current price snapshot for a market.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub market_code: String,
    /// Time of the last trade.
    pub traded_at_utc: OffsetDateTime,
    /// Time of the last trade in milliseconds since the epoch.
    pub traded_at_milliseconds: i64,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub previous_closing_price: f64,
    pub change: PriceChange,
    /// Absolute change against the previous close.
    pub change_price: f64,
    /// Absolute change rate against the previous close.
    pub change_rate: f64,
    pub signed_change_price: f64,
    pub signed_change_rate: f64,
    /// Volume of the last trade.
    pub trade_volume: f64,
    /// Accumulated trade value since 00:00 UTC.
    pub accumulated_trade_price: f64,
    pub accumulated_trade_price_24h: f64,
    /// Accumulated trade volume since 00:00 UTC.
    pub accumulated_trade_volume: f64,
    pub accumulated_trade_volume_24h: f64,
    pub highest_52_week_price: f64,
    /// Date of the 52-week high (`yyyy-MM-dd`).
    pub highest_52_week_date: String,
    pub lowest_52_week_price: f64,
    /// Date of the 52-week low (`yyyy-MM-dd`).
    pub lowest_52_week_date: String,
    /// Server timestamp of the snapshot in milliseconds.
    pub timestamp_milliseconds: i64,
}

/// An order as acknowledged by the exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Exchange-assigned order identifier.
    pub id: String,
    pub market_code: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub state: OrderState,
    /// Requested price; absent for market sells.
    pub price: Option<f64>,
    /// Average fill price, once anything traded.
    pub average_price: Option<f64>,
    /// Requested volume; absent for market buys.
    pub volume: Option<f64>,
    pub remaining_volume: Option<f64>,
    pub executed_volume: f64,
    pub reserved_fee: f64,
    pub remaining_fee: f64,
    pub paid_fee: f64,
    pub locked: f64,
    pub trades_count: u32,
    pub created_at: OffsetDateTime,
}
