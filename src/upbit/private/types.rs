//! Wire types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{OrderRequest, OrderSide, OrderState, OrderType};

/// A balance as returned by `/v1/accounts`. Quantities are decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpbitAccount {
    pub currency: String,
    pub balance: String,
    pub locked: String,
    pub avg_buy_price: String,
    #[serde(default)]
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

/// Canonical order parameters.
///
/// Serialized once as a URL-encoded string for the token's query hash and
/// once as the JSON body; both come from this value, in this field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderParams {
    pub market: String,
    pub side: OrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub ord_type: OrderType,
}

impl From<&OrderRequest> for OrderParams {
    fn from(request: &OrderRequest) -> Self {
        Self {
            market: request.market_code.clone(),
            side: request.side,
            volume: request.volume,
            price: request.price,
            ord_type: request.order_type,
        }
    }
}

/// Order acknowledgement returned by `POST /v1/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub uuid: String,
    pub side: OrderSide,
    pub ord_type: OrderType,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub avg_price: Option<String>,
    pub state: OrderState,
    pub market: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub remaining_volume: Option<String>,
    pub reserved_fee: String,
    pub remaining_fee: String,
    pub paid_fee: String,
    pub locked: String,
    pub executed_volume: String,
    #[serde(default)]
    pub trades_count: u32,
}
