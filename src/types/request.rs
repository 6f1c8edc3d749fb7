//! Order placement request.

use rust_decimal::Decimal;

use crate::types::{OrderSide, OrderType};

/// Parameters for placing an order.
///
/// Use the constructors for the three supported order types; each leaves the
/// parameter the order type does not take unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Market code (e.g. "KRW-BTC").
    pub market_code: String,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    pub order_type: OrderType,
    /// Volume of the base currency. Unset for market buys.
    pub volume: Option<Decimal>,
    /// Limit price, or total spend for market buys. Unset for market sells.
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Create a limit order.
    pub fn limit(
        market_code: impl Into<String>,
        side: OrderSide,
        volume: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            market_code: market_code.into(),
            side,
            order_type: OrderType::Limit,
            volume: Some(volume),
            price: Some(price),
        }
    }

    /// Create a market buy that spends `total` of the quote currency.
    pub fn market_buy(market_code: impl Into<String>, total: Decimal) -> Self {
        Self {
            market_code: market_code.into(),
            side: OrderSide::Buy,
            order_type: OrderType::MarketBuy,
            volume: None,
            price: Some(total),
        }
    }

    /// Create a market sell of `volume` base currency.
    pub fn market_sell(market_code: impl Into<String>, volume: Decimal) -> Self {
        Self {
            market_code: market_code.into(),
            side: OrderSide::Sell,
            order_type: OrderType::MarketSell,
            volume: Some(volume),
            price: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_leave_unused_parameter_unset() {
        let buy = OrderRequest::market_buy("KRW-ETH", Decimal::new(10000, 0));
        assert_eq!(buy.order_type, OrderType::MarketBuy);
        assert!(buy.volume.is_none());

        let sell = OrderRequest::market_sell("KRW-ETH", Decimal::new(1, 3));
        assert_eq!(sell.side, OrderSide::Sell);
        assert!(sell.price.is_none());

        let limit = OrderRequest::limit("KRW-BTC", OrderSide::Buy, Decimal::ONE, Decimal::TEN);
        assert_eq!(limit.volume, Some(Decimal::ONE));
        assert_eq!(limit.price, Some(Decimal::TEN));
    }
}
