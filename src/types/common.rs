//! Common enumerations shared by requests and the domain model.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
///
/// Upbit calls the buy side `bid` and the sell side `ask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy order
    #[serde(rename = "bid")]
    Buy,
    /// Sell order
    #[serde(rename = "ask")]
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "bid"),
            OrderSide::Sell => write!(f, "ask"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order - volume at a given price
    #[serde(rename = "limit")]
    Limit,
    /// Market buy - spend a total amount of quote currency
    #[serde(rename = "price")]
    MarketBuy,
    /// Market sell - sell a volume of the base currency
    #[serde(rename = "market")]
    MarketSell,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::Limit => "limit",
            OrderType::MarketBuy => "price",
            OrderType::MarketSell => "market",
        };
        write!(f, "{}", s)
    }
}

/// Status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Waiting to be filled
    Wait,
    /// Reserved (stop-limit waiting for trigger)
    Watch,
    /// Completely filled
    Done,
    /// Canceled
    Cancel,
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Wait => write!(f, "wait"),
            OrderState::Watch => write!(f, "watch"),
            OrderState::Done => write!(f, "done"),
            OrderState::Cancel => write!(f, "cancel"),
        }
    }
}

/// Direction of the price change against the previous close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceChange {
    /// Unrecognized or missing direction
    #[default]
    Unknown,
    /// Unchanged
    Even,
    /// Price went up
    Rise,
    /// Price went down
    Fall,
}

impl PriceChange {
    /// Map the exchange's change string; unmapped values yield `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "EVEN" => PriceChange::Even,
            "RISE" => PriceChange::Rise,
            "FALL" => PriceChange::Fall,
            _ => PriceChange::Unknown,
        }
    }
}

/// Market warning reported for a listed pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketWarning {
    /// No warning
    None,
    /// Investment caution
    Caution,
    /// A code this library does not know
    Other(String),
}

impl MarketWarning {
    /// Map the exchange's warning string.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "NONE" => MarketWarning::None,
            "CAUTION" => MarketWarning::Caution,
            other => MarketWarning::Other(other.to_string()),
        }
    }

    /// Whether this warning flags the market as risky.
    ///
    /// Unknown codes are treated as not risky.
    pub fn is_risky(&self) -> bool {
        matches!(self, MarketWarning::Caution)
    }
}
