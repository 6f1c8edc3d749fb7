//! Upbit REST API endpoint constants.

/// Base URL for the Upbit REST API.
pub const UPBIT_BASE_URL: &str = "https://api.upbit.com";

/// Currency that balances are funded in; its account is cash, not a position.
pub const DEPOSIT_CURRENCY: &str = "KRW";

/// Public endpoints (no authentication required).
pub mod public {
    /// List all markets.
    pub const MARKET_ALL: &str = "/v1/market/all";
    /// Current ticker for a set of markets.
    pub const TICKER: &str = "/v1/ticker";
}

/// Private endpoints (authentication required).
pub mod private {
    /// List account balances.
    pub const ACCOUNTS: &str = "/v1/accounts";
    /// Place an order.
    pub const ORDERS: &str = "/v1/orders";
}
