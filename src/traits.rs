//! Trait definition for exchange clients.
//!
//! [`ExchangeClient`] is the exchange-neutral surface: every backend maps its
//! wire responses into the shared model types. This enables:
//! - Mock implementations for testing
//! - Swapping the backend behind [`CryptoExchangeClient`](crate::CryptoExchangeClient)
//!
//! # Example
//!
//! ```rust,ignore
//! use crypto_exchange_client::{ExchangeClient, ExchangeError};
//!
//! async fn print_holdings<C: ExchangeClient>(client: &C) -> Result<(), ExchangeError> {
//!     for account in client.list_accounts().await? {
//!         println!("{}: {}", account.currency, account.balance_quantity);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::ExchangeError;
use crate::types::{Account, Market, Order, OrderRequest, PriceQuote};

/// Operations every exchange backend provides.
pub trait ExchangeClient: Send + Sync {
    /// List the caller's holdings, excluding the deposit currency.
    fn list_accounts(&self) -> impl Future<Output = Result<Vec<Account>, ExchangeError>> + Send;

    /// List the markets that can be traded.
    fn list_tradable_markets(
        &self,
    ) -> impl Future<Output = Result<Vec<Market>, ExchangeError>> + Send;

    /// Get the current price of each of the given markets.
    fn list_current_price_by_market_codes<S>(
        &self,
        market_codes: &[S],
    ) -> impl Future<Output = Result<Vec<PriceQuote>, ExchangeError>> + Send
    where
        S: AsRef<str> + Sync;

    /// Place an order.
    fn create_order(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<Order, ExchangeError>> + Send;
}
