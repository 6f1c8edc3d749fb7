//! Private REST API endpoints (authentication required).
//!
//! These endpoints require credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::ExchangeError;
use crate::upbit::UpbitRestClient;
use crate::upbit::endpoints::private;

impl UpbitRestClient {
    /// List all account balances, including the deposit currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crypto_exchange_client::upbit::UpbitRestClient;
    /// use crypto_exchange_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("access", "secret"));
    ///     let client = UpbitRestClient::builder().credentials(credentials).build();
    ///
    ///     for account in client.get_accounts().await? {
    ///         println!("{}: {}", account.currency, account.balance);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_accounts(&self) -> Result<Vec<UpbitAccount>, ExchangeError> {
        self.private_get(private::ACCOUNTS).await
    }

    /// Place an order.
    pub async fn place_order(&self, params: &OrderParams) -> Result<OrderResponse, ExchangeError> {
        self.private_post(private::ORDERS, params).await
    }
}
