//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::ExchangeError;
use crate::upbit::UpbitRestClient;
use crate::upbit::endpoints::public;

impl UpbitRestClient {
    /// List all markets, including the market warning of each.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crypto_exchange_client::upbit::UpbitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = UpbitRestClient::new();
    ///     for market in client.get_markets().await?.iter().take(3) {
    ///         println!("{} ({})", market.market, market.english_name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_markets(&self) -> Result<Vec<MarketInfo>, ExchangeError> {
        self.public_get_with_params(public::MARKET_ALL, &MarketAllParams { is_details: true })
            .await
    }

    /// Get the current ticker for one or more markets.
    ///
    /// An empty list is sent as an empty `markets` parameter; the exchange
    /// decides how to answer it.
    ///
    /// # Arguments
    ///
    /// * `market_codes` - Market codes (e.g. `["KRW-BTC", "KRW-ETH"]`).
    pub async fn get_ticker<S>(&self, market_codes: &[S]) -> Result<Vec<Ticker>, ExchangeError>
    where
        S: AsRef<str>,
    {
        let markets = market_codes
            .iter()
            .map(|code| code.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.public_get_with_params(public::TICKER, &TickerParams { markets })
            .await
    }
}
