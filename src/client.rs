//! Exchange-selecting client facade.

use std::str::FromStr;
use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use tracing::warn;

use crate::auth::{CredentialsProvider, NonceProvider, StaticCredentials};
use crate::error::ExchangeError;
use crate::traits::ExchangeClient;
use crate::types::{Account, Market, Order, OrderRequest, PriceQuote};
use crate::upbit::{UpbitRestClient, UpbitRestClientBuilder};

/// Cryptocurrency exchanges known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Exchange {
    /// Upbit (implemented)
    Upbit,
    /// Bithumb (no backend yet)
    Bithumb,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exchange::Upbit => write!(f, "upbit"),
            Exchange::Bithumb => write!(f, "bithumb"),
        }
    }
}

impl FromStr for Exchange {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upbit" => Ok(Exchange::Upbit),
            "bithumb" => Ok(Exchange::Bithumb),
            other => Err(ExchangeError::InvalidRequest(format!(
                "unknown exchange: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
enum Backend {
    Upbit(UpbitRestClient),
    Unsupported,
}

/// A client for the selected exchange.
///
/// Configuration is fixed at construction. Every [`ExchangeClient`] call on an
/// exchange without a backend fails with [`ExchangeError::UnsupportedExchange`]
/// before any request is sent.
///
/// # Example
///
/// ```rust,no_run
/// use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CryptoExchangeClient::with_keys(Exchange::Upbit, "access", "secret");
///     let quotes = client
///         .list_current_price_by_market_codes(&["KRW-BTC", "KRW-ETH"])
///         .await?;
///     for quote in quotes {
///         println!("{}: {}", quote.market_code, quote.trade_price);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CryptoExchangeClient {
    exchange: Exchange,
    backend: Backend,
}

impl CryptoExchangeClient {
    /// Create a client without credentials (public endpoints only).
    pub fn new(exchange: Exchange) -> Self {
        Self::builder(exchange).build()
    }

    /// Create a client with an access key and secret key.
    pub fn with_keys(
        exchange: Exchange,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self::builder(exchange)
            .credentials(Arc::new(StaticCredentials::new(access_key, secret_key)))
            .build()
    }

    /// Create a new client builder for the given exchange.
    pub fn builder(exchange: Exchange) -> CryptoExchangeClientBuilder {
        CryptoExchangeClientBuilder::new(exchange)
    }

    /// The selected exchange.
    pub fn exchange(&self) -> Exchange {
        self.exchange
    }

    /// The Upbit backend, for its raw endpoints.
    pub fn upbit(&self) -> Result<&UpbitRestClient, ExchangeError> {
        match &self.backend {
            Backend::Upbit(client) => Ok(client),
            Backend::Unsupported => Err(ExchangeError::UnsupportedExchange(self.exchange)),
        }
    }
}

impl ExchangeClient for CryptoExchangeClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.upbit()?.list_accounts().await
    }

    async fn list_tradable_markets(&self) -> Result<Vec<Market>, ExchangeError> {
        self.upbit()?.list_tradable_markets().await
    }

    async fn list_current_price_by_market_codes<S>(
        &self,
        market_codes: &[S],
    ) -> Result<Vec<PriceQuote>, ExchangeError>
    where
        S: AsRef<str> + Sync,
    {
        self.upbit()?
            .list_current_price_by_market_codes(market_codes)
            .await
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<Order, ExchangeError> {
        self.upbit()?.create_order(request).await
    }
}

/// Builder for [`CryptoExchangeClient`].
pub struct CryptoExchangeClientBuilder {
    exchange: Exchange,
    upbit: UpbitRestClientBuilder,
}

impl CryptoExchangeClientBuilder {
    /// Create a new builder for the given exchange.
    pub fn new(exchange: Exchange) -> Self {
        Self {
            exchange,
            upbit: UpbitRestClientBuilder::new(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.upbit = self.upbit.base_url(url);
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.upbit = self.upbit.credentials(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.upbit = self.upbit.nonce_provider(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.upbit = self.upbit.user_agent(user_agent);
        self
    }

    /// Use a preconfigured `reqwest` client as transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.upbit = self.upbit.http_client(client);
        self
    }

    /// Use a fully assembled middleware client as transport.
    pub fn middleware_client(mut self, client: ClientWithMiddleware) -> Self {
        self.upbit = self.upbit.middleware_client(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> CryptoExchangeClient {
        let backend = match self.exchange {
            Exchange::Upbit => Backend::Upbit(self.upbit.build()),
            other => {
                warn!(exchange = %other, "no backend for exchange; every call will fail");
                Backend::Unsupported
            }
        };

        CryptoExchangeClient {
            exchange: self.exchange,
            backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_from_str() {
        assert_eq!("upbit".parse::<Exchange>().unwrap(), Exchange::Upbit);
        assert_eq!(" Bithumb ".parse::<Exchange>().unwrap(), Exchange::Bithumb);
        assert!("binance".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_upbit_backend_selected() {
        let client = CryptoExchangeClient::new(Exchange::Upbit);
        assert_eq!(client.exchange(), Exchange::Upbit);
        assert!(client.upbit().is_ok());
    }

    #[test]
    fn test_unsupported_backend() {
        let client = CryptoExchangeClient::new(Exchange::Bithumb);
        assert!(matches!(
            client.upbit(),
            Err(ExchangeError::UnsupportedExchange(Exchange::Bithumb))
        ));
    }
}
