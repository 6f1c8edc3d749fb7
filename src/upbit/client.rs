//! Upbit REST API client implementation.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{CredentialsProvider, NonceProvider, RandomNonce, generate_authorization_token};
use crate::error::{ExchangeError, RemoteError};
use crate::traits::ExchangeClient;
use crate::types::{Account, Market, Order, OrderRequest, PriceQuote};
use crate::upbit::endpoints::UPBIT_BASE_URL;
use crate::upbit::mapper;
use crate::upbit::private::OrderParams;

/// The Upbit REST API client.
///
/// Cloning is cheap: the transport and providers are shared.
///
/// # Example
///
/// ```rust,no_run
/// use crypto_exchange_client::upbit::UpbitRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = UpbitRestClient::new();
///
///     let markets = client.get_markets().await?;
///     println!("{} markets", markets.len());
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use crypto_exchange_client::upbit::UpbitRestClient;
/// use crypto_exchange_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("access_key", "secret_key"));
///     let client = UpbitRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let accounts = client.get_accounts().await?;
///     println!("Accounts: {:?}", accounts);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct UpbitRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl UpbitRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`UpbitRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> UpbitRestClientBuilder {
        UpbitRestClientBuilder::new()
    }

    fn url(&self, endpoint: &str, query: Option<&str>) -> Result<Url, ExchangeError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if let Some(query) = query {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    fn authorization(&self, query: Option<&str>) -> Result<String, ExchangeError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ExchangeError::MissingCredentials)?;

        generate_authorization_token(
            credentials.get_credentials(),
            self.nonce_provider.next_nonce(),
            query,
        )
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query = encode_query(params)?;
        let url = self.url(endpoint, Some(&query))?;
        debug!(method = "GET", endpoint, "dispatching public request");

        let body = self.execute(self.http_client.get(url)).await?;
        decode(&body)
    }

    /// Make an authenticated GET request without parameters.
    pub(crate) async fn private_get<T>(&self, endpoint: &str) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let authorization = self.authorization(None)?;
        let url = self.url(endpoint, None)?;
        debug!(method = "GET", endpoint, "dispatching private request");

        let request = self.http_client.get(url).header(AUTHORIZATION, authorization);
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Make an authenticated POST request with a JSON body.
    ///
    /// The token's query hash and the body are both derived from `params`,
    /// so the exchange recomputes the same hash from the body it receives.
    pub(crate) async fn private_post<T, P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<T, ExchangeError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let query = encode_query(params)?;
        let payload =
            serde_json::to_vec(params).map_err(|e| ExchangeError::InvalidRequest(e.to_string()))?;
        let authorization = self.authorization(Some(&query))?;
        let url = self.url(endpoint, None)?;
        debug!(method = "POST", endpoint, "dispatching private request");

        let request = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Send a request and return the raw body of a successful response.
    ///
    /// The body is always read to the end, releasing the connection back to
    /// the pool whatever the status.
    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>, ExchangeError> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        match RemoteError::from_body(status.as_u16(), &body) {
            Ok(remote) => {
                warn!(
                    status = remote.status,
                    name = %remote.name,
                    message = %remote.message,
                    "exchange returned an error"
                );
                Err(ExchangeError::Remote(remote))
            }
            Err(e) => Err(ExchangeError::decode(e, &body)),
        }
    }
}

fn encode_query<Q>(params: &Q) -> Result<String, ExchangeError>
where
    Q: serde::Serialize + ?Sized,
{
    serde_urlencoded::to_string(params).map_err(|e| ExchangeError::InvalidRequest(e.to_string()))
}

fn decode<T>(body: &[u8]) -> Result<T, ExchangeError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| ExchangeError::decode(e, body))
}

impl Default for UpbitRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UpbitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpbitRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`UpbitRestClient`].
pub struct UpbitRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    http_client: Option<ClientWithMiddleware>,
}

impl UpbitRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: UPBIT_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent. Ignored when a transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies, pool settings).
    ///
    /// The client is wrapped with request tracing.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(
            ClientBuilder::new(client)
                .with(TracingMiddleware::default())
                .build(),
        );
        self
    }

    /// Use a fully assembled middleware client as is.
    pub fn middleware_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> UpbitRestClient {
        let user_agent = self.user_agent;
        let http_client = self.http_client.unwrap_or_else(|| default_http_client(user_agent));

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(RandomNonce::new()));

        UpbitRestClient {
            http_client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for UpbitRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_http_client(user_agent: Option<String>) -> ClientWithMiddleware {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("crypto-exchange-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("crypto-exchange-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build()
}

// ExchangeClient trait implementation.

impl ExchangeClient for UpbitRestClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        let accounts = self.get_accounts().await?;
        mapper::accounts(accounts)
    }

    async fn list_tradable_markets(&self) -> Result<Vec<Market>, ExchangeError> {
        let markets = self.get_markets().await?;
        Ok(markets.into_iter().map(mapper::market).collect())
    }

    async fn list_current_price_by_market_codes<S>(
        &self,
        market_codes: &[S],
    ) -> Result<Vec<PriceQuote>, ExchangeError>
    where
        S: AsRef<str> + Sync,
    {
        let tickers = self.get_ticker(market_codes).await?;
        tickers.into_iter().map(mapper::price_quote).collect()
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<Order, ExchangeError> {
        let response = self.place_order(&OrderParams::from(request)).await?;
        mapper::order(response)
    }
}
