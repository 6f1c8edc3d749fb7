//! # Crypto Exchange Client
//!
//! An async Rust client library for cryptocurrency exchange REST APIs.
//! Upbit is the implemented backend.
//!
//! ## Features
//!
//! - Account balances, market listings, current prices and order placement
//! - HS256 JWT authorization with per-request UUID nonces and SHA-512 query hashes
//! - Exchange-neutral result types behind the [`ExchangeClient`] trait
//! - Pluggable `reqwest` transport with request tracing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crypto_exchange_client::{CryptoExchangeClient, Exchange, ExchangeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptoExchangeClient::new(Exchange::Upbit);
//!     let markets = client.list_tradable_markets().await?;
//!     println!("{} markets", markets.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod traits;
pub mod types;
pub mod upbit;

// Re-export commonly used types at crate root
pub use client::{CryptoExchangeClient, CryptoExchangeClientBuilder, Exchange};
pub use error::{ExchangeError, RemoteError};
pub use traits::ExchangeClient;
pub use types::{
    Account, Market, Order, OrderRequest, OrderSide, OrderState, OrderType, PriceChange,
    PriceQuote,
};

/// Result type alias using ExchangeError
pub type Result<T> = std::result::Result<T, ExchangeError>;
