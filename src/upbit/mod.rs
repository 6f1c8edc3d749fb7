//! Upbit REST API client.
//!
//! Provides the raw Upbit endpoints on [`UpbitRestClient`] and, through
//! [`ExchangeClient`](crate::ExchangeClient), their mapping into the shared model.

mod client;
mod endpoints;
pub mod mapper;
pub mod private;
pub mod public;

pub use client::{UpbitRestClient, UpbitRestClientBuilder};
pub use endpoints::*;
