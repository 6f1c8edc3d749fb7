//! Common types used across the client library.

pub mod common;
pub mod model;
pub mod request;

pub use common::*;
pub use model::{Account, Market, Order, PriceQuote};
pub use request::OrderRequest;
