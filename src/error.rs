//! Error types for the exchange client library.

use serde::Deserialize;
use thiserror::Error;

use crate::client::Exchange;

/// The main error type for all exchange client operations.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The underlying HTTP transport failed (network, DNS, timeout, body read).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The exchange answered with a non-success status and an error envelope.
    #[error("{0}")]
    Remote(RemoteError),

    /// The response body is not valid JSON or not the expected shape.
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw body, lossily converted for diagnostics
        body: String,
    },

    /// A numeric field sent as a string is malformed.
    #[error("Invalid numeric value for `{field}`: {value:?}")]
    Parse {
        /// Name of the offending wire field
        field: &'static str,
        /// The raw value received
        value: String,
    },

    /// Building the signed authorization token failed.
    #[error("Failed to sign authorization token: {0}")]
    Signing(String),

    /// The selected exchange has no backend implementation.
    #[error("Unsupported crypto exchange: {0}")]
    UnsupportedExchange(Exchange),

    /// Request parameters could not be encoded or are not acceptable.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing required credentials
    #[error("Missing credentials: access key and secret key required for private endpoints")]
    MissingCredentials,

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl From<jsonwebtoken::errors::Error> for ExchangeError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ExchangeError::Signing(err.to_string())
    }
}

impl ExchangeError {
    /// Build a decode error, keeping the body for context.
    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        ExchangeError::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// The remote error, if this is one.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            ExchangeError::Remote(remote) => Some(remote),
            _ => None,
        }
    }
}

/// An error reported by the exchange in its response body.
///
/// Upbit answers failed requests with `{"error": {"message": "...", "name": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// HTTP status code of the response
    pub status: u16,
    /// Machine-readable error name (e.g. "insufficient_funds_bid")
    pub name: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status code {}: {}", self.status, self.message)
    }
}

impl RemoteError {
    /// Create a new remote error.
    pub fn new(status: u16, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
            message: message.into(),
        }
    }

    /// Parse the exchange error envelope from a response body.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Result<Self, serde_json::Error> {
        let envelope: ErrorEnvelope = serde_json::from_slice(body)?;
        Ok(Self::new(status, envelope.error.name, envelope.error.message))
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429 || self.name == error_names::TOO_MANY_REQUESTS
    }

    /// Check if the request was rejected for authentication reasons.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if an order failed for lack of funds.
    pub fn is_insufficient_funds(&self) -> bool {
        self.name.starts_with("insufficient_funds")
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    name: String,
}

/// Known Upbit error names for pattern matching.
pub mod error_names {
    /// Authentication errors
    pub const JWT_VERIFICATION: &str = "jwt_verification";
    pub const EXPIRED_ACCESS_KEY: &str = "expired_access_key";
    pub const NONCE_USED: &str = "nonce_used";
    pub const NO_AUTHORIZATION_IP: &str = "no_authorization_i_p";
    pub const OUT_OF_SCOPE: &str = "out_of_scope";
    pub const INVALID_QUERY_PAYLOAD: &str = "invalid_query_payload";

    /// Order errors
    pub const INSUFFICIENT_FUNDS_BID: &str = "insufficient_funds_bid";
    pub const INSUFFICIENT_FUNDS_ASK: &str = "insufficient_funds_ask";
    pub const UNDER_MIN_TOTAL_BID: &str = "under_min_total_bid";
    pub const UNDER_MIN_TOTAL_ASK: &str = "under_min_total_ask";
    pub const INVALID_VOLUME_BID: &str = "invalid_volume_bid";
    pub const INVALID_PRICE_BID: &str = "invalid_price_bid";
    pub const VALIDATION_ERROR: &str = "validation_error";

    /// Throttling
    pub const TOO_MANY_REQUESTS: &str = "too_many_requests";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_from_envelope() {
        let body = br#"{"error":{"message":"m","name":"n"}}"#;
        let error = RemoteError::from_body(429, body).unwrap();
        assert_eq!(error.status, 429);
        assert_eq!(error.message, "m");
        assert_eq!(error.name, "n");
        assert!(error.is_rate_limit());
    }

    #[test]
    fn test_remote_error_rejects_foreign_body() {
        assert!(RemoteError::from_body(500, b"<html>bad gateway</html>").is_err());
        assert!(RemoteError::from_body(500, br#"{"message":"no envelope"}"#).is_err());
    }

    #[test]
    fn test_remote_error_display() {
        let error = RemoteError::new(400, error_names::INSUFFICIENT_FUNDS_BID, "not enough KRW");
        assert_eq!(error.to_string(), "status code 400: not enough KRW");
        assert!(error.is_insufficient_funds());
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_unsupported_exchange_display() {
        let error = ExchangeError::UnsupportedExchange(Exchange::Bithumb);
        assert_eq!(error.to_string(), "Unsupported crypto exchange: bithumb");
    }
}
