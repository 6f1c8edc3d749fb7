//! Signed authorization token generation.
//!
//! Upbit private endpoints require an `Authorization: Bearer <jwt>` header.
//! The JWT is signed with HMAC-SHA256 using the secret key and carries:
//!
//! ```text
//! access_key      the caller's access key
//! nonce           a fresh UUID
//! query_hash      hex(SHA512(query)), only when the request has parameters
//! query_hash_alg  "SHA512", alongside query_hash
//! ```

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use uuid::Uuid;

use crate::auth::Credentials;
use crate::error::ExchangeError;

/// Scheme prefix placed before the compact token.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Identifier of the query hash algorithm, as expected by the exchange.
pub const QUERY_HASH_ALG: &str = "SHA512";

/// Claims carried by an authorization token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The caller's access key.
    pub access_key: String,
    /// Single-use nonce.
    pub nonce: String,
    /// Hex SHA-512 digest of the canonical query/body string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash: Option<String>,
    /// Algorithm used for `query_hash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash_alg: Option<String>,
}

impl Claims {
    /// Build the claims for a request.
    pub fn new(access_key: impl Into<String>, nonce: Uuid, query: Option<&str>) -> Self {
        let (query_hash, query_hash_alg) = match query {
            Some(query) => (Some(hash_query(query)), Some(QUERY_HASH_ALG.to_string())),
            None => (None, None),
        };

        Self {
            access_key: access_key.into(),
            nonce: nonce.to_string(),
            query_hash,
            query_hash_alg,
        }
    }
}

/// Hex-encoded SHA-512 digest of a query string.
pub fn hash_query(query: &str) -> String {
    hex::encode(Sha512::digest(query.as_bytes()))
}

/// Generate a `Bearer` authorization header value.
///
/// # Arguments
///
/// * `credentials` - Access key and secret key
/// * `nonce` - The nonce for this token
/// * `query` - The URL-encoded parameters of the request, if any
///
/// # Example
///
/// ```rust
/// use crypto_exchange_client::auth::{Credentials, generate_authorization_token};
/// use uuid::Uuid;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("access", "secret");
/// let header = generate_authorization_token(&credentials, Uuid::new_v4(), None)?;
/// assert!(header.starts_with("Bearer "));
/// # Ok(())
/// # }
/// ```
pub fn generate_authorization_token(
    credentials: &Credentials,
    nonce: Uuid,
    query: Option<&str>,
) -> Result<String, ExchangeError> {
    let secret = credentials.expose_secret();
    if secret.is_empty() {
        return Err(ExchangeError::Signing("secret key must not be empty".to_string()));
    }

    let claims = Claims::new(credentials.access_key.clone(), nonce, query);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(format!("{BEARER_PREFIX}{token}"))
}
