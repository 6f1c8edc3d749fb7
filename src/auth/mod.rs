//! Authentication module for exchange APIs.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - UUID nonce generation for replay attack prevention
//! - HS256-signed JWT authorization tokens with SHA-512 query hashes

mod credentials;
mod nonce;
mod token;

pub use credentials::{
    ACCESS_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use nonce::{NonceProvider, RandomNonce};
pub use token::{BEARER_PREFIX, Claims, QUERY_HASH_ALG, generate_authorization_token, hash_query};
