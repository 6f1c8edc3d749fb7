//! Nonce generation for token authentication.
//!
//! Every signed token carries a single-use UUID nonce so the exchange can
//! reject replayed tokens.

use uuid::Uuid;

/// Trait for providing nonces for authenticated requests.
///
/// Each call must return a value never handed out before.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    fn next_nonce(&self) -> Uuid;
}

/// A nonce provider backed by random (version 4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl RandomNonce {
    /// Create a new random nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for RandomNonce {
    fn next_nonce(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_nonce_is_v4() {
        let nonce = RandomNonce::new().next_nonce();
        assert_eq!(nonce.get_version_num(), 4);
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(RandomNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                (0..1000).map(|_| p.next_nonce()).collect::<Vec<_>>()
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(all_nonces.insert(nonce), "Nonce must never repeat");
            }
        }
    }
}
