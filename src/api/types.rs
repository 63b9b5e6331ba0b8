//! Shared types for the API layer.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::CatalogProvider;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<dyn CatalogProvider>,
    /// Fixed RNG seed for reproducible scoring; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl ApiContext {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Fresh random source for one request.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Caller context: injected by the caller middleware
// ═══════════════════════════════════════════════════════════

/// Identity of an already-authenticated caller.
///
/// Only a fingerprint of the bearer token is kept, for audit logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    pub fingerprint: String,
}

impl CallerContext {
    pub fn from_token(token: &str) -> Self {
        Self {
            fingerprint: caller_fingerprint(token),
        }
    }
}

/// Short, non-reversible token identifier (URL-safe base64 of the first
/// 9 bytes of its SHA-256).
pub fn caller_fingerprint(token: &str) -> String {
    use base64::Engine;
    use sha2::{Digest, Sha256};

    let digest = Sha256::digest(token.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..9])
}
