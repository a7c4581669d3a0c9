//! High-level client — `BonfidaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{Credentials, RequestSigner};
use crate::domain::market::client::Markets;
use crate::domain::pool::client::Pools;
use crate::error::SdkError;
use crate::http::BonfidaHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::pool::client::Pools as PoolsClient;

/// The primary entry point for the Bonfida SDK.
///
/// Provides nested sub-client accessors per domain: `client.markets()`,
/// `client.pools()`. The client is stateless across calls and cheap to
/// clone; the underlying connection pool is shared between clones.
pub struct BonfidaClient {
    pub(crate) http: BonfidaHttp,
}

impl std::fmt::Debug for BonfidaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BonfidaClient").finish_non_exhaustive()
    }
}

impl BonfidaClient {
    pub fn builder() -> BonfidaClientBuilder {
        BonfidaClientBuilder::default()
    }

    /// Client with default URLs and no credentials.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn pools(&self) -> Pools<'_> {
        Pools { client: self }
    }

    /// Direct access to the request dispatcher, for endpoints this crate
    /// does not wrap.
    pub fn http(&self) -> &BonfidaHttp {
        &self.http
    }
}

impl Clone for BonfidaClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BonfidaClientBuilder {
    public_url: String,
    private_url: String,
    timeout: Duration,
    credentials: Option<Credentials>,
    signer: Option<Arc<dyn RequestSigner>>,
    hmac_signer: bool,
}

impl Default for BonfidaClientBuilder {
    fn default() -> Self {
        Self {
            public_url: crate::network::PUBLIC_API_URL.to_string(),
            private_url: crate::network::PRIVATE_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            credentials: None,
            signer: None,
            hmac_signer: false,
        }
    }
}

impl BonfidaClientBuilder {
    pub fn public_url(mut self, url: &str) -> Self {
        self.public_url = url.to_string();
        self
    }

    pub fn private_url(mut self, url: &str) -> Self {
        self.private_url = url.to_string();
        self
    }

    /// Per-call timeout applied to the underlying transport. Default 30 s.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API credentials for the private scope. Without a signer these are
    /// held but unused; see [`BonfidaClientBuilder::hmac_signer`].
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Install a custom request signer for the private scope.
    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Install the built-in HMAC-SHA256 signer over the configured
    /// credentials. May be called before or after
    /// [`credentials`](Self::credentials); `build` fails if none were set.
    pub fn hmac_signer(mut self) -> Self {
        self.hmac_signer = true;
        self
    }

    pub fn build(self) -> Result<BonfidaClient, SdkError> {
        let signer = match self.signer {
            Some(signer) => Some(signer),
            None if self.hmac_signer => {
                let credentials = self.credentials.ok_or_else(|| {
                    SdkError::Other("HMAC signer requires credentials".to_string())
                })?;
                Some(Arc::new(crate::auth::HmacSha256Signer::new(credentials))
                    as Arc<dyn RequestSigner>)
            }
            None => None,
        };

        let http = BonfidaHttp::new(&self.public_url, &self.private_url, self.timeout, signer)?;
        Ok(BonfidaClient { http })
    }
}
