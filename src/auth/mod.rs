//! Authentication — credentials and pluggable request signing.
//!
//! The private API surface expects HMAC-signed requests. Signing is a
//! strategy: the dispatcher asks a [`RequestSigner`] for the header set and
//! attaches whatever comes back. No signer is installed by default, and
//! dispatching the private scope without one fails before any network call.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::Method;

type HmacSha256 = Hmac<Sha256>;

/// API credentials bound at client construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
    subaccount: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            subaccount: None,
        }
    }

    pub fn with_subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// Hex HMAC-SHA256 of `payload` under the API secret.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// The request parts a signer covers.
#[derive(Debug, Clone, Copy)]
pub struct SignRequest<'a> {
    pub method: Method,
    /// Endpoint path, without the base URL or query string.
    pub path: &'a str,
    /// Serialized JSON body, when the request carries one.
    pub body: Option<&'a str>,
    /// Epoch milliseconds at dispatch time.
    pub timestamp_ms: i64,
}

/// Strategy that turns a request into authenticated headers.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &SignRequest<'_>) -> Vec<(String, String)>;
}

/// Header names emitted by [`HmacSha256Signer`].
pub mod headers {
    pub const KEY: &str = "BONFIDA-KEY";
    pub const TIMESTAMP: &str = "BONFIDA-TS";
    pub const SIGNATURE: &str = "BONFIDA-SIGN";
    pub const SUBACCOUNT: &str = "BONFIDA-SUBACCOUNT";
}

/// HMAC-SHA256 signer over `{timestamp}{METHOD}/{path}{body}`.
pub struct HmacSha256Signer {
    credentials: Credentials,
}

impl HmacSha256Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl RequestSigner for HmacSha256Signer {
    fn sign(&self, request: &SignRequest<'_>) -> Vec<(String, String)> {
        let payload = format!(
            "{}{}/{}{}",
            request.timestamp_ms,
            request.method,
            request.path,
            request.body.unwrap_or("")
        );
        let signature = self.credentials.sign(&payload);

        let mut headers = vec![
            (headers::KEY.to_string(), self.credentials.api_key().to_string()),
            (headers::TIMESTAMP.to_string(), request.timestamp_ms.to_string()),
            (headers::SIGNATURE.to_string(), signature),
        ];
        if let Some(sub) = self.credentials.subaccount() {
            headers.push((headers::SUBACCOUNT.to_string(), sub.to_string()));
        }
        headers
    }
}
