//! Low-level request dispatcher — `BonfidaHttp`.
//!
//! Every endpoint method in the SDK delegates to [`BonfidaHttp::request`]:
//! build the URL, attach headers, dispatch once, classify the status, and
//! unwrap the response envelope. No retries, no caching, no state between
//! calls.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::auth::{RequestSigner, SignRequest};
use crate::error::HttpError;
use crate::http::query::Query;

/// Product identifier sent with every request.
const USER_AGENT: &str = concat!("bonfida-sdk/", env!("CARGO_PKG_VERSION"));

/// Which of the two API surfaces a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Public,
    Private,
}

/// Supported HTTP verbs.
///
/// A closed set: each variant carries its own body rule (GET never sends a
/// body, POST always does, DELETE only with a non-empty query). Verbs outside
/// this set are rejected at parse time, before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Method {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else if s.eq_ignore_ascii_case("DELETE") {
            Ok(Method::Delete)
        } else {
            Err(HttpError::UnsupportedMethod(s.to_string()))
        }
    }
}

/// Stateless dispatcher over the two API surfaces.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`; safe to
/// share and call concurrently.
pub struct BonfidaHttp {
    public_url: String,
    private_url: String,
    client: reqwest::Client,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl BonfidaHttp {
    pub fn new(
        public_url: &str,
        private_url: &str,
        timeout: Duration,
        signer: Option<Arc<dyn RequestSigner>>,
    ) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            public_url: public_url.trim_end_matches('/').to_string(),
            private_url: private_url.trim_end_matches('/').to_string(),
            client,
            signer,
        })
    }

    fn base_url(&self, scope: Scope) -> &str {
        match scope {
            Scope::Public => &self.public_url,
            Scope::Private => &self.private_url,
        }
    }

    /// Full request URL: base + endpoint, plus the encoded query for GET.
    pub fn build_url(&self, scope: Scope, method: Method, endpoint: &str, query: &Query) -> String {
        let url = format!("{}/{}", self.base_url(scope), endpoint);
        if method == Method::Get && !query.is_empty() {
            format!("{}?{}", url, query.encode())
        } else {
            url
        }
    }

    /// Dispatch one request and return the envelope-unwrapped JSON payload.
    ///
    /// Exactly one network call per invocation. 4xx/5xx responses fail with
    /// [`HttpError::Status`]; transport failures and invalid JSON surface as
    /// their own variants. Callers own any retry decision.
    pub async fn request(
        &self,
        scope: Scope,
        method: Method,
        endpoint: &str,
        query: &Query,
    ) -> Result<Value, HttpError> {
        let url = self.build_url(scope, method, endpoint, query);

        let body = match method {
            Method::Get => None,
            Method::Post => Some(serde_json::to_string(query).map_err(HttpError::Body)?),
            Method::Delete if query.is_empty() => None,
            Method::Delete => Some(serde_json::to_string(query).map_err(HttpError::Body)?),
        };

        let mut req = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        req = req
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if let Some(ref body) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        if scope == Scope::Private {
            let signer = self.signer.as_ref().ok_or(HttpError::MissingSigner)?;
            let sign_request = SignRequest {
                method,
                path: endpoint,
                body: body.as_deref(),
                timestamp_ms: chrono::Utc::now().timestamp_millis(),
            };
            for (name, value) in signer.sign(&sign_request) {
                req = req.header(name, value);
            }
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        tracing::debug!(%method, url = %url, status, class = status / 100, "http response");

        if (400..=599).contains(&status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status,
                method,
                url,
                body,
            });
        }

        let text = resp.text().await?;
        let parsed: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(unwrap_envelope(parsed))
    }

    /// String-typed entry point for callers that carry the verb as data.
    ///
    /// Unsupported verbs fail with [`HttpError::UnsupportedMethod`] before
    /// any network call is made.
    pub async fn request_str(
        &self,
        scope: Scope,
        method: &str,
        endpoint: &str,
        query: &Query,
    ) -> Result<Value, HttpError> {
        let method = method.parse::<Method>()?;
        self.request(scope, method, endpoint, query).await
    }
}

impl Clone for BonfidaHttp {
    fn clone(&self) -> Self {
        Self {
            public_url: self.public_url.clone(),
            private_url: self.private_url.clone(),
            client: self.client.clone(),
            signer: self.signer.clone(),
        }
    }
}

/// Unwrap the service's response envelope: an object with a `data` field
/// yields that field, anything else passes through unchanged.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}
