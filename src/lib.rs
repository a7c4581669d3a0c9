//! # Bonfida SDK
//!
//! A thin async Rust client for the Bonfida Serum market-data REST API:
//! trading pairs, trades, volumes, orderbooks, candles, and liquidity pools.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, errors, network constants
//! 2. **Auth** — Credentials + pluggable request signing for the private scope
//! 3. **HTTP** — `BonfidaHttp`, the single request dispatcher every endpoint
//!    delegates to (URL construction, ordered query encoding, envelope
//!    unwrapping, error classification)
//! 4. **Domains** — `markets` and `pools` sub-clients with typed wire structs
//! 5. **High-Level Client** — `BonfidaClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bonfida_sdk::prelude::*;
//!
//! let client = BonfidaClient::new()?;
//!
//! let pairs = client.markets().pairs().await?;
//! let trades = client.markets().recent_trades("SRM/USDC").await?;
//! let pools = client.pools().recent().await?;
//! ```
//!
//! The dispatcher makes exactly one network call per invocation: no retries,
//! no caching, no pagination. Callers decide retry policy from the status
//! code carried in [`error::HttpError::Status`].

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and pluggable request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Request dispatcher and query encoding.
pub mod http;

// ── Layer 4: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `BonfidaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{MarketIdentifier, Resolution, Side};

    // Domain types — markets
    pub use crate::domain::market::{Candle, OrderbookLevel, OrderbookSnapshot, Trade, VolumeStats};

    // Domain types — pools
    pub use crate::domain::pool::PoolTradesFilter;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{PRIVATE_API_URL, PUBLIC_API_URL};

    // Auth
    pub use crate::auth::{Credentials, HmacSha256Signer, RequestSigner, SignRequest};

    // HTTP dispatcher
    pub use crate::http::{BonfidaHttp, Method, Query, QueryValue, Scope};

    // Client + sub-clients
    pub use crate::client::{BonfidaClient, BonfidaClientBuilder, MarketsClient, PoolsClient};
}
