//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the service sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Serialize};

// ─── MarketIdentifier ────────────────────────────────────────────────────────

/// How a market is addressed: by pair name (`"BTC/USDT"`) or by the market
/// account address.
///
/// The two forms map to different endpoint paths, so the discriminant is
/// explicit. Use [`MarketIdentifier::infer`] only when the caller genuinely
/// carries an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketIdentifier {
    /// Market symbol, e.g. `"SRM/USDC"`.
    Pair(String),
    /// Base58 market account address.
    Address(String),
}

impl MarketIdentifier {
    /// Classify an opaque identifier string.
    ///
    /// Pair symbols are short; account addresses are 32-byte base58 strings.
    /// Anything longer than 15 characters is treated as an address. This
    /// mirrors the service's documented convention but is inherently fragile;
    /// prefer constructing the variant directly.
    pub fn infer(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.len() > 15 {
            MarketIdentifier::Address(s)
        } else {
            MarketIdentifier::Pair(s)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MarketIdentifier::Pair(s) | MarketIdentifier::Address(s) => s,
        }
    }
}

impl std::fmt::Display for MarketIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for MarketIdentifier {
    fn from(s: &str) -> Self {
        MarketIdentifier::infer(s)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Trade side as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Candle resolution. The service accepts window lengths of 60, 3600, 14400,
/// or 86400 seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "60")]
    Minute1,
    #[serde(rename = "3600")]
    Hour1,
    #[serde(rename = "14400")]
    Hour4,
    #[serde(rename = "86400")]
    Day1,
}

impl Resolution {
    /// Window length in seconds, the form the query parameter takes.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Hour1 => 3600,
            Self::Hour4 => 14400,
            Self::Day1 => 86400,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seconds())
    }
}
