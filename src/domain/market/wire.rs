//! Wire types for market-data responses.
//!
//! Fields mirror the service's camelCase payloads; numeric prices and sizes
//! deserialize into `Decimal`, epoch-millis timestamps into `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::shared::serde_util::timestamp_ms;
use crate::shared::Side;

/// A single fill as reported by the trades endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub market: String,
    pub price: Decimal,
    pub size: Decimal,
    pub side: Side,
    #[serde(with = "timestamp_ms")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub fee_cost: Option<Decimal>,
    #[serde(default)]
    pub market_address: Option<String>,
}

/// Rolling volume figures for one market.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeStats {
    pub volume_usd: Decimal,
    pub volume: Decimal,
}

/// One price level of an orderbook side.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderbookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

/// Current orderbook for a market.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookSnapshot {
    pub market: String,
    pub bids: Vec<OrderbookLevel>,
    pub asks: Vec<OrderbookLevel>,
    #[serde(default)]
    pub market_address: Option<String>,
}

/// One OHLC candle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    #[serde(with = "timestamp_ms")]
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub volume_base: Option<Decimal>,
    #[serde(default)]
    pub volume_quote: Option<Decimal>,
}
