//! Markets sub-client — pairs, trades, volumes, orderbooks, candles.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::BonfidaClient;
use crate::domain::market::wire::{Candle, OrderbookSnapshot, Trade, VolumeStats};
use crate::error::SdkError;
use crate::http::{Method, Query, Scope};
use crate::shared::{MarketIdentifier, Resolution};

/// Default and maximum `limit` for the candles endpoint.
const CANDLES_DEFAULT_LIMIT: u32 = 1000;

/// Sub-client for market-data operations.
pub struct Markets<'a> {
    pub(crate) client: &'a BonfidaClient,
}

impl<'a> Markets<'a> {
    /// All pairs listed on the DEX.
    pub async fn pairs(&self) -> Result<Vec<String>, SdkError> {
        self.get("pairs", Query::new()).await
    }

    /// Recent trades across every market.
    pub async fn all_recent_trades(&self) -> Result<Vec<Trade>, SdkError> {
        self.get("trades/all/recent", Query::new()).await
    }

    /// Recent trades for one market, addressed by pair name or account
    /// address.
    pub async fn recent_trades(
        &self,
        market: impl Into<MarketIdentifier>,
    ) -> Result<Vec<Trade>, SdkError> {
        let endpoint = match market.into() {
            MarketIdentifier::Pair(pair) => format!("trades/{}", pair),
            MarketIdentifier::Address(addr) => format!("trades/address/{}", addr),
        };
        self.get(&endpoint, Query::new()).await
    }

    /// Rolling volume for one pair.
    pub async fn volumes(&self, pair: &str) -> Result<Vec<VolumeStats>, SdkError> {
        self.get(&format!("volumes/{}", pair), Query::new()).await
    }

    /// Current orderbook for one pair.
    pub async fn orderbook(&self, pair: &str) -> Result<OrderbookSnapshot, SdkError> {
        self.get(&format!("orderbooks/{}", pair), Query::new()).await
    }

    /// Historical OHLC data.
    ///
    /// `limit` defaults to 1000 (the service maximum); `start_time` and
    /// `end_time` are epoch milliseconds.
    pub async fn candles(
        &self,
        pair: &str,
        resolution: Resolution,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Candle>, SdkError> {
        let mut query = Query::new()
            .with("resolution", resolution.seconds())
            .with("limit", limit.unwrap_or(CANDLES_DEFAULT_LIMIT));
        query.insert_opt("startTime", start_time);
        query.insert_opt("endTime", end_time);

        self.get(&format!("candles/{}", pair), query).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: Query) -> Result<T, SdkError> {
        let value: Value = self
            .client
            .http
            .request(Scope::Public, Method::Get, endpoint, &query)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
