//! Pools sub-client — Serum Swap pool listings and history.

use serde_json::Value;

use crate::client::BonfidaClient;
use crate::domain::pool::wire::PoolTradesFilter;
use crate::error::SdkError;
use crate::http::{Method, Query, Scope};

/// Default `limit` for pool history queries.
const HISTORY_DEFAULT_LIMIT: u32 = 1000;
/// Default and maximum `limit` for volume and liquidity history.
const VOLUME_DEFAULT_LIMIT: u32 = 100;

/// Sub-client for liquidity-pool operations.
pub struct Pools<'a> {
    pub(crate) client: &'a BonfidaClient,
}

impl<'a> Pools<'a> {
    /// All pools.
    pub async fn all(&self) -> Result<Value, SdkError> {
        self.get("pools", Query::new()).await
    }

    /// Recently active pools.
    pub async fn recent(&self) -> Result<Value, SdkError> {
        self.get("pools-recent", Query::new()).await
    }

    /// Historical data for the pool keyed by the two mint addresses.
    pub async fn history(
        &self,
        mint_a: &str,
        mint_b: &str,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Value, SdkError> {
        let mut query = Query::new().with("limit", limit.unwrap_or(HISTORY_DEFAULT_LIMIT));
        query.insert_opt("startTime", start_time);
        query.insert_opt("endTime", end_time);

        self.get(&format!("pools/{}/{}", mint_a, mint_b), query).await
    }

    /// Swap fills from the last 24 hours, optionally filtered.
    pub async fn trades(&self, filter: &PoolTradesFilter) -> Result<Value, SdkError> {
        self.get("pools/trades", filter.to_query()).await
    }

    /// 24-hour volumes across all pools.
    pub async fn recent_volumes(&self) -> Result<Value, SdkError> {
        self.get("volumes/recent", Query::new()).await
    }

    /// Historical volume for one pool.
    pub async fn historical_volume(
        &self,
        mint_a: &str,
        mint_b: &str,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Value, SdkError> {
        let query = self.pool_query(mint_a, mint_b, limit, start_time, end_time);
        self.get("pools/volumes", query).await
    }

    /// Historical liquidity for one pool.
    pub async fn historical_liquidity(
        &self,
        mint_a: &str,
        mint_b: &str,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Value, SdkError> {
        let query = self.pool_query(mint_a, mint_b, limit, start_time, end_time);
        self.get("pools/liquidity", query).await
    }

    fn pool_query(
        &self,
        mint_a: &str,
        mint_b: &str,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Query {
        let mut query = Query::new()
            .with("mintA", mint_a)
            .with("mintB", mint_b)
            .with("limit", limit.unwrap_or(VOLUME_DEFAULT_LIMIT));
        query.insert_opt("startTime", start_time);
        query.insert_opt("endTime", end_time);
        query
    }

    async fn get(&self, endpoint: &str, query: Query) -> Result<Value, SdkError> {
        Ok(self
            .client
            .http
            .request(Scope::Public, Method::Get, endpoint, &query)
            .await?)
    }
}
