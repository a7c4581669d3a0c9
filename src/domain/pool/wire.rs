//! Request types for pool endpoints.
//!
//! Pool response payloads are not contractual, so the sub-client returns
//! envelope-unwrapped `serde_json::Value` rather than typed structs.

use crate::http::Query;

/// Filter for the pool-trades endpoint. Every field is optional; absent
/// fields are omitted from the query entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolTradesFilter {
    /// Source coin of the swap, e.g. `"BTC"`.
    pub symbol_source: Option<String>,
    /// Destination coin of the swap.
    pub symbol_destination: Option<String>,
    /// Retrieve trades from both directions.
    pub both_directions: Option<bool>,
}

impl PoolTradesFilter {
    pub fn source(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_source = Some(symbol.into());
        self
    }

    pub fn destination(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_destination = Some(symbol.into());
        self
    }

    pub fn both_directions(mut self, both: bool) -> Self {
        self.both_directions = Some(both);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.insert_opt("symbolSource", self.symbol_source.clone());
        query.insert_opt("symbolDestination", self.symbol_destination.clone());
        query.insert_opt("bothDirections", self.both_directions);
        query
    }
}
