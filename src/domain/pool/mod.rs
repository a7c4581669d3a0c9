//! Liquidity-pool domain: pool listings, swap trades, volume and liquidity
//! history.

pub mod client;
pub mod wire;

pub use client::Pools;
pub use wire::PoolTradesFilter;
