//! HTTP layer — the request dispatcher and query encoding.

pub mod client;
pub mod query;

pub use client::{BonfidaHttp, Method, Scope};
pub use query::{Query, QueryValue};
