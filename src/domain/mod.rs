//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — Raw serde structs matching service responses
//! - `client.rs` — Sub-client mapping typed arguments onto the dispatcher

pub mod market;
pub mod pool;
