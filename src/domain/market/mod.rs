//! Market-data domain: pairs, trades, volumes, orderbooks, candles.

pub mod client;
pub mod wire;

pub use client::Markets;
pub use wire::{Candle, OrderbookLevel, OrderbookSnapshot, Trade, VolumeStats};
