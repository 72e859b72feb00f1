//! Core market data types.
//!
//! This module provides the fundamental types shared by the generators:
//! - `Candle`: one OHLC observation with a UTC timestamp.
//! - `CandleBuilder`: validating construction for caller-supplied candles.
//! - `SymbolProfile`: per-ticker walk parameters with a default fallback.
//! - `Period`: named chart windows mapped to day counts.

mod candle;
mod profile;

pub use candle::*;
pub use profile::*;
