//! # SMD: Synthetic Market Data for Charting Tools
//!
//! **SMD** is a Rust library that generates plausible-looking market data with no
//! exchange connection at all: daily OHLC candle histories driven by a bounded random
//! walk, and deterministic per-price liquidity profiles for range-selector widgets.
//! It is designed for **chart demos, UI prototypes, and deterministic tests** of
//! trading front ends.
//!
//! ## Why SMD?
//! - **No network, no state**: every generator is a pure function returning a complete
//!   result in one call.
//! - **Deterministic where it matters**: the liquidity profile is a pure function of
//!   its inputs, and the candle walk takes an injected RNG so tests can pin a seed.
//! - **Plausible shapes**: per-symbol volatility/drift profiles, fat-tail spike
//!   injection, and wick bracketing keep the series looking like a real chart.
//! - **Renders itself**: an optional [`plotters`](https://crates.io/crates/plotters)
//!   backend draws candlestick charts and liquidity profiles to SVG or PNG.
//!
//! ## Core Components
//! | Component            | Description                                                              |
//! |----------------------|--------------------------------------------------------------------------|
//! | **`Candle`**         | One OHLC observation with a UTC timestamp.                               |
//! | **`SymbolProfile`**  | Per-ticker base price, volatility, and drift; unknown tickers fall back. |
//! | **`Period`**         | Named chart windows (`1D`..`2Y`) mapped to day counts.                   |
//! | **`series`**         | The random-walk history generator and the single-tick generator.         |
//! | **`liquidity`**      | The 100-bucket deterministic liquidity profile.                          |
//! | **`Draw`**           | Candlestick + profile chart rendering (feature `draws`).                 |
//!
//! ## Getting Started
//! ### 1. Add SMD to your project:
//! ```toml
//! [dependencies]
//! smd-rs = "*"
//! rand = "*"
//! ```
//!
//! ### 2. Generate a month of candles and a liquidity profile:
//! ```rust
//! use smd_rs::prelude::*;
//! use smd_rs::{liquidity, series};
//!
//! fn main() -> smd_rs::errors::Result<()> {
//!     let mut rng = rand::rng();
//!
//!     // 31 candles ending today, following the ETH profile.
//!     let candles = series::history("ETH", 30, &mut rng);
//!     let last = candles.last().expect("one candle per day");
//!
//!     // 100 deterministic liquidity buckets around the last close.
//!     let profile = liquidity::profile(last.close())?;
//!     assert_eq!(profile.len(), 100);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//! | Feature  | Description                                                           |
//! |----------|-----------------------------------------------------------------------|
//! | `draws`  | Chart rendering through `plotters` (default).                         |
//! | `serde`  | Serde derives on the data types plus JSON export helpers.             |
//! | `wasm`   | Browser-friendly randomness via `getrandom`'s `wasm_js` backend.      |
//!
//! ## Error Handling
//! The generators themselves are total: unknown symbols fall back to a default
//! profile and numeric clamps keep every candle inside its valid range. Errors only
//! appear at the edges — parsing a period token, validating a caller-built candle,
//! rejecting a non-positive price before building a liquidity profile, or failing
//! to write a chart or JSON file.
//!
//! ```rust
//! use smd_rs::prelude::*;
//!
//! let err = "6H".parse::<Period>().unwrap_err();
//! assert!(matches!(err, Error::UnknownPeriod(_)));
//! ```
//!
//! ## License
//! MIT
#![warn(missing_docs)]

/// Core market data types: candles, symbol profiles, and chart periods.
pub mod market;

/// Error types for the library.
pub mod errors;

/// Random-walk OHLC history generation.
pub mod series;

/// Deterministic liquidity profile generation.
pub mod liquidity;

/// JSON export helpers for chart consumers.
#[cfg(feature = "serde")]
pub mod utils;

/// Draw candle charts and liquidity profiles with a lot of backends: png, svg, etc.
#[cfg(feature = "draws")]
pub mod draws;

/// Re-exports of commonly used types and traits for convenience.
pub mod prelude {
    pub use super::*;
    pub use crate::errors::*;
    pub use crate::liquidity::Bin;
    pub use crate::market::*;

    #[cfg(feature = "draws")]
    pub use crate::draws::*;
}

use std::ops::{Add, Div, Mul, Sub};

/// Trait for performing percentage-based calculations.
///
/// This trait provides methods to add, subtract, and compare percentages
/// for numeric types, enabling the clamping and bracketing math used by
/// the generators.
pub trait PercentCalculus<Rhs = Self> {
    /// Adds a percentage to the value.
    ///
    /// ### Arguments
    /// * `rhs` - The percentage to add (e.g., 10.0 for 10%).
    ///
    /// ### Returns
    /// The value increased by the given percentage.
    fn addpercent(self, rhs: Rhs) -> Self;

    /// Subtracts a percentage from the value.
    ///
    /// ### Arguments
    /// * `rhs` - The percentage to subtract (e.g., 10.0 for 10%).
    ///
    /// ### Returns
    /// The value decreased by the given percentage.
    fn subpercent(self, rhs: Rhs) -> Self;

    /// Calculates the percentage change between two values.
    ///
    /// ### Arguments
    /// * `new` - The new value to compare with.
    ///
    /// ### Returns
    /// The percentage change from the original value to the new value.
    fn change(self, new: Self) -> Self;
}

impl PercentCalculus for f64 {
    fn addpercent(self, percent: Self) -> Self {
        self.add(self.mul(percent.div(100.0)))
    }

    fn subpercent(self, percent: Self) -> Self {
        self.sub(self.mul(percent.div(100.0)))
    }

    fn change(self, new: Self) -> Self {
        new.sub(self).div(self).mul(100.0)
    }
}

#[cfg(test)]
mod percent {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(110.0, 100.0.addpercent(10.0))
    }

    #[test]
    fn sub() {
        assert_eq!(90.0, 100.0.subpercent(10.0))
    }

    #[test]
    fn change() {
        assert_eq!(10.0, 100.0.change(110.0))
    }
}
