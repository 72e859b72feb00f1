use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use chrono::serde::ts_seconds;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One OHLC observation for a single time bucket.
///
/// A candle is immutable after creation. The generators uphold the shape
/// invariants by construction; caller-built candles go through
/// [`CandleBuilder`], which checks them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    #[cfg_attr(feature = "serde", serde(with = "ts_seconds"))]
    time: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl From<(DateTime<Utc>, f64, f64, f64, f64)> for Candle {
    fn from((time, open, high, low, close): (DateTime<Utc>, f64, f64, f64, f64)) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}

impl Candle {
    /// Returns the candle's timestamp.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the candle's timestamp as Unix seconds.
    pub fn timestamp(&self) -> i64 {
        self.time.timestamp()
    }

    /// Returns the opening price.
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Returns the highest traded price.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the lowest traded price.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the closing price.
    pub fn close(&self) -> f64 {
        self.close
    }
}

/// Validating builder for caller-supplied candles.
///
/// ### Example
/// ```rust
/// use chrono::DateTime;
/// use smd_rs::market::CandleBuilder;
///
/// let candle = CandleBuilder::builder()
///     .open(100.0)
///     .high(110.0)
///     .low(95.0)
///     .close(105.0)
///     .time(DateTime::from_timestamp_secs(1712000000).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(candle.close(), 105.0);
/// ```
#[derive(Debug, Default)]
pub struct CandleBuilder {
    time: Option<DateTime<Utc>>,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
}

impl CandleBuilder {
    /// Creates an empty builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Sets the candle timestamp.
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the opening price.
    pub fn open(mut self, open: f64) -> Self {
        self.open = Some(open);
        self
    }

    /// Sets the highest price.
    pub fn high(mut self, high: f64) -> Self {
        self.high = Some(high);
        self
    }

    /// Sets the lowest price.
    pub fn low(mut self, low: f64) -> Self {
        self.low = Some(low);
        self
    }

    /// Sets the closing price.
    pub fn close(mut self, close: f64) -> Self {
        self.close = Some(close);
        self
    }

    /// Validates the fields and builds the candle.
    ///
    /// ### Returns
    /// The candle, or an error naming the missing field or violated invariant.
    pub fn build(self) -> Result<Candle> {
        let time = self.time.ok_or(Error::MissingField("time"))?;
        let open = self.open.ok_or(Error::MissingField("open"))?;
        let high = self.high.ok_or(Error::MissingField("high"))?;
        let low = self.low.ok_or(Error::MissingField("low"))?;
        let close = self.close.ok_or(Error::MissingField("close"))?;

        for price in [open, high, low, close] {
            if price <= 0.0 || !price.is_finite() {
                return Err(Error::InvalidPrice(price));
            }
        }

        if high < open.max(close) {
            return Err(Error::HighBelowBody(high, open, close));
        }
        if low > open.min(close) {
            return Err(Error::LowAboveBody(low, open, close));
        }

        Ok(Candle::from((time, open, high, low, close)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CandleBuilder {
        CandleBuilder::builder()
            .time(DateTime::from_timestamp_secs(1515151515).unwrap())
            .open(100.0)
            .high(111.0)
            .low(99.0)
            .close(110.0)
    }

    #[test]
    fn build_valid_candle() {
        let candle = base().build().unwrap();
        assert_eq!(candle.open(), 100.0);
        assert_eq!(candle.high(), 111.0);
        assert_eq!(candle.low(), 99.0);
        assert_eq!(candle.close(), 110.0);
        assert_eq!(candle.timestamp(), 1515151515);
    }

    #[test]
    fn build_missing_field() {
        let result = CandleBuilder::builder().open(100.0).build();
        assert!(matches!(result, Err(Error::MissingField("time"))));
    }

    #[test]
    fn build_rejects_nonpositive_price() {
        let result = base().low(0.0).build();
        assert!(matches!(result, Err(Error::InvalidPrice(_))));

        let result = base().close(-3.0).build();
        assert!(matches!(result, Err(Error::InvalidPrice(_))));
    }

    #[test]
    fn build_rejects_high_below_body() {
        let result = base().high(105.0).build();
        assert!(matches!(result, Err(Error::HighBelowBody(_, _, _))));
    }

    #[test]
    fn build_rejects_low_above_body() {
        let result = base().low(101.0).build();
        assert!(matches!(result, Err(Error::LowAboveBody(_, _, _))));
    }

    #[test]
    fn high_and_low_may_touch_the_body() {
        let candle = base().high(110.0).low(100.0).build().unwrap();
        assert_eq!(candle.high(), candle.close());
        assert_eq!(candle.low(), candle.open());
    }
}
