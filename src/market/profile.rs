use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Per-symbol generation parameters for the random walk.
///
/// `base_price` is the starting price of the walk, `volatility` scales the
/// per-step noise, and `drift` is the constant per-step fractional bias.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolProfile {
    base_price: f64,
    volatility: f64,
    drift: f64,
}

/// The ticker every unknown symbol falls back to.
pub const DEFAULT_SYMBOL: &str = "BTC";

/// Walk profiles for the known tickers.
pub const PROFILES: &[(&str, SymbolProfile)] = &[
    ("BTC", SymbolProfile::new(43_250.0, 0.02, 0.001)),
    ("ETH", SymbolProfile::new(2_800.0, 0.025, 0.0008)),
    ("SOL", SymbolProfile::new(98.5, 0.04, 0.0012)),
    ("BNB", SymbolProfile::new(315.0, 0.018, 0.0006)),
    ("XRP", SymbolProfile::new(0.62, 0.03, 0.0004)),
    ("DOGE", SymbolProfile::new(0.085, 0.05, 0.0002)),
];

impl SymbolProfile {
    /// Creates a profile from its walk parameters.
    pub const fn new(base_price: f64, volatility: f64, drift: f64) -> Self {
        Self {
            base_price,
            volatility,
            drift,
        }
    }

    /// Looks up the profile for a ticker.
    ///
    /// Lookups never fail: tickers absent from [`PROFILES`] silently resolve
    /// to the [`DEFAULT_SYMBOL`] profile. Matching ignores ASCII case.
    ///
    /// ### Example
    /// ```rust
    /// use smd_rs::market::SymbolProfile;
    ///
    /// assert_eq!(SymbolProfile::resolve("eth").base_price(), 2_800.0);
    /// assert_eq!(
    ///     SymbolProfile::resolve("NO-SUCH-TICKER"),
    ///     SymbolProfile::resolve("BTC"),
    /// );
    /// ```
    pub fn resolve(symbol: &str) -> Self {
        PROFILES
            .iter()
            .find(|(ticker, _)| ticker.eq_ignore_ascii_case(symbol))
            .or_else(|| PROFILES.iter().find(|(ticker, _)| *ticker == DEFAULT_SYMBOL))
            .map(|(_, profile)| *profile)
            .expect("the default ticker is always present in the profile table")
    }

    /// Returns the starting price of the walk.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the per-step fractional noise scale.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the constant per-step fractional bias.
    pub fn drift(&self) -> f64 {
        self.drift
    }
}

/// Named chart windows, mapped to day counts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// One day (`1D`).
    Day,
    /// One week (`1W`).
    Week,
    /// One month (`1M`).
    Month,
    /// Three months (`3M`).
    ThreeMonths,
    /// One year (`1Y`).
    Year,
    /// Two years (`2Y`).
    TwoYears,
}

impl Period {
    /// Returns the number of days covered by the window.
    pub fn days(&self) -> usize {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::ThreeMonths => 90,
            Self::Year => 365,
            Self::TwoYears => 730,
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::Day),
            "1W" => Ok(Self::Week),
            "1M" => Ok(Self::Month),
            "3M" => Ok(Self::ThreeMonths),
            "1Y" => Ok(Self::Year),
            "2Y" => Ok(Self::TwoYears),
            _ => Err(Error::UnknownPeriod(token.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Day => "1D",
            Self::Week => "1W",
            Self::Month => "1M",
            Self::ThreeMonths => "3M",
            Self::Year => "1Y",
            Self::TwoYears => "2Y",
        };
        write!(f, "{token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_ticker() {
        let profile = SymbolProfile::resolve("ETH");
        assert_eq!(profile.base_price(), 2_800.0);
        assert_eq!(profile.volatility(), 0.025);
        assert_eq!(profile.drift(), 0.0008);
    }

    #[test]
    fn resolve_ignores_case() {
        assert_eq!(SymbolProfile::resolve("doge"), SymbolProfile::resolve("DOGE"));
    }

    #[test]
    fn resolve_unknown_ticker_falls_back() {
        assert_eq!(SymbolProfile::resolve("PEPE"), SymbolProfile::resolve(DEFAULT_SYMBOL));
        assert_eq!(SymbolProfile::resolve(""), SymbolProfile::resolve("BTC"));
    }

    #[test]
    fn period_day_counts() {
        assert_eq!(Period::Day.days(), 1);
        assert_eq!(Period::Week.days(), 7);
        assert_eq!(Period::Month.days(), 30);
        assert_eq!(Period::ThreeMonths.days(), 90);
        assert_eq!(Period::Year.days(), 365);
        assert_eq!(Period::TwoYears.days(), 730);
    }

    #[test]
    fn period_parse_round_trip() {
        for token in ["1D", "1W", "1M", "3M", "1Y", "2Y"] {
            let period = token.parse::<Period>().unwrap();
            assert_eq!(period.to_string(), token);
        }
    }

    #[test]
    fn period_parse_ignores_case() {
        assert_eq!("1w".parse::<Period>().unwrap(), Period::Week);
    }

    #[test]
    fn period_parse_unknown_token() {
        let result = "6H".parse::<Period>();
        assert!(matches!(result, Err(Error::UnknownPeriod(_))));
    }
}
