//! Random-walk OHLC history generation.
//!
//! Every function here is total: unknown symbols resolve to the default
//! profile, and the per-step clamp keeps all prices positive and finite.
//! Randomness is an injected dependency so callers (and tests) can pin a
//! seed; pass `rand::rng()` when reproducibility does not matter.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use rand::Rng;

use crate::PercentCalculus;
use crate::market::{Candle, Period, SymbolProfile};

/// Damping applied to the per-step uniform shock.
const NOISE_DAMP: f64 = 0.6;
/// Per-step probability of a fat-tail spike.
const SPIKE_PROBABILITY: f64 = 0.02;
/// Scale of a spike shock relative to the profile volatility.
const SPIKE_SCALE: f64 = 8.0;
/// Largest allowed single-step move, in percent of the open.
const MAX_STEP_PERCENT: f64 = 3.0;
/// Largest wick extension beyond the candle body, in percent.
const MAX_WICK_PERCENT: f64 = 1.0;

/// Generates `days + 1` daily candles for `symbol`, ending today (UTC).
///
/// The walk starts at the symbol's base price `days` ago and carries each
/// close forward as the next open. Timestamps sit at UTC midnight and
/// increase by exactly one calendar day. A zero-day request yields a single
/// candle; the walk step still applies to it.
///
/// ### Arguments
/// * `symbol` - Ticker to resolve; unknown tickers use the default profile.
/// * `days` - Number of days to walk back from today.
/// * `rng` - Randomness source for shocks and spikes.
///
/// ### Example
/// ```rust
/// use smd_rs::series;
///
/// let candles = series::history("BTC", 30, &mut rand::rng());
/// assert_eq!(candles.len(), 31);
/// ```
pub fn history<R: Rng>(symbol: &str, days: usize, rng: &mut R) -> Vec<Candle> {
    history_ending(symbol, days, Utc::now().date_naive(), rng)
}

/// Generates `days + 1` daily candles for `symbol`, ending on `last_day`.
///
/// Same walk as [`history`] with an explicit final calendar day, so two
/// identically seeded invocations produce identical sequences regardless of
/// the wall clock.
pub fn history_ending<R: Rng>(symbol: &str, days: usize, last_day: NaiveDate, rng: &mut R) -> Vec<Candle> {
    let profile = SymbolProfile::resolve(symbol);
    let first_day = last_day - Days::new(days as u64);
    let mut open = profile.base_price();

    (0..=days)
        .map(|i| {
            let day = first_day + Days::new(i as u64);
            let time = day.and_time(NaiveTime::MIN).and_utc();
            let candle = walk_step(&profile, open, time, rng);
            open = candle.close();
            candle
        })
        .collect()
}

/// Generates the candle history for a named chart window.
///
/// A pure lookup of the window's day count, delegating to [`history`].
///
/// ### Example
/// ```rust
/// use smd_rs::market::Period;
/// use smd_rs::series;
///
/// let candles = series::history_for_period("BTC", Period::Week, &mut rand::rng());
/// assert_eq!(candles.len(), 8);
/// ```
pub fn history_for_period<R: Rng>(symbol: &str, period: Period, rng: &mut R) -> Vec<Candle> {
    history(symbol, period.days(), rng)
}

/// Generates exactly one forward-looking candle from a caller-supplied last price.
///
/// Used for live-tick simulation: the open pins to `last_price`, the close
/// moves by an undamped uniform shock scaled by `volatility`, and the wicks
/// bracket the body the same way the history walk does. No clamp and no
/// spike injection apply here.
pub fn next_tick<R: Rng>(last_price: f64, volatility: f64, rng: &mut R) -> Candle {
    let open = last_price;
    let shock = rng.random_range(-0.5..0.5) * volatility;
    let close = open * (1.0 + shock);
    let (high, low) = bracket(open, close, rng);

    Candle::from((Utc::now(), open, high, low, close))
}

/// Advances the walk by one day.
fn walk_step<R: Rng>(profile: &SymbolProfile, open: f64, time: DateTime<Utc>, rng: &mut R) -> Candle {
    let mut shock = rng.random_range(-0.5..0.5) * (profile.volatility() * NOISE_DAMP);
    if rng.random_bool(SPIKE_PROBABILITY) {
        shock += rng.random_range(-0.5..0.5) * (profile.volatility() * SPIKE_SCALE);
    }

    // Clamp after the spike; reordering changes the look of the series.
    let close = open * (1.0 + profile.drift() + shock);
    let close = close.clamp(
        open.subpercent(MAX_STEP_PERCENT),
        open.addpercent(MAX_STEP_PERCENT),
    );
    let (high, low) = bracket(open, close, rng);

    Candle::from((time, open, high, low, close))
}

/// Extends the wicks beyond the candle body by up to [`MAX_WICK_PERCENT`].
fn bracket<R: Rng>(open: f64, close: f64, rng: &mut R) -> (f64, f64) {
    let high = open.max(close).addpercent(rng.random_range(0.0..MAX_WICK_PERCENT));
    let low = open.min(close).subpercent(rng.random_range(0.0..MAX_WICK_PERCENT));
    (high, low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::DEFAULT_SYMBOL;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    }

    #[test]
    fn scenario_single_eth_candle() {
        let mut rng = StdRng::seed_from_u64(42);
        let candles = history_ending("ETH", 0, fixed_day(), &mut rng);

        assert_eq!(candles.len(), 1);
        let candle = &candles[0];
        assert_eq!(candle.open(), 2_800.0);
        assert!(candle.close() >= 2_716.0 && candle.close() <= 2_884.0);
        assert!(candle.high() >= candle.open().max(candle.close()));
        assert!(candle.low() <= candle.open().min(candle.close()));
    }

    #[test]
    fn history_length_and_monotone_time() {
        let mut rng = StdRng::seed_from_u64(1);
        for days in [0usize, 1, 7, 30, 365] {
            let candles = history_ending("BTC", days, fixed_day(), &mut rng);
            assert_eq!(candles.len(), days + 1);

            for pair in candles.windows(2) {
                assert_eq!(pair[1].timestamp() - pair[0].timestamp(), 86_400);
            }
            assert_eq!(candles.last().unwrap().time().date_naive(), fixed_day());
        }
    }

    #[test]
    fn closes_carry_forward_as_opens() {
        let mut rng = StdRng::seed_from_u64(7);
        let candles = history_ending("SOL", 50, fixed_day(), &mut rng);

        for pair in candles.windows(2) {
            assert_eq!(pair[1].open(), pair[0].close());
        }
    }

    #[test]
    fn every_step_stays_inside_the_clamp() {
        let mut rng = StdRng::seed_from_u64(3);
        // Long enough for spikes to land: ~20 expected at 2% per step.
        let candles = history_ending("DOGE", 1_000, fixed_day(), &mut rng);

        for candle in &candles {
            let open = candle.open();
            assert!(candle.close() >= open.subpercent(3.0));
            assert!(candle.close() <= open.addpercent(3.0));
            assert!(candle.low() > 0.0);
            assert!(candle.high().is_finite());
        }
    }

    #[test]
    fn unknown_symbol_uses_default_profile() {
        let mut rng = StdRng::seed_from_u64(11);
        let candles = history_ending("UNLISTED", 5, fixed_day(), &mut rng);
        let default_base = SymbolProfile::resolve(DEFAULT_SYMBOL).base_price();

        assert_eq!(candles[0].open(), default_base);
    }

    #[test]
    fn identical_seeds_give_identical_walks() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let walk_a = history_ending("ETH", 120, fixed_day(), &mut rng_a);
        let walk_b = history_ending("ETH", 120, fixed_day(), &mut rng_b);

        assert_eq!(walk_a, walk_b);
    }

    #[test]
    fn scenario_week_window_matches_seven_days() {
        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);

        let by_period = history_for_period("BTC", Period::Week, &mut rng_a);
        let by_days = history("BTC", 7, &mut rng_b);

        assert_eq!(by_period, by_days);
        assert_eq!(by_period.len(), 8);
    }

    #[test]
    fn next_tick_brackets_the_body() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let candle = next_tick(2_450.5, 0.025, &mut rng);
            assert_eq!(candle.open(), 2_450.5);
            assert!(candle.high() >= candle.open().max(candle.close()));
            assert!(candle.low() <= candle.open().min(candle.close()));
            assert!(candle.low() > 0.0);
        }
    }
}
