use std::{fs::File, io::BufWriter, path::PathBuf};

use serde::Serialize;

use crate::errors::{Error, Result};

/// Serializes `value` to a pretty-printed JSON string.
///
/// Chart front ends consume the generated series and profiles as plain
/// JSON documents; candle timestamps serialize as Unix seconds and bin
/// fields use camelCase keys.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from)
}

/// Writes `value` as pretty-printed JSON to `filepath`.
pub fn write_json_to_file<T: Serialize>(filepath: PathBuf, value: &T) -> Result<()> {
    let file = File::create(filepath)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liquidity;
    use crate::series;

    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn candle_json_uses_unix_seconds() {
        let mut rng = StdRng::seed_from_u64(2);
        let day = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let candles = series::history_ending("BTC", 0, day, &mut rng);

        let json = to_json(&candles).unwrap();
        assert!(json.contains("\"time\": 1712016000"));
        assert!(json.contains("\"open\""));
    }

    #[test]
    fn bin_json_uses_camel_case() {
        let buckets = liquidity::profile(2_450.5).unwrap();
        let json = to_json(&buckets).unwrap();
        assert!(json.contains("\"priceMultiplier\""));
        assert!(!json.contains("price_multiplier"));
    }
}
