use smd_rs::prelude::*;
use smd_rs::{liquidity, series, utils};

fn main() -> Result<()> {
    let mut rng = rand::rng();

    let candles = series::history_for_period("ETH", Period::Month, &mut rng);
    utils::write_json_to_file("eth_1m.json".into(), &candles)?;

    let last_close = candles.last().ok_or(Error::EmptySeries)?.close();
    let profile = liquidity::profile(last_close)?;
    utils::write_json_to_file("eth_profile.json".into(), &profile)?;

    println!("wrote eth_1m.json and eth_profile.json");
    println!("first candle:\n{}", utils::to_json(&candles[0])?);

    Ok(())
}
