use smd_rs::prelude::*;
use smd_rs::{liquidity, series};

fn main() -> Result<()> {
    let mut rng = rand::rng();

    let candles = series::history_for_period("BTC", Period::Year, &mut rng);
    let last_close = candles.last().ok_or(Error::EmptySeries)?.close();
    let profile = liquidity::profile(last_close)?;

    let options = DrawOptions::default()
        .title("BTC 1Y synthetic history")
        .show_profile(true)
        .draw_output(DrawOutput::Png("btc_1y.png"));

    Draw::with_series(&candles)
        .with_profile(&profile)
        .with_options(options)
        .plot()?;

    println!("rendered {} candles to btc_1y.png", candles.len());
    Ok(())
}
