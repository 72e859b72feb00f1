use smd_rs::market::SymbolProfile;
use smd_rs::prelude::*;
use smd_rs::series;

fn main() -> Result<()> {
    let mut rng = rand::rng();
    let profile = SymbolProfile::resolve("ETH");
    let mut last_price = profile.base_price();

    for _ in 0..20 {
        let tick = series::next_tick(last_price, profile.volatility(), &mut rng);
        let move_percent = tick.open().change(tick.close());
        println!(
            "{}  O {:>8.2}  H {:>8.2}  L {:>8.2}  C {:>8.2}  ({:+.2}%)",
            tick.timestamp(),
            tick.open(),
            tick.high(),
            tick.low(),
            tick.close(),
            move_percent
        );
        last_price = tick.close();
    }

    Ok(())
}
