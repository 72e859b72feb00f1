use smd_rs::liquidity;
use smd_rs::prelude::*;

fn main() -> Result<()> {
    let current_price = 2_450.50;
    let profile = liquidity::profile(current_price)?;

    println!("liquidity profile around {current_price}");
    for bucket in profile.iter().step_by(10) {
        let bar = "#".repeat((bucket.height / 2.0) as usize);
        println!(
            "{:>3}  x{:<4.1}  {:>10.2}  {:>6.2}  {bar}",
            bucket.id, bucket.price_multiplier, bucket.price, bucket.liquidity
        );
    }

    // The same price always yields the same bars.
    assert_eq!(profile, liquidity::profile(current_price)?);

    // What a widget renders while its price feed is still loading.
    let waiting = liquidity::placeholder();
    println!("placeholder: {} flat buckets", waiting.len());

    Ok(())
}
