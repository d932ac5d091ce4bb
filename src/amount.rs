/// Base units per coin.
pub const BASE_UNITS_PER_COIN: i64 = 100_000_000;

/// Rounds to the nearest base unit, so JSON floats like `0.1` land on exact integers.
pub fn coins_to_base_units(amount: f64) -> i64 {
    (amount * BASE_UNITS_PER_COIN as f64).round() as i64
}

pub fn base_units_to_coins(amount: i64) -> f64 {
    amount as f64 / BASE_UNITS_PER_COIN as f64
}
