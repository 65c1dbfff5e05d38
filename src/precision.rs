use num_bigint::BigUint;

/// Whole decimal digits contributed by one series term (the true yield is ~14.18)
pub const DIGITS_PER_TERM: u64 = 14;

/// Extra decimal digits carried through the square root
pub const DEFAULT_MARGIN_DIGITS: u64 = 10;

/// Smallest margin a calculator will accept
pub const MIN_MARGIN_DIGITS: u64 = 10;

/// Largest margin a calculator will accept
pub const MAX_MARGIN_DIGITS: u64 = 10_000;

/// Radicand of the irrational factor `sqrt(10005)`
pub const SQRT_RADICAND: u32 = 10_005;

/// `426880`, the rational factor in front of `sqrt(10005)`
pub const PI_FACTOR: u32 = 426_880;

/// Number of series terms needed for `digits` decimal places
pub fn term_count(digits: u64) -> u64 {
    digits / DIGITS_PER_TERM + 1
}

/// `10^exp` as a big integer
pub fn pow10(exp: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp as usize)
}

/// `floor(sqrt(radicand) * 10^precision)`, exact
///
/// Computed as the integer square root of `radicand * 10^(2 * precision)`,
/// so the result never exceeds the true value.
pub fn scaled_sqrt(radicand: u32, precision: u64) -> BigUint {
    let scaled = BigUint::from(radicand) * pow10(2 * precision);
    scaled.sqrt()
}
