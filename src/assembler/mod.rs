mod digits;
mod error;


pub use digits::PiDigits;
pub use error::PiError;

use crate::precision::{
    DEFAULT_MARGIN_DIGITS, MAX_MARGIN_DIGITS, MIN_MARGIN_DIGITS, PI_FACTOR, SQRT_RADICAND, pow10,
    scaled_sqrt, term_count,
};
use crate::series::{Split, binary_split};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use std::time::Instant;
use tracing::{debug, info};

/// Turns the root of the series split into a truncated decimal expansion
pub struct Calculator {
    margin_digits: u64,
}

/// Builder for configuring a calculator
pub struct CalculatorBuilder {
    margin_digits: u64,
}

impl CalculatorBuilder {
    /// Create a new builder with the default margin
    pub fn new() -> Self {
        Self {
            margin_digits: DEFAULT_MARGIN_DIGITS,
        }
    }

    /// Set the extra decimal digits carried through the square root
    ///
    /// Clamped to `MIN_MARGIN_DIGITS..=MAX_MARGIN_DIGITS`.
    pub fn margin_digits(mut self, margin: u64) -> Self {
        self.margin_digits = margin.clamp(MIN_MARGIN_DIGITS, MAX_MARGIN_DIGITS);
        self
    }

    /// Build the calculator
    pub fn build(self) -> Calculator {
        Calculator {
            margin_digits: self.margin_digits,
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator with default settings
    pub fn new() -> Self {
        CalculatorBuilder::new().build()
    }

    /// Extra decimal digits carried through the square root
    pub fn margin_digits(&self) -> u64 {
        self.margin_digits
    }

    /// Compute `floor(pi * 10^digits) / 10^digits` as `"3.<digits>"`
    pub fn compute(&self, digits: i64) -> Result<PiDigits, PiError> {
        if digits <= 0 {
            return Err(PiError::InvalidDigitCount(digits));
        }
        let digits = digits as u64;
        let start = Instant::now();

        // The square root works at 10^(2p)
        let precision = digits
            .checked_add(self.margin_digits)
            .filter(|p| p.checked_mul(2).is_some())
            .ok_or(PiError::PrecisionOverflow {
                digits,
                margin: self.margin_digits,
            })?;

        let terms = term_count(digits);
        debug!(digits, terms, "evaluating series");

        // P is only needed inside merges
        let Split { q, t, .. } = binary_split(0, terms);

        let sqrt = scaled_sqrt(SQRT_RADICAND, precision);
        debug!(
            precision,
            q_bits = q.bits(),
            t_bits = t.bits(),
            sqrt_bits = sqrt.bits(),
            "assembling digits"
        );

        // pi * 10^d ~= (Q * 426880 * S) / (T * 10^(p - d))
        let numerator = q * PI_FACTOR * BigInt::from(sqrt);
        let denominator = t * BigInt::from(pow10(self.margin_digits));

        let scaled = positive_floor_div(&numerator, &denominator)?;
        let text = render(&scaled.to_string(), digits as usize)?;

        info!(
            digits,
            terms,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "computed pi"
        );

        Ok(PiDigits {
            text,
            digits,
            terms,
            margin_digits: self.margin_digits,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute pi to `digits` decimal places with the default margin
pub fn compute_pi_digits(digits: i64) -> Result<String, PiError> {
    Calculator::new().compute(digits).map(|pi| pi.text)
}

/// `floor(numerator / denominator)` for a strictly positive ratio
///
/// Both sides are positive at the series root; anything else is a defect.
fn positive_floor_div(numerator: &BigInt, denominator: &BigInt) -> Result<BigInt, PiError> {
    if numerator.sign() != Sign::Plus || denominator.sign() != Sign::Plus {
        return Err(PiError::InvariantViolation(format!(
            "series root has non-positive ratio (numerator {:?}, denominator {:?})",
            numerator.sign(),
            denominator.sign()
        )));
    }

    Ok(numerator.div_floor(denominator))
}

/// Insert the decimal point into `floor(pi * 10^digits)`
fn render(scaled: &str, digits: usize) -> Result<String, PiError> {
    if scaled.len() > digits + 1 {
        return Err(PiError::InvariantViolation(format!(
            "scaled value has {} digits, expected at most {}",
            scaled.len(),
            digits + 1
        )));
    }

    let padded = format!("{:0>width$}", scaled, width = digits + 1);
    let (int_part, frac_part) = padded.split_at(1);
    Ok(format!("{}.{}", int_part, frac_part))
}
