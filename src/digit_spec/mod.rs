mod error;

#[cfg(test)]
mod tests;

pub use error::DigitSpecError;

/// Digit count used when no specification is given
pub const DEFAULT_DIGITS: u64 = 100_000;

/// Largest digit count accepted from a specification
pub const MAX_DIGITS: u64 = u32::MAX as u64;

/// Parser for human-readable digit counts
pub struct DigitSpec;

impl DigitSpec {
    /// Parse a digit specification such as `"123"`, `"1K"`, `"10m"` or `"3E7"`
    ///
    /// Suffixes (case-insensitive): `K` = 10^3, `M` = 10^6, `G` = 10^9,
    /// `T` = 10^12. Scientific notation is `<int>e<int>` with a
    /// non-negative exponent. The result is always in `1..=MAX_DIGITS`.
    pub fn parse(spec: &str) -> Result<u64, DigitSpecError> {
        let s = spec.trim();
        if s.is_empty() {
            return Err(DigitSpecError::Empty);
        }

        let value = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => Self::parse_scientific(spec, &s[..pos], &s[pos + 1..])?,
            None => Self::parse_suffixed(spec, s)?,
        };

        if value == 0 {
            return Err(DigitSpecError::NotPositive(spec.to_string()));
        }
        if value > MAX_DIGITS {
            return Err(DigitSpecError::TooManyDigits {
                value,
                max: MAX_DIGITS,
            });
        }

        Ok(value)
    }

    fn parse_scientific(
        spec: &str,
        mantissa: &str,
        exponent: &str,
    ) -> Result<u64, DigitSpecError> {
        if mantissa.is_empty() || exponent.is_empty() {
            return Err(DigitSpecError::InvalidScientific(spec.to_string()));
        }
        if exponent.starts_with('-') {
            return Err(DigitSpecError::NegativeExponent(spec.to_string()));
        }

        let mantissa = Self::parse_integer(spec, mantissa)?;
        let exponent: u32 = exponent
            .parse()
            .map_err(|_| DigitSpecError::InvalidScientific(spec.to_string()))?;

        if mantissa == 0 {
            return Err(DigitSpecError::NotPositive(spec.to_string()));
        }

        10u64
            .checked_pow(exponent)
            .and_then(|multiplier| mantissa.checked_mul(multiplier))
            .ok_or_else(|| DigitSpecError::Overflow(spec.to_string()))
    }

    fn parse_suffixed(spec: &str, s: &str) -> Result<u64, DigitSpecError> {
        let multiplier = match s.chars().last().map(|c| c.to_ascii_uppercase()) {
            Some('K') => 1_000,
            Some('M') => 1_000_000,
            Some('G') => 1_000_000_000,
            Some('T') => 1_000_000_000_000,
            _ => 1,
        };

        let number = if multiplier == 1 {
            s
        } else {
            let number = s[..s.len() - 1].trim();
            if number.is_empty() {
                return Err(DigitSpecError::MissingNumber(spec.to_string()));
            }
            number
        };

        Self::parse_integer(spec, number)?
            .checked_mul(multiplier)
            .ok_or_else(|| DigitSpecError::Overflow(spec.to_string()))
    }

    /// Parse a non-negative integer, reporting a well-formed negative one as
    /// `NotPositive` rather than malformed
    fn parse_integer(spec: &str, text: &str) -> Result<u64, DigitSpecError> {
        if let Ok(value) = text.parse::<u64>() {
            return Ok(value);
        }

        match text.strip_prefix('-') {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                Err(DigitSpecError::NotPositive(spec.to_string()))
            }
            _ => Err(DigitSpecError::InvalidNumber(spec.to_string())),
        }
    }
}
