use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PiError {
    #[error("Digit count must be positive, got {0}")]
    InvalidDigitCount(i64),

    #[error("Precision for {digits} digits with margin {margin} is out of range")]
    PrecisionOverflow { digits: u64, margin: u64 },

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}
