use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DigitSpecError {
    #[error("Empty digits specification")]
    Empty,

    #[error("Invalid scientific notation: \"{0}\"")]
    InvalidScientific(String),

    #[error("Negative exponent not supported in \"{0}\"")]
    NegativeExponent(String),

    #[error("Invalid number in \"{0}\"")]
    InvalidNumber(String),

    #[error("Missing number before suffix in \"{0}\"")]
    MissingNumber(String),

    #[error("Digits must be positive: \"{0}\"")]
    NotPositive(String),

    #[error("Digits value overflow for \"{0}\"")]
    Overflow(String),

    #[error("Too many digits ({value}), max supported is {max}")]
    TooManyDigits { value: u64, max: u64 },
}
