// Public API exports
pub mod assembler;
pub mod cli;
pub mod digit_spec;
pub mod precision;
pub mod report;
pub mod series;

// Re-export main types for convenience
pub use series::{Split, binary_split};

pub use precision::{
    DEFAULT_MARGIN_DIGITS, DIGITS_PER_TERM, MAX_MARGIN_DIGITS, MIN_MARGIN_DIGITS, scaled_sqrt,
    term_count,
};

pub use assembler::{Calculator, CalculatorBuilder, PiDigits, PiError, compute_pi_digits};

pub use digit_spec::{DEFAULT_DIGITS, DigitSpec, DigitSpecError, MAX_DIGITS};

pub use cli::{Cli, retain_known_args, usage_examples};

pub use report::Report;
