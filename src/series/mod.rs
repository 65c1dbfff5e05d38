mod splitter;


pub use splitter::{Split, binary_split};

/// `13591409`, the constant term of every Chudnovsky summand
pub const SERIES_A: u64 = 13_591_409;

/// `545140134`, the linear coefficient of every Chudnovsky summand
pub const SERIES_B: u64 = 545_140_134;

/// `640320^3 / 24`
pub const C3_OVER_24: u64 = 10_939_058_860_032_000;
