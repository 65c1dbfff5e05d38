/// A computed expansion of pi and the parameters that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiDigits {
    /// `"3.<digits>"`, truncated to the requested number of decimals
    pub text: String,
    /// Number of decimal places after the point
    pub digits: u64,
    /// Series terms evaluated
    pub terms: u64,
    /// Extra decimal digits carried through the square root
    pub margin_digits: u64,
}

impl PiDigits {
    /// Digits after the decimal point
    pub fn fraction(&self) -> &str {
        &self.text[2..]
    }

    /// Leading integer digit
    pub fn integer_part(&self) -> &str {
        &self.text[..1]
    }
}
