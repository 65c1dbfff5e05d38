use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::assembler::PiDigits;

/// Machine-readable summary of one computation
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub digits: u64,
    pub terms: u64,
    pub margin_digits: u64,
    pub elapsed_secs: f64,
    /// SHA-256 of the result string, lowercase hex
    pub sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Report {
    /// Build a report for a finished computation
    ///
    /// `include_value` controls whether the digit string itself is embedded.
    pub fn new(pi: &PiDigits, elapsed: Duration, include_value: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("chudnovsky v{}", env!("CARGO_PKG_VERSION")),
            digits: pi.digits,
            terms: pi.terms,
            margin_digits: pi.margin_digits,
            elapsed_secs: elapsed.as_secs_f64(),
            sha256: digest(&pi.text),
            value: include_value.then(|| pi.text.clone()),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// SHA-256 of a digit string
pub fn digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::Calculator;

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest("3.1"),
            "35efc6ded4e13f29a8d86e4f33294be0f59fcaaf3a56b538f9e34e60e3ae4f44"
        );
    }

    #[test]
    fn test_report_fields() {
        let pi = Calculator::new().compute(10).unwrap();
        let report = Report::new(&pi, Duration::from_millis(1500), true);

        assert_eq!(report.digits, 10);
        assert_eq!(report.terms, 1);
        assert_eq!(report.margin_digits, 10);
        assert_eq!(report.elapsed_secs, 1.5);
        assert_eq!(
            report.sha256,
            "330548c742a7c77a612f6d5c2ba2b2917c1533c0cb71a163feef53efe3cbee09"
        );
        assert_eq!(report.value.as_deref(), Some("3.1415926535"));
        assert!(report.generator.starts_with("chudnovsky v"));
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_report_json_omits_value() {
        let pi = Calculator::new().compute(5).unwrap();
        let report = Report::new(&pi, Duration::ZERO, false);
        let json = report.to_json().unwrap();

        assert!(!json.contains("\"value\""));

        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.digits, 5);
        assert_eq!(parsed.sha256, report.sha256);
        assert!(parsed.value.is_none());
    }
}
