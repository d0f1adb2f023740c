//! Wire schemas exchanged with the benchmark server.
//!
//! The request is `{ "n": <int>, "x": <int> }`; the result is a camelCase
//! object decoded strictly: a body missing any required field is rejected as
//! a [`TransportError::Decode`] rather than partially trusted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TransportError, ValidationError};

// =============================================================================
// Request
// =============================================================================

/// One benchmark request.
///
/// Invariant: `n > 0` and `x <= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    /// Number of candidate values the server generates
    pub n: u64,
    /// Number of palindromes planted (and sampled) among them
    pub x: u64,
}

impl BenchmarkRequest {
    /// Create a request, enforcing `n > 0` and `0 <= x <= n`.
    pub fn new(n: i64, x: i64) -> Result<Self, ValidationError> {
        if n <= 0 {
            return Err(ValidationError::InvalidN { raw: n.to_string() });
        }
        if x < 0 || x > n {
            return Err(ValidationError::XOutOfRange { x, n });
        }
        Ok(Self {
            n: n as u64,
            x: x as u64,
        })
    }
}

// =============================================================================
// Result
// =============================================================================

/// A display-ready scalar, rendered verbatim.
///
/// The server decides the representation: timings arrive as preformatted
/// strings (`"1.23 ms"`), axis labels as plain integers. Numbers print the
/// way a browser prints them, so `2.0` shows as `2`, `1e21` as `1e+21` and
/// `1e-7` as `1e-7`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayScalar {
    /// Numeric value
    Number(f64),
    /// Preformatted text
    Text(String),
}

impl fmt::Display for DisplayScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayScalar::Number(value) => write_number(f, *value),
            DisplayScalar::Text(text) => f.write_str(text),
        }
    }
}

/// Plain decimal inside `[1e-6, 1e21)`, exponent form outside it.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        return f.write_str("0");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) && !magnitude.is_nan() {
        let exponent = format!("{:e}", value);
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exponent),
        };
    }
    write!(f, "{}", value)
}

impl From<&str> for DisplayScalar {
    fn from(text: &str) -> Self {
        DisplayScalar::Text(text.to_string())
    }
}

impl From<f64> for DisplayScalar {
    fn from(value: f64) -> Self {
        DisplayScalar::Number(value)
    }
}

/// Benchmark result as returned by the server.
///
/// The three graph sequences are expected to be index-aligned, but this is
/// not enforced: ragged data still decodes and is handed to the chart as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Iterative search time, display-ready
    pub iterative_time: DisplayScalar,
    /// Recursive search time, display-ready
    pub recursive_time: DisplayScalar,
    /// Iterative search time in milliseconds, when the server sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterative_raw: Option<f64>,
    /// Recursive search time in milliseconds, when the server sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive_raw: Option<f64>,
    /// X-axis category labels
    pub graph_labels: Vec<DisplayScalar>,
    /// Iterative timing series
    pub graph_iterative: Vec<f64>,
    /// Recursive timing series
    pub graph_recursive: Vec<f64>,
    /// Palindromes found, in server order
    #[serde(default)]
    pub samples: Option<Vec<String>>,
}

impl BenchmarkResult {
    /// Decode a response body, failing closed on any shape mismatch.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Whether labels and both series have the same length.
    pub fn is_aligned(&self) -> bool {
        self.graph_labels.len() == self.graph_iterative.len()
            && self.graph_labels.len() == self.graph_recursive.len()
    }

    /// Samples as a slice, `None` when the server sent none.
    pub fn samples(&self) -> Option<&[String]> {
        self.samples.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> &'static str {
        r#"{
            "iterativeTime": "0.42 ms",
            "recursiveTime": "0.97 ms",
            "iterativeRaw": 0.42,
            "recursiveRaw": 0.97,
            "graphLabels": [200, 400, 600, 800, 1000],
            "graphIterative": [0.1, 0.2, 0.25, 0.33, 0.42],
            "graphRecursive": [0.2, 0.4, 0.6, 0.8, 0.97],
            "samples": ["A 121 A", "K 909 K"]
        }"#
    }

    #[test]
    fn test_request_new_valid() {
        let request = BenchmarkRequest::new(10, 5).unwrap();
        assert_eq!(request, BenchmarkRequest { n: 10, x: 5 });
    }

    #[test]
    fn test_request_new_rejects_bad_bounds() {
        assert!(BenchmarkRequest::new(0, 0).is_err());
        assert!(BenchmarkRequest::new(-3, 0).is_err());
        assert!(BenchmarkRequest::new(10, 11).is_err());
        assert!(BenchmarkRequest::new(10, -1).is_err());
        assert!(BenchmarkRequest::new(10, 10).is_ok());
        assert!(BenchmarkRequest::new(1, 0).is_ok());
    }

    #[test]
    fn test_request_serialisation() {
        let request = BenchmarkRequest { n: 1000, x: 10 };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"n":1000,"x":10}"#);
    }

    #[test]
    fn test_result_decode() {
        let result = BenchmarkResult::from_json(sample_body()).unwrap();

        assert_eq!(result.iterative_time.to_string(), "0.42 ms");
        assert_eq!(result.recursive_time.to_string(), "0.97 ms");
        assert_eq!(result.iterative_raw, Some(0.42));
        assert_eq!(result.graph_labels.len(), 5);
        assert_eq!(result.graph_labels[0].to_string(), "200");
        assert_eq!(result.samples(), Some(&["A 121 A".to_string(), "K 909 K".to_string()][..]));
        assert!(result.is_aligned());
    }

    #[test]
    fn test_result_decode_null_samples() {
        let body = r#"{
            "iterativeTime": "1 ms",
            "recursiveTime": "2 ms",
            "graphLabels": [],
            "graphIterative": [],
            "graphRecursive": [],
            "samples": null
        }"#;
        let result = BenchmarkResult::from_json(body).unwrap();
        assert!(result.samples().is_none());
        assert!(result.iterative_raw.is_none());
    }

    #[test]
    fn test_result_decode_missing_samples() {
        let body = r#"{
            "iterativeTime": 3,
            "recursiveTime": 4.5,
            "graphLabels": ["a"],
            "graphIterative": [1.0],
            "graphRecursive": [2.0]
        }"#;
        let result = BenchmarkResult::from_json(body).unwrap();
        assert!(result.samples().is_none());
        assert_eq!(result.iterative_time.to_string(), "3");
        assert_eq!(result.recursive_time.to_string(), "4.5");
    }

    #[test]
    fn test_result_decode_fails_closed() {
        let err = BenchmarkResult::from_json(r#"{"iterativeTime": "1 ms"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));

        let err = BenchmarkResult::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));

        let body = r#"{
            "iterativeTime": "1 ms",
            "recursiveTime": "2 ms",
            "graphLabels": [1],
            "graphIterative": ["fast"],
            "graphRecursive": [2.0]
        }"#;
        assert!(BenchmarkResult::from_json(body).is_err());
    }

    #[test]
    fn test_result_ragged_series_still_decodes() {
        let body = r#"{
            "iterativeTime": "1 ms",
            "recursiveTime": "2 ms",
            "graphLabels": [1, 2, 3],
            "graphIterative": [0.1],
            "graphRecursive": [0.2, 0.3]
        }"#;
        let result = BenchmarkResult::from_json(body).unwrap();
        assert!(!result.is_aligned());
    }

    #[test]
    fn test_display_scalar_formatting() {
        assert_eq!(DisplayScalar::from(2.0).to_string(), "2");
        assert_eq!(DisplayScalar::from(0.25).to_string(), "0.25");
        assert_eq!(DisplayScalar::from("12.00 ms").to_string(), "12.00 ms");
    }

    #[test]
    fn test_display_scalar_exponent_ranges() {
        assert_eq!(DisplayScalar::from(1e21).to_string(), "1e+21");
        assert_eq!(DisplayScalar::from(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(DisplayScalar::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(DisplayScalar::from(1e-7).to_string(), "1e-7");
        assert_eq!(DisplayScalar::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(DisplayScalar::from(1e-6).to_string(), "0.000001");
        assert_eq!(DisplayScalar::from(-0.0).to_string(), "0");
        assert_eq!(DisplayScalar::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(DisplayScalar::from(f64::NAN).to_string(), "NaN");
    }
}
