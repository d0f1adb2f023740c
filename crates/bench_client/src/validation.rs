//! Input validation for the two user-supplied integers.
//!
//! Integers are read with the same leniency a browser's `parseInt(value, 10)`
//! applies: leading whitespace is skipped, an optional sign is accepted, and
//! the longest run of ASCII digits is taken; anything after it is ignored.
//! Text without a leading digit run is not a number.

use crate::error::ValidationError;
use crate::model::BenchmarkRequest;

/// Validate raw N and X into a [`BenchmarkRequest`].
///
/// # Errors
///
/// - [`ValidationError::InvalidN`] when N is not a number or is not positive
/// - [`ValidationError::InvalidX`] when X is not a number
/// - [`ValidationError::XOutOfRange`] when X is negative or exceeds N
///
/// # Examples
/// ```
/// use bench_client::validation::validate;
///
/// let request = validate("10", "5").unwrap();
/// assert_eq!((request.n, request.x), (10, 5));
/// assert!(validate("10", "15").is_err());
/// ```
pub fn validate(raw_n: &str, raw_x: &str) -> Result<BenchmarkRequest, ValidationError> {
    let n = match parse_leading_int(raw_n) {
        Some(n) if n > 0 => n,
        _ => {
            return Err(ValidationError::InvalidN {
                raw: raw_n.to_string(),
            })
        }
    };

    let x = parse_leading_int(raw_x).ok_or_else(|| ValidationError::InvalidX {
        raw: raw_x.to_string(),
    })?;

    BenchmarkRequest::new(n, x)
}

/// Parse the leading base-10 integer of `raw`, if any.
///
/// Values that overflow `i64` are treated as not a number.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
