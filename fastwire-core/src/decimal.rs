/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/2/26
******************************************************************************/

//! Exact fixed-point decimal values as specified by the FAST standard.
//!
//! A decoded decimal is a signed 64-bit mantissa paired with a signed base-10
//! exponent. The pair is kept exactly as decoded: `(25, 21)` and `(250, 20)`
//! are distinct values even though they are numerically equal, and equality
//! compares the pair structurally. Conversion to `f64` is an explicit, lossy,
//! one-way operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact decimal value: `mantissa × 10^exponent`.
///
/// Never normalized; the mantissa and exponent are preserved exactly as
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Decimal {
    mantissa: i64,
    exponent: i32,
}

impl Decimal {
    /// Creates a decimal from a mantissa and a base-10 exponent.
    #[inline]
    #[must_use]
    pub const fn new(mantissa: i64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// Returns the mantissa exactly as constructed.
    #[inline]
    #[must_use]
    pub const fn mantissa(self) -> i64 {
        self.mantissa
    }

    /// Returns the exponent exactly as constructed.
    #[inline]
    #[must_use]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// Converts the value to an `f64` approximation.
    ///
    /// This is lossy and one-way: it must never be used for equality or for
    /// re-encoding. Scaling is done in 128-bit integer arithmetic when the
    /// scaled value fits, so the only rounding step is the final conversion.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        let m = i128::from(self.mantissa);
        if self.exponent >= 0 {
            if let Some(pow) = checked_pow10(self.exponent as u32)
                && let Some(scaled) = m.checked_mul(pow)
            {
                return scaled as f64;
            }
            self.mantissa as f64 * 10f64.powi(self.exponent)
        } else {
            match checked_pow10(self.exponent.unsigned_abs()) {
                Some(pow) => m as f64 / pow as f64,
                None => self.mantissa as f64 * 10f64.powi(self.exponent),
            }
        }
    }
}

/// 10^n as an i128, or `None` when it would overflow.
const fn checked_pow10(n: u32) -> Option<i128> {
    if n > 38 {
        return None;
    }
    let mut value: i128 = 1;
    let mut i = 0;
    while i < n {
        value *= 10;
        i += 1;
    }
    Some(value)
}

impl fmt::Display for Decimal {
    /// Renders the exact `www.fff` form without going through a float.
    ///
    /// A non-negative exponent appends zeros; a negative exponent places the
    /// decimal point, padding with leading zeros when the mantissa is short.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let sign = if self.mantissa < 0 { "-" } else { "" };
        if self.exponent >= 0 {
            let zeros = "0".repeat(self.exponent as usize);
            write!(f, "{}{}{}", sign, digits, zeros)
        } else {
            let places = self.exponent.unsigned_abs() as usize;
            if places < digits.len() {
                let (whole, frac) = digits.split_at(digits.len() - places);
                write!(f, "{}{}.{}", sign, whole, frac)
            } else {
                let pad = "0".repeat(places - digits.len());
                write!(f, "{}0.{}{}", sign, pad, digits)
            }
        }
    }
}

/// Error parsing a decimal from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal string: {text}")]
pub struct ParseDecimalError {
    /// The text that failed to parse.
    pub text: String,
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses a `www.fff` style string (no explicit exponent notation).
    ///
    /// The exponent is the negated fractional-digit count, so `"19.500"`
    /// parses as `(19500, -3)` with no normalization.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let text = s.trim();
        let err = || ParseDecimalError {
            text: s.to_string(),
        };
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        let mut mantissa_text = String::with_capacity(whole.len() + frac.len());
        mantissa_text.push_str(whole);
        mantissa_text.push_str(frac);
        let mantissa: i64 = mantissa_text.parse().map_err(|_| err())?;
        let exponent = -(frac.len() as i32);
        Ok(Self::new(mantissa, exponent))
    }
}
