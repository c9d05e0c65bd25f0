//! Exact monetary values parsed from the decimal strings receipts are submitted with.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Monetary field as submitted together with its exact fixed-point value.
///
/// The raw string is kept so stored receipts echo back exactly what the caller sent;
/// the decimal is what the scoring rules compute with. A `Money` only exists once
/// parsing succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    raw: String,
    value: Decimal,
}

impl Money {
    /// Parse a non-negative decimal string such as `"35.35"`, `"12"` or `"0.5"`.
    ///
    /// Signs, exponents, surrounding whitespace, thousands separators and empty
    /// fractions (`"12."`) are all rejected.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, MonetaryError> {
        let invalid = || MonetaryError {
            field,
            value: raw.to_string(),
        };

        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (raw, None),
        };

        if !is_digits(whole) || fraction.is_some_and(|digits| !is_digits(digits)) {
            return Err(invalid());
        }

        let value = Decimal::from_str(raw).map_err(|_| invalid())?;

        Ok(Self {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// A `total` or `price` that is not a valid non-negative decimal string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: '{value}' is not a valid monetary value")]
pub struct MonetaryError {
    pub field: &'static str,
    pub value: String,
}
