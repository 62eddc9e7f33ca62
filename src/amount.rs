//! Dollar amount type with 2 decimal places of precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so amounts convert
//! to the wire format's integer cents without floating-point errors.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A dollar amount that maintains exactly 2 decimal places.
///
/// Construction rounds half-away-from-zero at the cent, so
/// [`Amount::to_cents`] agrees with rounding `dollars * 100`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use ach_file_builder::Amount;
///
/// let amount = Amount::from_str("100").unwrap();
/// assert_eq!(amount.to_string(), "100.00");
/// assert_eq!(amount.to_cents(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, rounding to whole cents.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Creates an `Amount` from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Amount(Decimal::new(cents, Self::SCALE))
    }

    /// The amount as a whole number of cents.
    ///
    /// Exact for every value this type can hold; values too large for an
    /// `i64` collapse to zero rather than panicking.
    pub fn to_cents(&self) -> i64 {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .unwrap_or(0)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

/// Batch files carry amounts either as JSON numbers (`100.00`) or as strings
/// (`"100.00"`); both deserialize to the same `Amount`.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a dollar amount as a number or string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Amount, E> {
                Amount::from_str(v).map_err(de::Error::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Amount, E> {
                Decimal::try_from(v)
                    .map(Amount::new)
                    .map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Amount, E> {
                Ok(Amount::new(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Amount, E> {
                Ok(Amount::new(Decimal::from(v)))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let a = Amount::from_str("1").unwrap();
        assert_eq!(a.to_string(), "1.00");

        let a = Amount::from_str("1.5").unwrap();
        assert_eq!(a.to_string(), "1.50");

        let a = Amount::from_str("  2.25  ").unwrap();
        assert_eq!(a.to_string(), "2.25");
    }

    #[test]
    fn test_from_str_rounds_half_away_from_zero() {
        let a = Amount::from_str("10.005").unwrap();
        assert_eq!(a.to_string(), "10.01");

        let a = Amount::from_str("10.004").unwrap();
        assert_eq!(a.to_string(), "10.00");
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(Amount::from_str("100.00").unwrap().to_cents(), 10_000);
        assert_eq!(Amount::from_str("0.01").unwrap().to_cents(), 1);
        assert_eq!(
            Amount::from_str("99999999.99").unwrap().to_cents(),
            9_999_999_999
        );
        assert_eq!(Amount::from_str("-5").unwrap().to_cents(), -500);
    }

    #[test]
    fn test_from_cents_round_trip() {
        let a = Amount::from_cents(123_456);
        assert_eq!(a.to_string(), "1234.56");
        assert_eq!(a.to_cents(), 123_456);
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Amount::from_str("1.50").unwrap();
        let b = Amount::from_str("2.50").unwrap();

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((b - a).to_string(), "1.00");

        let mut running = Amount::ZERO;
        running += a;
        running += b;
        assert_eq!(running.to_string(), "4.00");

        running -= a;
        assert_eq!(running, b);
        assert_eq!(running.to_string(), "2.50");
    }

    #[test]
    fn test_zero_constant() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::ZERO.to_cents(), 0);
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_number: Amount = serde_json::from_str("100.00").unwrap();
        let from_integer: Amount = serde_json::from_str("100").unwrap();
        let from_string: Amount = serde_json::from_str("\"100.00\"").unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(from_integer, from_string);
    }

    #[test]
    fn test_serialize_as_string() {
        let a = Amount::from_str("42.5").unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"42.50\"");
    }
}
