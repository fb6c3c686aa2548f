//! [`AmountValue`] represents a monetary amount in the MartianPay API.
//!
//! This module holds its type definition and implementations.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Represents a monetary amount in the MartianPay API.
///
/// Amounts travel as JSON strings and are kept as the exact decimal text they were
/// built from, so `"1.50"` stays `"1.50"` and an 18-decimal token amount never passes
/// through binary floating point. Equality is textual: `"1.5"` and `"1.50"` are
/// different values. Use [`AmountValue::to_decimal`] for numeric comparisons.
///
/// ```
/// use martianpay_core::types::AmountValue;
///
/// let amount: AmountValue = "1500000000.123456789012345678".parse().unwrap();
/// assert_eq!(amount.scale(), 18);
///
/// let json = serde_json::to_value(&amount).unwrap();
/// assert_eq!(json, serde_json::json!("1500000000.123456789012345678"));
///
/// let back: AmountValue = serde_json::from_value(json).unwrap();
/// assert_eq!(back, amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountValue(String);

/// Most decimal places supported by smallest-unit conversions. `10^38` is the largest power
/// of ten an `i128` holds.
pub const MAX_DECIMALS: u32 = 38;

fn check_decimals(decimals: u32) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(Error::DecimalsOutOfRange(decimals));
    }
    Ok(())
}

fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.is_none_or(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

impl AmountValue {
    /// The amount `0`.
    pub fn zero() -> Self {
        AmountValue("0".to_string())
    }

    /// The exact decimal text of this amount.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn unsigned(&self) -> &str {
        self.0.strip_prefix('-').unwrap_or(&self.0)
    }

    fn fraction(&self) -> &str {
        self.unsigned().split_once('.').map(|(_, f)| f).unwrap_or("")
    }

    /// Number of digits after the decimal point, as written.
    pub fn scale(&self) -> u32 {
        self.fraction().len() as u32
    }

    pub fn is_zero(&self) -> bool {
        self.unsigned().bytes().all(|b| b == b'0' || b == b'.')
    }

    /// `-0` and `-0.00` are not negative.
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-') && !self.is_zero()
    }

    /// Converts to a [`Decimal`] for arithmetic.
    ///
    /// Fails instead of rounding when the value needs more than 28 significant digits.
    pub fn to_decimal(&self) -> Result<Decimal> {
        Ok(Decimal::from_str_exact(&self.0)?)
    }

    /// Converts to an integer count of the asset's smallest units.
    ///
    /// ```
    /// use martianpay_core::types::AmountValue;
    ///
    /// let usdc: AmountValue = "12.5".parse().unwrap();
    /// assert_eq!(usdc.to_minor_units(6).unwrap(), 12_500_000);
    /// assert!(usdc.to_minor_units(0).is_err());
    /// ```
    pub fn to_minor_units(&self, decimals: u32) -> Result<i128> {
        check_decimals(decimals)?;
        let (int_part, frac_part) = match self.unsigned().split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (self.unsigned(), ""),
        };
        if frac_part.len() as u32 > decimals {
            return Err(Error::AmountPrecision {
                value: self.0.clone(),
                decimals,
            });
        }

        let overflow = || Error::AmountOverflow(self.0.clone());
        let factor = 10i128.checked_pow(decimals).ok_or_else(overflow)?;
        let whole = int_part.parse::<i128>().map_err(|_| overflow())?;
        let padded = format!("{:0<width$}", frac_part, width = decimals as usize);
        let fraction = if padded.is_empty() {
            0
        } else {
            padded.parse::<i128>().map_err(|_| overflow())?
        };

        let units = whole
            .checked_mul(factor)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;
        Ok(if self.is_negative() { -units } else { units })
    }

    /// Builds an amount from a count of smallest units, keeping every decimal place.
    ///
    /// ```
    /// use martianpay_core::types::AmountValue;
    ///
    /// assert_eq!(AmountValue::from_minor_units(150, 2).unwrap().as_str(), "1.50");
    /// assert_eq!(AmountValue::from_minor_units(-5, 3).unwrap().as_str(), "-0.005");
    /// assert_eq!(AmountValue::from_minor_units(42, 0).unwrap().as_str(), "42");
    /// assert!(AmountValue::from_minor_units(1, 4_000_000_000).is_err());
    /// ```
    pub fn from_minor_units(units: i128, decimals: u32) -> Result<Self> {
        check_decimals(decimals)?;
        let digits = units.unsigned_abs().to_string();
        let sign = if units < 0 { "-" } else { "" };
        if decimals == 0 {
            return Ok(AmountValue(format!("{sign}{digits}")));
        }

        let width = decimals as usize + 1;
        let padded = format!("{:0>width$}", digits, width = width);
        let (int_part, frac_part) = padded.split_at(padded.len() - decimals as usize);
        Ok(AmountValue(format!("{sign}{int_part}.{frac_part}")))
    }
}

impl FromStr for AmountValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if is_decimal_literal(s) {
            Ok(AmountValue(s.to_string()))
        } else {
            Err(Error::InvalidAmount(s.to_string()))
        }
    }
}

impl TryFrom<&str> for AmountValue {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for AmountValue {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_decimal_literal(&value) {
            Ok(AmountValue(value))
        } else {
            Err(Error::InvalidAmount(value))
        }
    }
}

impl From<u64> for AmountValue {
    fn from(value: u64) -> Self {
        AmountValue(value.to_string())
    }
}

impl From<u128> for AmountValue {
    fn from(value: u128) -> Self {
        AmountValue(value.to_string())
    }
}

impl From<i64> for AmountValue {
    fn from(value: i64) -> Self {
        AmountValue(value.to_string())
    }
}

impl From<Decimal> for AmountValue {
    fn from(value: Decimal) -> Self {
        AmountValue(value.to_string())
    }
}

impl Display for AmountValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AmountValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AmountValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AmountValue::try_from(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_eighteen_decimals_exactly() {
        let raw = "1500000000.123456789012345678";
        let amount: AmountValue = serde_json::from_value(json!(raw)).unwrap();

        assert_eq!(amount.as_str(), raw);
        assert_eq!(serde_json::to_value(&amount).unwrap(), json!(raw));
        assert_eq!(amount.to_decimal().unwrap().to_string(), raw);
        assert_eq!(AmountValue::from(amount.to_decimal().unwrap()), amount);
    }

    #[test]
    fn keeps_trailing_zeros() {
        let amount: AmountValue = "10.00".parse().unwrap();
        assert_eq!(amount.to_string(), "10.00");
        assert_eq!(amount.scale(), 2);
        assert_ne!(amount, "10".parse().unwrap());
    }

    #[test]
    fn rejects_non_decimal_text() {
        for bad in ["", "-", "1.", ".5", "1e6", "1,000", " 1", "NaN", "0x10", "+1"] {
            assert!(bad.parse::<AmountValue>().is_err(), "accepted {bad:?}");
        }
        assert!(serde_json::from_value::<AmountValue>(json!(12.5)).is_err());
        assert!(serde_json::from_value::<AmountValue>(json!("abc")).is_err());
    }

    #[test]
    fn sign_and_zero() {
        let neg: AmountValue = "-0.01".parse().unwrap();
        assert!(neg.is_negative());
        assert!(!neg.is_zero());

        let neg_zero: AmountValue = "-0.000".parse().unwrap();
        assert!(neg_zero.is_zero());
        assert!(!neg_zero.is_negative());
        assert!(AmountValue::zero().is_zero());
    }

    #[test]
    fn minor_unit_conversions() {
        let eth: AmountValue = "0.000000000000000001".parse().unwrap();
        assert_eq!(eth.to_minor_units(18).unwrap(), 1);

        let usd: AmountValue = "19.990".parse().unwrap();
        assert_eq!(usd.to_minor_units(2).unwrap(), 1999);

        let neg: AmountValue = "-3.5".parse().unwrap();
        assert_eq!(neg.to_minor_units(2).unwrap(), -350);

        let too_precise: AmountValue = "1.001".parse().unwrap();
        assert!(matches!(
            too_precise.to_minor_units(2),
            Err(Error::AmountPrecision { decimals: 2, .. })
        ));

        let huge: AmountValue = "9".repeat(40).parse().unwrap();
        assert!(matches!(huge.to_minor_units(18), Err(Error::AmountOverflow(_))));

        assert_eq!(
            AmountValue::from_minor_units(1, 18).unwrap().as_str(),
            "0.000000000000000001"
        );
        assert_eq!(AmountValue::from_minor_units(0, 2).unwrap().as_str(), "0.00");
    }

    #[test]
    fn decimals_beyond_i128_range_are_rejected() {
        assert!(matches!(
            AmountValue::from_minor_units(1, 4_000_000_000),
            Err(Error::DecimalsOutOfRange(4_000_000_000))
        ));
        assert!(matches!(
            AmountValue::from_minor_units(1, MAX_DECIMALS + 1),
            Err(Error::DecimalsOutOfRange(_))
        ));
        assert_eq!(
            AmountValue::from_minor_units(1, MAX_DECIMALS).unwrap().scale(),
            MAX_DECIMALS
        );

        let one = AmountValue::from(1u64);
        assert!(matches!(
            one.to_minor_units(u32::MAX),
            Err(Error::DecimalsOutOfRange(_))
        ));
    }

    #[test]
    fn decimal_overflow_is_an_error_not_a_rounding() {
        let amount: AmountValue = "123456789012345678901234567890.5".parse().unwrap();
        assert!(matches!(amount.to_decimal(), Err(Error::Decimal(_))));
    }
}
