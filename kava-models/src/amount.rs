// Copyright (c) 2022 Kava Plugin Contributors

use crate::{ModelsError, ModelsResult};
use rust_decimal::prelude::*;
use serde::de::Unexpected;
use std::fmt;
use std::str::FromStr;

/// A non-negative decimal amount of tokens.
///
/// The decimal text given by the chain is kept exactly, scale included,
/// so that an amount read as `"1000"` or `"0.00118"` is written back the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Builds an amount from a decimal, rejecting negative values
    pub fn from_decimal(value: Decimal) -> ModelsResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ModelsError::AmountParseError(
                "amounts cannot be strictly negative".to_string(),
            ));
        }
        Ok(Amount(value))
    }

    /// safely add self to another amount, returning None on overflow
    /// ```
    /// # use kava_models::Amount;
    /// # use std::str::FromStr;
    /// let amount_1 : Amount = Amount::from_str("42").unwrap();
    /// let amount_2 : Amount = Amount::from_str("0.7").unwrap();
    /// let res : Amount = amount_1.checked_add(amount_2).unwrap();
    /// assert_eq!(res.to_string(), "42.7")
    /// ```
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Amount)
    }

    /// Rescale an amount expressed in the smallest unit of a token into the token unit,
    /// dropping trailing fractional zeros.
    ///
    /// ```
    /// # use kava_models::Amount;
    /// # use std::str::FromStr;
    /// let fee = Amount::from_str("2500").unwrap();
    /// assert_eq!(fee.from_smallest_unit(6).unwrap().to_string(), "0.0025");
    /// let fee = Amount::from_str("1000000").unwrap();
    /// assert_eq!(fee.from_smallest_unit(6).unwrap().to_string(), "1");
    /// ```
    pub fn from_smallest_unit(self, exponent: u32) -> ModelsResult<Self> {
        let factor = 10u64.checked_pow(exponent).ok_or_else(|| {
            ModelsError::AmountParseError(format!("decimal exponent {} is too large", exponent))
        })?;
        let res = self
            .0
            .checked_div(Decimal::from(factor))
            .ok_or_else(|| ModelsError::AmountParseError("amount rescale overflow".to_string()))?;
        Ok(Amount(res.normalize()))
    }

    /// Multiply by a rate and round half-up to `decimal_places`, dropping trailing fractional zeros.
    ///
    /// ```
    /// # use kava_models::Amount;
    /// # use rust_decimal::Decimal;
    /// # use std::str::FromStr;
    /// let input = Amount::from_str("13987.92220598").unwrap();
    /// let rate = Decimal::from_str("0.0015").unwrap();
    /// assert_eq!(input.checked_mul_rate(rate, 8).unwrap().to_string(), "20.98188331");
    /// ```
    pub fn checked_mul_rate(self, rate: Decimal, decimal_places: u32) -> Option<Self> {
        let res = self.0.checked_mul(rate)?.round_dp_with_strategy(
            decimal_places,
            RoundingStrategy::MidpointAwayFromZero,
        );
        Some(Amount(res.normalize()))
    }
}

/// display an Amount in decimal string form, keeping the scale it was built with
///
/// ```
/// # use kava_models::Amount;
/// # use std::str::FromStr;
/// let value = Amount::from_str("11.110").unwrap();
/// assert_eq!(format!("{}", value), "11.110")
/// ```
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// build an Amount from decimal string form (like "10.33")
///
/// ```
/// # use kava_models::Amount;
/// # use std::str::FromStr;
/// assert!(Amount::from_str("11.1").is_ok());
/// assert!(Amount::from_str("19155352120").is_ok());
/// assert!(Amount::from_str("-11.1").is_err());
/// assert!(Amount::from_str("abc").is_err());
/// ```
impl FromStr for Amount {
    type Err = ModelsError;

    fn from_str(str_amount: &str) -> Result<Self, Self::Err> {
        let res = Decimal::from_str(str_amount.trim())
            .map_err(|err| ModelsError::AmountParseError(err.to_string()))?;
        Amount::from_decimal(res)
    }
}

impl serde::Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> serde::de::Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn visit_str<E>(self, value: &str) -> Result<Amount, E>
    where
        E: serde::de::Error,
    {
        Amount::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Amount, E>
    where
        E: serde::de::Error,
    {
        Ok(Amount(Decimal::from(value)))
    }

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a non-negative decimal amount as a string, like \"10.33\""
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_amount_keeps_chain_text() {
        for text in [
            "0.00118",
            "1000",
            "10093.653846",
            "0.36428994",
            "19155352120",
        ] {
            assert_eq!(Amount::from_str(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_amount_rejects_negative() {
        assert_matches!(
            Amount::from_str("-0.1"),
            Err(ModelsError::AmountParseError(..))
        );
    }

    #[test]
    fn test_fee_rescale() {
        let cases = [
            ("5000", "0.005"),
            ("12345678", "12.345678"),
            ("10000000", "10"),
            ("1", "0.000001"),
        ];
        for (raw, expected) in cases {
            let rescaled = Amount::from_str(raw)
                .unwrap()
                .from_smallest_unit(6)
                .unwrap();
            assert_eq!(rescaled.to_string(), expected);
        }
    }

    #[test]
    fn test_json_roundtrip_as_string() {
        let amount = Amount::from_str("844.628983").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"844.628983\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "844.628983");
        let from_int: Amount = serde_json::from_str("2500").unwrap();
        assert_eq!(from_int.to_string(), "2500");
    }
}
