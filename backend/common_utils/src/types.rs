//! Types that can be used in other crates

use std::{fmt::Display, str::FromStr};

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use serde::{Deserialize, Serialize};

use crate::errors::ParsingError;

/// Number of minor units in one major unit for the currencies the storefront sells in
const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// This Unit struct represents MinorUnit in which core amount works
#[derive(
    Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct MinorUnit(pub i64);

impl MinorUnit {
    /// forms a new minor default unit i.e zero
    pub fn zero() -> Self {
        Self(0)
    }

    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Converts a major unit amount (as kept by the storefront basket) into minor units,
    /// rounding half away from zero to the nearest minor unit
    pub fn from_major_unit_as_f64(
        amount: f64,
    ) -> Result<Self, error_stack::Report<ParsingError>> {
        let amount_decimal = Decimal::from_f64(amount)
            .ok_or(ParsingError::StructParseFailure("major unit amount"))?;
        let minor = (amount_decimal * Decimal::from(MINOR_UNITS_PER_MAJOR))
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        let minor = minor
            .to_i64()
            .ok_or(ParsingError::DecimalToI64ConversionFailure)?;
        Ok(Self(minor))
    }

    /// Parses a minor unit amount submitted as text, e.g. a form field
    pub fn from_minor_unit_str(value: &str) -> Result<Self, error_stack::Report<ParsingError>> {
        StringMinorUnit::new(value.trim().to_string()).to_minor_unit_as_i64()
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minor unit amount as submitted in text form
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    /// forms a new minor unit in string from amount
    fn new(value: String) -> Self {
        Self(value)
    }

    /// converts to minor unit i64 from minor unit string value
    pub fn to_minor_unit_as_i64(&self) -> Result<MinorUnit, error_stack::Report<ParsingError>> {
        let amount_string = &self.0;
        let amount_decimal = Decimal::from_str(amount_string).map_err(|e| {
            ParsingError::StringToDecimalConversionFailure {
                error: e.to_string(),
            }
        })?;
        if !amount_decimal.fract().is_zero() {
            return Err(ParsingError::StringToDecimalConversionFailure {
                error: format!("{amount_string} is not a whole number of minor units"),
            }
            .into());
        }
        let amount_i64 = amount_decimal
            .to_i64()
            .ok_or(ParsingError::DecimalToI64ConversionFailure)?;
        Ok(MinorUnit::new(amount_i64))
    }
}
