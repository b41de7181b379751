use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fraction of a company offered with a job, in `[0, 1]`.
///
/// Stored as NUMERIC and carried as a fixed-point decimal end to end. On the
/// wire it is a JSON number; numeric strings such as `"0.25"` are also
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct Equity(Decimal);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    #[error("equity must be between 0 and 1, got {0}")]
    OutOfRange(Decimal),
    #[error("equity is not a decimal number: {0}")]
    Malformed(String),
}

impl Equity {
    pub fn new(value: Decimal) -> Result<Self, EquityError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(EquityError::OutOfRange(value));
        }
        Ok(Self(value.normalize()))
    }
}

impl TryFrom<Decimal> for Equity {
    type Error = EquityError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Equity::new(value)
    }
}

impl From<Equity> for Decimal {
    fn from(value: Equity) -> Self {
        value.0
    }
}

impl FromStr for Equity {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|_| EquityError::Malformed(trimmed.to_string()))?;
        Equity::new(value)
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Equity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Equity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;
        Equity::new(value).map_err(serde::de::Error::custom)
    }
}
