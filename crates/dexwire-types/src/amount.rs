//! Exact fixed-point amounts.
//!
//! Prices, quantities and token amounts travel as `int64` minor units with
//! eight implied decimals. Decimal input is converted once, here, and a
//! conversion that would drop digits is an error rather than a truncation.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    DexwireError, Result,
    constants::{AMOUNT_DECIMALS, MINOR_UNITS_PER_TOKEN},
};

/// An amount in minor units (`1 token == 100_000_000`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(pub i64);

impl MinorUnits {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Whole tokens, scaled up. `None` on overflow.
    #[must_use]
    pub const fn from_whole(tokens: i64) -> Option<Self> {
        match tokens.checked_mul(MINOR_UNITS_PER_TOKEN) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Convert a human decimal (e.g. `1.5`) to minor units.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `value` has more than eight fractional digits
    /// - `ValueOutOfRange` if the scaled value does not fit in `i64`
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let out_of_range = || DexwireError::ValueOutOfRange {
            field: "amount",
            value: value.to_string(),
        };

        let scaled = value
            .checked_mul(Decimal::from(MINOR_UNITS_PER_TOKEN))
            .ok_or_else(out_of_range)?;

        if !scaled.fract().is_zero() {
            return Err(DexwireError::PrecisionLoss {
                value,
                decimals: AMOUNT_DECIMALS,
            });
        }

        scaled.to_i64().map(Self).ok_or_else(out_of_range)
    }

    /// Back to a human decimal with eight fractional digits.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, AMOUNT_DECIMALS)
    }
}

impl From<i64> for MinorUnits {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
