//! Value types that can be formatted.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::error::FormatError;

/// A value accepted by the formatter.
///
/// Finite values carry full arbitrary precision. The sign flag exists so
/// negative zero survives: `BigDecimal` has no signed zero, but sign
/// display must distinguish `-0` from `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalValue {
    Nan,
    Infinite {
        negative: bool,
    },
    Finite {
        value: BigDecimal,
        /// True for negative values and for negative zero.
        negative: bool,
    },
}

impl DecimalValue {
    pub fn is_nan(&self) -> bool {
        matches!(self, DecimalValue::Nan)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, DecimalValue::Finite { .. })
    }

    pub fn is_zero(&self) -> bool {
        match self {
            DecimalValue::Finite { value, .. } => value.is_zero(),
            _ => false,
        }
    }

    /// True for negative values, negative zero and negative infinity.
    pub fn is_negative(&self) -> bool {
        match self {
            DecimalValue::Nan => false,
            DecimalValue::Infinite { negative } => *negative,
            DecimalValue::Finite { negative, .. } => *negative,
        }
    }

    /// Nearest double, as handed to the structural oracle.
    ///
    /// Finite values whose magnitude exceeds double range saturate to
    /// `±f64::MAX` instead of overflowing to infinity, so they still take
    /// the finite formatting path. Negative zero is preserved.
    pub fn approx_f64(&self) -> f64 {
        match self {
            DecimalValue::Nan => f64::NAN,
            DecimalValue::Infinite { negative: true } => f64::NEG_INFINITY,
            DecimalValue::Infinite { negative: false } => f64::INFINITY,
            DecimalValue::Finite { value, negative } => {
                let mut approx = value.to_f64().unwrap_or(if *negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                });
                if approx.is_infinite() {
                    approx = f64::MAX.copysign(approx);
                }
                if approx == 0.0 {
                    approx = if *negative { -0.0 } else { 0.0 };
                }
                approx
            }
        }
    }

    /// Formats with a cached per-locale formatter using default options.
    ///
    /// The counterpart of `Number.prototype.toLocaleString`: convenient for
    /// one-off formatting, while repeated calls with the same locale reuse
    /// the formatter through an LRU cache.
    pub fn to_locale_string(&self, locale: &str) -> Result<String, FormatError> {
        let formatter = crate::cache::get_or_create(locale)?;
        Ok(formatter.format(self.clone())?)
    }
}

impl From<f64> for DecimalValue {
    /// Converts the exact binary value of the double. `0.1_f64` therefore
    /// carries its full binary expansion; parse from a string to get the
    /// decimal literal instead.
    fn from(n: f64) -> Self {
        if n.is_nan() {
            DecimalValue::Nan
        } else if n.is_infinite() {
            DecimalValue::Infinite { negative: n < 0.0 }
        } else {
            DecimalValue::Finite {
                value: BigDecimal::from_f64(n).unwrap_or_default(),
                negative: n.is_sign_negative(),
            }
        }
    }
}

impl From<f32> for DecimalValue {
    fn from(n: f32) -> Self {
        DecimalValue::from(f64::from(n))
    }
}

impl From<BigDecimal> for DecimalValue {
    fn from(value: BigDecimal) -> Self {
        let negative = value.sign() == Sign::Minus;
        DecimalValue::Finite { value, negative }
    }
}

impl From<BigInt> for DecimalValue {
    fn from(value: BigInt) -> Self {
        DecimalValue::from(BigDecimal::from(value))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for DecimalValue {
            fn from(n: $ty) -> Self {
                DecimalValue::from(BigDecimal::from(n))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl FromStr for DecimalValue {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "NaN" | "+NaN" | "-NaN" | "nan" => return Ok(DecimalValue::Nan),
            "Infinity" | "+Infinity" | "inf" | "+inf" => {
                return Ok(DecimalValue::Infinite { negative: false });
            }
            "-Infinity" | "-inf" => {
                return Ok(DecimalValue::Infinite { negative: true });
            }
            _ => {}
        }
        let value = BigDecimal::from_str(trimmed)?;
        // from_str loses the sign of "-0"; recover it from the text.
        let negative = value.sign() == Sign::Minus
            || (value.is_zero() && trimmed.starts_with('-'));
        Ok(DecimalValue::Finite { value, negative })
    }
}
