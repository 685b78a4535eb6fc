//! Formatting options, validation, and resolution.
//!
//! Digit-count options accept values far beyond what any locale oracle can
//! render; [`FormatOptions::validate`] enforces the arbitrary-precision
//! ceiling, and clipped copies of the options are handed to the oracle.
//! After oracle construction the user options and the oracle's resolved
//! options merge into [`ResolvedFormatOptions`], which is what the
//! templating engine actually consults.

use bigdecimal::rounding::RoundingMode;

use crate::error::OptionsError;
use crate::oracle::OracleOptions;

/// Ceiling for every digit-count option.
///
/// Fraction-digit options range over `0..=DECIMAL_LIMIT - 1`; the 1-based
/// families (integer and significant digits) range over `1..=DECIMAL_LIMIT`.
pub const DECIMAL_LIMIT: u32 = 1_000_000_000;

/// What the locale oracle can natively render.
///
/// Digit-count options are clipped to this before reaching the oracle:
/// fraction digits to `ORACLE_LIMIT - 1`, the 1-based families to
/// `ORACLE_LIMIT`. Anything beyond is satisfied by the templating engine.
pub const ORACLE_LIMIT: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Decimal,
    Currency,
    Percent,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
    Engineering,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Sign for negative numbers only, including negative zero.
    #[default]
    Auto,
    Always,
    ExceptZero,
    /// Sign for negative numbers, excluding negative zero.
    Negative,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UseGrouping {
    /// Locale preference.
    #[default]
    Auto,
    Always,
    /// Group only when at least two digits precede the first separator.
    Min2,
    Never,
}

/// What to do with fraction zeros beyond the required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingZeroDisplay {
    /// Keep zeros up to the resolved minimum digit counts.
    #[default]
    Auto,
    /// Drop the fraction entirely when it carries no nonzero digit.
    StripIfInteger,
    /// Like `StripIfInteger`, for callers matching the proposed ECMA-402
    /// `roundingPriority` vocabulary.
    LessPrecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencySign {
    #[default]
    Standard,
    /// Wrap negative amounts in parentheses instead of a minus sign.
    Accounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    #[default]
    Short,
    Narrow,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleMatcher {
    #[default]
    BestFit,
    Lookup,
}

/// User-facing formatting options.
///
/// Field vocabulary follows `Intl.NumberFormat`; digit-count fields accept
/// up to [`DECIMAL_LIMIT`] instead of the ECMA-402 ceiling of 21.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    pub locale_matcher: LocaleMatcher,
    /// Numbering system override, e.g. `"arab"` or `"deva"`.
    pub numbering_system: Option<String>,
    pub style: Style,
    /// ISO 4217 code; required when `style` is [`Style::Currency`].
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub currency_sign: Option<CurrencySign>,
    /// Sanctioned unit identifier; required when `style` is [`Style::Unit`].
    pub unit: Option<String>,
    pub unit_display: Option<UnitDisplay>,
    pub notation: Notation,
    pub compact_display: Option<CompactDisplay>,
    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub sign_display: Option<SignDisplay>,
    pub use_grouping: Option<UseGrouping>,
    /// Rounding applied when the exact fraction exceeds the resolved
    /// maximum. Defaults to [`RoundingMode::HalfEven`].
    pub rounding: Option<RoundingMode>,
    pub trailing_zero_display: Option<TrailingZeroDisplay>,
}

/// Offset from `DECIMAL_LIMIT` (and from `ORACLE_LIMIT` when clipping) per
/// digit property. Fraction digits are 0-based so their ceiling sits one
/// below the 1-based families.
const DIGIT_PROPERTIES: [(&str, i64); 5] = [
    ("minimumIntegerDigits", 0),
    ("minimumFractionDigits", -1),
    ("maximumFractionDigits", -1),
    ("minimumSignificantDigits", 0),
    ("maximumSignificantDigits", 0),
];

impl FormatOptions {
    fn digit_values(&self) -> [Option<u32>; 5] {
        [
            self.minimum_integer_digits,
            self.minimum_fraction_digits,
            self.maximum_fraction_digits,
            self.minimum_significant_digits,
            self.maximum_significant_digits,
        ]
    }

    /// Checks digit-count ceilings and style prerequisites.
    ///
    /// Every out-of-range digit property is reported in one error rather
    /// than failing on the first.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let mut offending = Vec::new();
        for ((name, offset), value) in DIGIT_PROPERTIES.iter().zip(self.digit_values()) {
            if let Some(v) = value {
                if i64::from(v) > i64::from(DECIMAL_LIMIT) + offset {
                    offending.push(*name);
                }
            }
        }
        if !offending.is_empty() {
            return Err(OptionsError::DigitsOutOfRange {
                properties: offending,
            });
        }
        if self.style == Style::Currency && self.currency.is_none() {
            return Err(OptionsError::MissingCurrency);
        }
        if self.style == Style::Unit && self.unit.is_none() {
            return Err(OptionsError::MissingUnit);
        }
        Ok(())
    }

    /// Copies the options with digit counts clipped to the oracle's range.
    pub fn to_oracle_options(&self) -> OracleOptions {
        let clip = |value: Option<u32>, offset: i64| -> Option<u32> {
            value.map(|v| v.min((i64::from(ORACLE_LIMIT) + offset) as u32))
        };
        OracleOptions {
            numbering_system: self.numbering_system.clone(),
            style: self.style,
            currency: self.currency.clone(),
            currency_display: self.currency_display,
            currency_sign: self.currency_sign,
            unit: self.unit.clone(),
            unit_display: self.unit_display,
            notation: self.notation,
            compact_display: self.compact_display,
            minimum_integer_digits: clip(self.minimum_integer_digits, 0),
            minimum_fraction_digits: clip(self.minimum_fraction_digits, -1),
            maximum_fraction_digits: clip(self.maximum_fraction_digits, -1),
            minimum_significant_digits: clip(self.minimum_significant_digits, 0),
            maximum_significant_digits: clip(self.maximum_significant_digits, 0),
            sign_display: self.sign_display,
            use_grouping: self.use_grouping,
        }
    }
}

/// The merged view of user options and the oracle's resolution, consulted
/// by the templating engine.
///
/// Digit counts are the maximum of what the user asked for and what the
/// (clipped) oracle reports, so the full-precision requirements survive the
/// clipping. Fields the oracle alone decides (locale, numbering system,
/// grouping) are taken from its resolution verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormatOptions {
    pub locale: String,
    pub numbering_system: String,
    pub style: Style,
    pub notation: Notation,
    pub sign_display: SignDisplay,
    pub use_grouping: UseGrouping,
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub currency_sign: Option<CurrencySign>,
    pub unit: Option<String>,
    pub unit_display: Option<UnitDisplay>,
    pub compact_display: Option<CompactDisplay>,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub rounding: RoundingMode,
    pub trailing_zero_display: TrailingZeroDisplay,
}

impl ResolvedFormatOptions {
    pub(crate) fn resolve(
        user: &FormatOptions,
        oracle: &crate::oracle::OracleResolvedOptions,
    ) -> Self {
        // A digit family is active only if the oracle resolved it; within an
        // active family the user's (unclipped) request wins when larger.
        let widen = |user_value: Option<u32>, oracle_value: Option<u32>| -> Option<u32> {
            oracle_value.map(|o| o.max(user_value.unwrap_or(0)))
        };

        let minimum_integer_digits = oracle
            .minimum_integer_digits
            .max(user.minimum_integer_digits.unwrap_or(0))
            .max(1);
        let minimum_fraction_digits =
            widen(user.minimum_fraction_digits, oracle.minimum_fraction_digits);
        let mut maximum_fraction_digits =
            widen(user.maximum_fraction_digits, oracle.maximum_fraction_digits);
        let minimum_significant_digits = widen(
            user.minimum_significant_digits,
            oracle.minimum_significant_digits,
        );
        let mut maximum_significant_digits = widen(
            user.maximum_significant_digits,
            oracle.maximum_significant_digits,
        );

        // Widening the minimum may push it past the maximum of its family.
        if let Some(max_sd) = maximum_significant_digits {
            maximum_significant_digits =
                Some(max_sd.max(minimum_significant_digits.unwrap_or(0)));
        }
        if let Some(max_fd) = maximum_fraction_digits {
            maximum_fraction_digits = Some(max_fd.max(minimum_fraction_digits.unwrap_or(0)));
        }

        ResolvedFormatOptions {
            locale: oracle.locale.clone(),
            numbering_system: oracle.numbering_system.clone(),
            style: oracle.style,
            notation: oracle.notation,
            sign_display: oracle.sign_display,
            use_grouping: oracle.use_grouping,
            currency: oracle.currency.clone(),
            currency_display: oracle.currency_display,
            currency_sign: oracle.currency_sign,
            unit: oracle.unit.clone(),
            unit_display: oracle.unit_display,
            compact_display: oracle.compact_display,
            minimum_integer_digits,
            minimum_fraction_digits,
            maximum_fraction_digits,
            minimum_significant_digits,
            maximum_significant_digits,
            rounding: user.rounding.unwrap_or(RoundingMode::HalfEven),
            trailing_zero_display: user.trailing_zero_display.unwrap_or_default(),
        }
    }

    /// True when a significant-digit bound is active; the significant
    /// family then takes precedence over the fraction family.
    pub fn significance_active(&self) -> bool {
        self.minimum_significant_digits.is_some() || self.maximum_significant_digits.is_some()
    }
}
