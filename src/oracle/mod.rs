//! The locale-oracle contract.
//!
//! A [`DecimalFormat`](crate::DecimalFormat) never owns locale data. It
//! interrogates an oracle, a native locale-aware formatter that renders
//! numbers of limited precision into typed parts, and uses those parts as a
//! structural template for full-precision output. [`native::NativeOracle`]
//! is the bundled ICU4X-backed implementation; anything implementing
//! [`OracleFactory`] can stand in for it, which is also how locale-data
//! regressions get pinned down in tests.

pub mod native;

use num_bigint::BigInt;

use crate::error::{OptionsError, OracleError};
use crate::options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, LocaleMatcher, Notation, SignDisplay, Style,
    UnitDisplay, UseGrouping,
};
use crate::part::FormatPart;

/// A number the oracle can render natively.
///
/// Doubles cover the structural template; exact big integers cover the
/// grouped zero-scaffold for integer expansion and digit-glyph probing.
#[derive(Debug, Clone, Copy)]
pub enum OracleNumber<'a> {
    Float(f64),
    Integer(&'a BigInt),
}

/// Options handed to an oracle. Same vocabulary as
/// [`FormatOptions`](crate::FormatOptions), with digit counts already
/// clipped to [`ORACLE_LIMIT`](crate::options::ORACLE_LIMIT).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleOptions {
    pub numbering_system: Option<String>,
    pub style: Style,
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub currency_sign: Option<CurrencySign>,
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
}

impl OracleOptions {
    /// Derived options for the integer oracle: plain decimal style with no
    /// fraction and no significant-digit constraint, everything else kept.
    /// Used to render grouped integer scaffolds of arbitrary width.
    pub fn integer_only(&self) -> Self {
        OracleOptions {
            style: Style::Decimal,
            notation: Notation::Standard,
            currency: None,
            currency_display: None,
            currency_sign: None,
            unit: None,
            unit_display: None,
            compact_display: None,
            minimum_fraction_digits: Some(0),
            maximum_fraction_digits: Some(0),
            minimum_significant_digits: None,
            maximum_significant_digits: None,
            ..self.clone()
        }
    }

    /// Derived options for the plain oracle: like [`integer_only`], but
    /// additionally unsigned, ungrouped and unpadded. Its only job is to
    /// reveal the locale's digit glyphs.
    ///
    /// [`integer_only`]: OracleOptions::integer_only
    pub fn plain(&self) -> Self {
        OracleOptions {
            minimum_integer_digits: Some(1),
            sign_display: Some(SignDisplay::Never),
            use_grouping: Some(UseGrouping::Never),
            ..self.integer_only()
        }
    }
}

/// The oracle's own resolution of clipped options, in the shape
/// `Intl.NumberFormat.prototype.resolvedOptions` reports.
///
/// Digit-count fields are `None` when that family is inactive under the
/// requested options; the resolver in
/// [`ResolvedFormatOptions`](crate::ResolvedFormatOptions) only widens
/// families the oracle activated.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleResolvedOptions {
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
}

/// A constructed native formatter for one locale and one set of clipped
/// options.
pub trait Oracle: Send + Sync {
    /// Renders `value` into typed parts.
    ///
    /// Precision beyond what the oracle can hold may be rounded; part
    /// *structure* is what callers rely on. Exact big integers must be
    /// rendered digit-exact or rejected, never silently rounded.
    fn format_to_parts(&self, value: OracleNumber<'_>) -> Result<Vec<FormatPart>, OracleError>;

    /// The oracle's resolution of the options it was built with.
    fn resolved_options(&self) -> &OracleResolvedOptions;
}

/// Builds oracles and answers locale-support queries.
pub trait OracleFactory {
    fn create(
        &self,
        locales: &[&str],
        options: &OracleOptions,
    ) -> Result<Box<dyn Oracle>, OptionsError>;

    /// The subset of `locales` this factory can service, in request order.
    fn supported_locales_of(&self, locales: &[&str], matcher: LocaleMatcher) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_only_strips_fraction_and_style() {
        let options = OracleOptions {
            style: Style::Percent,
            notation: Notation::Compact,
            minimum_integer_digits: Some(21),
            maximum_fraction_digits: Some(20),
            maximum_significant_digits: Some(21),
            sign_display: Some(SignDisplay::Always),
            ..Default::default()
        };
        let integer = options.integer_only();
        assert_eq!(integer.style, Style::Decimal);
        assert_eq!(integer.notation, Notation::Standard);
        assert_eq!(integer.minimum_fraction_digits, Some(0));
        assert_eq!(integer.maximum_fraction_digits, Some(0));
        assert_eq!(integer.maximum_significant_digits, None);
        // Width and sign of the integer section are preserved.
        assert_eq!(integer.minimum_integer_digits, Some(21));
        assert_eq!(integer.sign_display, Some(SignDisplay::Always));
    }

    #[test]
    fn test_plain_is_bare() {
        let options = OracleOptions {
            minimum_integer_digits: Some(21),
            sign_display: Some(SignDisplay::Always),
            use_grouping: Some(UseGrouping::Always),
            ..Default::default()
        };
        let plain = options.plain();
        assert_eq!(plain.minimum_integer_digits, Some(1));
        assert_eq!(plain.sign_display, Some(SignDisplay::Never));
        assert_eq!(plain.use_grouping, Some(UseGrouping::Never));
    }
}
