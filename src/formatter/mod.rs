//! The locale-aware decimal formatter.

mod template;

use crate::error::{OptionsError, TemplateError};
use crate::options::{FormatOptions, LocaleMatcher, ResolvedFormatOptions};
use crate::oracle::native::NativeOracleFactory;
use crate::oracle::{Oracle, OracleFactory, OracleNumber, OracleOptions};
use crate::part::{concatenate, FormatPart, PartType};
use crate::value::DecimalValue;

/// Curated locale tags accepted by [`DecimalFormat::supported_locales`].
///
/// A sample across scripts, numbering systems and grouping conventions;
/// other well-formed tags work too, falling back through ICU data.
pub(crate) const SUPPORTED_LOCALES: &[&str] = &[
    "af", "am", "ar", "ar-EG", "ar-SA", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da",
    "de", "de-AT", "de-CH", "el", "en", "en-AU", "en-CA", "en-GB", "en-IN", "en-US", "es",
    "es-419", "es-AR", "es-MX", "et", "eu", "fa", "fi", "fil", "fr", "fr-CA", "fr-CH", "ga",
    "gl", "gu", "he", "hi", "hr", "hu", "hy", "id", "is", "it", "ja", "ka", "kk", "km", "kn",
    "ko", "ky", "lo", "lt", "lv", "mk", "ml", "mn", "mr", "ms", "mt", "my", "nb", "ne", "nl",
    "nn", "pa", "pl", "ps", "pt", "pt-BR", "pt-PT", "ro", "ru", "si", "sk", "sl", "sq", "sr",
    "sv", "sw", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi", "zh", "zh-Hans", "zh-Hant",
    "zh-TW", "zu",
];

/// A reusable locale-sensitive formatter for arbitrary-precision decimals.
///
/// Construction resolves the locale and options once; each [`format`] call
/// obtains a structural template from the locale oracle for a double
/// approximation of the value, then substitutes the exact digits. All
/// locale knowledge lives behind the [`Oracle`] interface.
///
/// [`format`]: DecimalFormat::format
pub struct DecimalFormat {
    resolved: ResolvedFormatOptions,
    primary: Box<dyn Oracle>,
    integer: Box<dyn Oracle>,
    digits: [char; 10],
    /// The locale's decimal separator, for fractions the template dropped.
    pub(crate) separator: String,
}

impl DecimalFormat {
    /// Builds a formatter over the bundled ICU4X oracle.
    ///
    /// `locales` are tried in order; an empty list means the default
    /// locale. Validation failures and unsupported locales surface here,
    /// never later from `format`.
    pub fn new(locales: &[&str], options: FormatOptions) -> Result<Self, OptionsError> {
        Self::with_factory(locales, options, &NativeOracleFactory)
    }

    /// Builds a formatter over a caller-supplied oracle factory.
    ///
    /// Three oracles are created: the primary one carries the full clipped
    /// options, an integer-only sibling renders grouped integer scaffolds,
    /// and a plain sibling reveals the locale's digit glyphs.
    pub fn with_factory(
        locales: &[&str],
        options: FormatOptions,
        factory: &dyn OracleFactory,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let oracle_options = options.to_oracle_options();
        let primary = factory.create(locales, &oracle_options)?;
        let integer = factory.create(locales, &oracle_options.integer_only())?;
        let plain = factory.create(locales, &oracle_options.plain())?;

        let resolved = ResolvedFormatOptions::resolve(&options, primary.resolved_options());
        let digits = probe_digits(plain.as_ref())?;
        let separator = probe_separator(factory, locales, &oracle_options)?;
        Ok(DecimalFormat {
            resolved,
            primary,
            integer,
            digits,
            separator,
        })
    }

    /// Formats a value into its display string.
    pub fn format(&self, value: impl Into<DecimalValue>) -> Result<String, TemplateError> {
        Ok(concatenate(&self.format_to_parts(value)?))
    }

    /// Formats a value into typed parts.
    pub fn format_to_parts(
        &self,
        value: impl Into<DecimalValue>,
    ) -> Result<Vec<FormatPart>, TemplateError> {
        self.assemble(value.into())
    }

    /// The merged resolution of user options and oracle behavior.
    pub fn resolved_options(&self) -> &ResolvedFormatOptions {
        &self.resolved
    }

    /// The requested locales the default oracle can service, in order.
    pub fn supported_locales_of(locales: &[&str], options: Option<&FormatOptions>) -> Vec<String> {
        let matcher = options.map(|o| o.locale_matcher).unwrap_or_default();
        NativeOracleFactory.supported_locales_of(locales, matcher)
    }

    /// A curated list of locale tags known to work well.
    pub fn supported_locales() -> &'static [&'static str] {
        SUPPORTED_LOCALES
    }
}

/// Learns the locale's ten digit glyphs by formatting 0 through 9 with the
/// plain oracle. Every other digit operation in the engine is a lookup into
/// this table, so no further oracle round-trips are needed for zero runs or
/// exponent read-back.
fn probe_digits(plain: &dyn Oracle) -> Result<[char; 10], OptionsError> {
    let mut digits = ['0'; 10];
    for (i, glyph) in digits.iter_mut().enumerate() {
        let parts = plain
            .format_to_parts(OracleNumber::Float(i as f64))
            .map_err(|e| OptionsError::ProbeFailed(e.to_string()))?;
        let text = concatenate(&parts);
        *glyph = text
            .chars()
            .find(|c| !matches!(c, '\u{200E}' | '\u{200F}' | '\u{061C}'))
            .ok_or_else(|| {
                OptionsError::ProbeFailed(format!("empty rendition for digit {i}"))
            })?;
    }
    Ok(digits)
}

/// Learns the locale's decimal separator by formatting one half with a
/// single fraction digit pinned. Needed when the oracle's rounded double
/// carried past the fraction the exact value still has.
fn probe_separator(
    factory: &dyn OracleFactory,
    locales: &[&str],
    options: &OracleOptions,
) -> Result<String, OptionsError> {
    let probe_options = OracleOptions {
        minimum_fraction_digits: Some(1),
        maximum_fraction_digits: Some(1),
        ..options.plain()
    };
    let oracle = factory.create(locales, &probe_options)?;
    let parts = oracle
        .format_to_parts(OracleNumber::Float(0.5))
        .map_err(|e| OptionsError::ProbeFailed(e.to_string()))?;
    parts
        .into_iter()
        .find(|p| p.part_type == PartType::Decimal)
        .map(|p| p.value)
        .ok_or_else(|| OptionsError::ProbeFailed("no decimal separator for 0.5".to_string()))
}
