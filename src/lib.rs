//! decintl - locale-sensitive formatting for arbitrary-precision decimals
//!
//! Native number formatters work from doubles and lose precision past
//! roughly 15 significant digits. This crate formats [`bigdecimal`] values
//! at full precision in any locale: a locale oracle (bundled ICU4X data)
//! renders a structural template from a double approximation, and the
//! templating engine splices the exact digits into it. Separators, digit
//! glyphs, signs, currency and unit symbols, compact suffixes and exponents
//! all come from the oracle; the digits come from the value.
//!
//! ```no_run
//! use decintl::{DecimalFormat, FormatOptions};
//!
//! let format = DecimalFormat::new(
//!     &["de-DE"],
//!     FormatOptions {
//!         minimum_fraction_digits: Some(30),
//!         ..Default::default()
//!     },
//! )?;
//! let text = format.format("1234.5".parse::<decintl::DecimalValue>()?)?;
//! assert_eq!(text, "1.234,500000000000000000000000000000");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod options;
pub mod oracle;
pub mod part;
pub mod value;

mod cache;
mod formatter;

pub use bigdecimal::rounding::RoundingMode;
pub use bigdecimal::BigDecimal;

pub use error::{FormatError, OptionsError, OracleError, TemplateError, TemplatePhase};
pub use formatter::DecimalFormat;
pub use options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, FormatOptions, LocaleMatcher, Notation,
    ResolvedFormatOptions, SignDisplay, Style, TrailingZeroDisplay, UnitDisplay, UseGrouping,
};
pub use part::{concatenate, FormatPart, PartType};
pub use value::DecimalValue;
