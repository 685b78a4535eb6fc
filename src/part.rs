//! Typed fragments of a formatted number.
//!
//! A formatted result is a sequence of [`FormatPart`]s, mirroring the
//! part records of `Intl.NumberFormat.prototype.formatToParts`. Consumers
//! that only want text can use [`concatenate`]; consumers that style
//! sections differently (currency symbols, exponents, separators) can walk
//! the parts directly.

use std::fmt;

/// Classification of a [`FormatPart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    /// Locale text with no numeric meaning (spacing, accounting parentheses).
    Literal,
    /// A run of integer digits.
    Integer,
    /// A grouping separator between integer digit runs.
    Group,
    /// The decimal separator.
    Decimal,
    /// A run of fraction digits.
    Fraction,
    PlusSign,
    MinusSign,
    PercentSign,
    /// Currency symbol, code or display name.
    Currency,
    /// Unit symbol or display name.
    Unit,
    /// Compact-notation suffix such as "M" or "million".
    Compact,
    ExponentSeparator,
    ExponentMinusSign,
    /// Digits of the exponent.
    ExponentInteger,
    Nan,
    Infinity,
    /// Anything the classifier could not attribute.
    Unknown,
}

/// One typed fragment of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPart {
    pub part_type: PartType,
    pub value: String,
}

impl FormatPart {
    pub fn new(part_type: PartType, value: impl Into<String>) -> Self {
        FormatPart {
            part_type,
            value: value.into(),
        }
    }

    /// True for integer digit runs, excluding group separators.
    pub fn is_integer(&self) -> bool {
        self.part_type == PartType::Integer
    }

    /// True for the contiguous integer section: digit runs and the
    /// separators between them.
    pub fn is_integer_or_group(&self) -> bool {
        matches!(self.part_type, PartType::Integer | PartType::Group)
    }

    pub fn is_fraction(&self) -> bool {
        self.part_type == PartType::Fraction
    }

    /// True for the numeric portion of an exponent (sign and digits, not
    /// the separator).
    pub fn is_exponent(&self) -> bool {
        matches!(
            self.part_type,
            PartType::ExponentMinusSign | PartType::ExponentInteger
        )
    }
}

impl fmt::Display for FormatPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Joins part values into the final display string.
pub fn concatenate(parts: &[FormatPart]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.value.len()).sum());
    for part in parts {
        out.push_str(&part.value);
    }
    out
}

/// Joins the values of the parts matching `pred`, preserving order.
pub(crate) fn concatenate_filtered<F>(parts: &[FormatPart], pred: F) -> String
where
    F: Fn(&FormatPart) -> bool,
{
    let mut out = String::new();
    for part in parts.iter().filter(|p| pred(p)) {
        out.push_str(&part.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FormatPart> {
        vec![
            FormatPart::new(PartType::MinusSign, "-"),
            FormatPart::new(PartType::Integer, "1"),
            FormatPart::new(PartType::Group, ","),
            FormatPart::new(PartType::Integer, "234"),
            FormatPart::new(PartType::Decimal, "."),
            FormatPart::new(PartType::Fraction, "56"),
        ]
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(concatenate(&sample()), "-1,234.56");
        assert_eq!(concatenate(&[]), "");
    }

    #[test]
    fn test_filters() {
        let parts = sample();
        assert_eq!(
            concatenate_filtered(&parts, FormatPart::is_integer_or_group),
            "1,234"
        );
        assert_eq!(concatenate_filtered(&parts, FormatPart::is_integer), "1234");
        assert_eq!(concatenate_filtered(&parts, FormatPart::is_fraction), "56");
        assert_eq!(concatenate_filtered(&parts, FormatPart::is_exponent), "");
    }
}
