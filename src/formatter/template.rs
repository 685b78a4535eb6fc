//! The oracle-templating engine.
//!
//! Formatting proceeds in phases: acquire a structural template from the
//! primary oracle for a double approximation of the value, classify its
//! sections, correct the exact value for notation-induced magnitude shifts,
//! then decide per section whether the template already suffices. When it
//! does not, the integer section is re-rendered through the integer oracle
//! around a power-of-ten proxy and overlaid with the exact digits, and the
//! fraction is rebuilt digit by digit from the exact value. Everything the
//! engine cannot attribute (signs, symbols, spacing, exponents) passes
//! through the template untouched.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{TemplateError, TemplatePhase};
use crate::formatter::DecimalFormat;
use crate::options::{
    Notation, Style, TrailingZeroDisplay, DECIMAL_LIMIT, ORACLE_LIMIT,
};
use crate::oracle::OracleNumber;
use crate::part::{concatenate_filtered, FormatPart, PartType};
use crate::value::DecimalValue;

/// What to do with the template's fraction section during reassembly.
enum FractionPlan {
    /// The template fraction is already exact.
    Keep,
    /// Substitute this localized digit string; empty means drop the
    /// fraction and its decimal separator.
    Replace(String),
}

impl DecimalFormat {
    pub(crate) fn assemble(&self, value: DecimalValue) -> Result<Vec<FormatPart>, TemplateError> {
        let template = self
            .primary
            .format_to_parts(OracleNumber::Float(value.approx_f64()))
            .map_err(|e| TemplateError::Oracle {
                phase: TemplatePhase::Acquisition,
                source: e,
            })?;

        // Non-finite values have no digits to expand; the oracle's
        // rendition is final.
        let DecimalValue::Finite {
            value: decimal, ..
        } = value
        else {
            return Ok(template);
        };
        let mut decimal = decimal.normalized();
        let resolved = &self.resolved;

        // -- classification ------------------------------------------------
        let exponent_text = concatenate_filtered(&template, FormatPart::is_exponent);
        let has_integer_section = template.iter().any(FormatPart::is_integer_or_group);
        let template_integer_digits: usize = template
            .iter()
            .filter(|p| p.is_integer())
            .map(|p| p.value.chars().count())
            .sum();
        let template_fraction_digits: usize = template
            .iter()
            .filter(|p| p.is_fraction())
            .map(|p| p.value.chars().count())
            .sum();

        // -- magnitude correction ------------------------------------------
        if resolved.style == Style::Percent {
            decimal = (&decimal * BigDecimal::from(100u32)).normalized();
        }
        match resolved.notation {
            Notation::Compact if !decimal.is_zero() => {
                // The template shows a compacted mantissa; shift the exact
                // value by however many integer digits the suffix absorbed.
                let template_trimmed = concatenate_filtered(&template, FormatPart::is_integer)
                    .chars()
                    .skip_while(|c| *c == self.digits[0])
                    .count();
                let shift = true_integer_digits(&decimal) as i64 - template_trimmed as i64;
                if shift != 0 {
                    decimal = (&decimal * pow10(-shift)).normalized();
                }
            }
            Notation::Scientific | Notation::Engineering => {
                let exponent = self.delocalize_exponent(&exponent_text)?;
                if exponent != 0 {
                    decimal = (&decimal * pow10(-exponent)).normalized();
                }
            }
            _ => {}
        }

        // -- exact digit accounting ----------------------------------------
        let integer_part = decimal.with_scale_round(0, RoundingMode::Down);
        let fraction_part = (&decimal - &integer_part).abs().normalized();
        let integer_text = integer_part
            .as_bigint_and_exponent()
            .0
            .magnitude()
            .to_string();
        // Significant-digit accounting: the integer section contributes
        // nothing for |v| < 1, and exactly the single zero for v = 0.
        let significant_integer_digits: u32 = if integer_part.is_zero() {
            u32::from(decimal.is_zero())
        } else {
            integer_text.chars().count() as u32
        };
        let fraction_digits = fraction_part.fractional_digit_count().max(0) as u32;

        let min_id = resolved.minimum_integer_digits;
        let (mut min_fd, mut max_fd) = if resolved.significance_active() {
            let min_sd = resolved.minimum_significant_digits.unwrap_or(1);
            let max_sd = resolved.maximum_significant_digits.unwrap_or(DECIMAL_LIMIT);
            let leading_zeros = if significant_integer_digits == 0 {
                fraction_leading_zeros(&fraction_part)
            } else {
                0
            };
            let min_fd = leading_zeros + min_sd.saturating_sub(significant_integer_digits);
            let max_fd = (leading_zeros + max_sd.saturating_sub(significant_integer_digits))
                .max(min_fd);
            (min_fd, max_fd)
        } else {
            let min_fd = resolved.minimum_fraction_digits.unwrap_or(0);
            let max_fd = resolved
                .maximum_fraction_digits
                .unwrap_or(fraction_digits)
                .max(min_fd);
            (min_fd, max_fd)
        };

        // -- fraction rounding ---------------------------------------------
        let rounded_fraction = if !fraction_part.is_zero() && fraction_digits > max_fd {
            Some(fraction_part.with_scale_round(max_fd as i64, resolved.rounding))
        } else {
            None
        };
        // Rounding the fraction under the requested mode can carry into the
        // integer where the oracle's half-expand double did not (or vice
        // versa), so the carry folds into the exact integer text here and
        // the template's own digits are verified below.
        let carried = rounded_fraction
            .as_ref()
            .is_some_and(|r| *r >= BigDecimal::one());
        let integer_text = if carried {
            (integer_part.as_bigint_and_exponent().0.magnitude() + 1u32).to_string()
        } else {
            integer_text
        };
        if carried && resolved.significance_active() {
            let min_sd = resolved.minimum_significant_digits.unwrap_or(1);
            let max_sd = resolved.maximum_significant_digits.unwrap_or(DECIMAL_LIMIT);
            let sig = integer_text.chars().count() as u32;
            min_fd = min_sd.saturating_sub(sig);
            max_fd = max_sd.saturating_sub(sig).max(min_fd);
        }

        // -- sufficiency ---------------------------------------------------
        let required_integer = integer_text.chars().count().max(min_id as usize);
        let integer_sufficient = !has_integer_section
            || (min_id <= ORACLE_LIMIT
                && template_integer_digits >= required_integer
                && (resolved.notation != Notation::Standard
                    || self.template_integer_matches(&template, &integer_text)));

        let policy = resolved.trailing_zero_display;
        let fraction_sufficient = !carried
            && template_fraction_digits >= fraction_digits as usize
            && min_fd < ORACLE_LIMIT
            && template_fraction_digits >= min_fd as usize
            // Non-default trailing-zero policies may need to drop a zero
            // fraction the oracle still shows.
            && (policy == TrailingZeroDisplay::Auto || !fraction_part.is_zero());

        // -- integer expansion ---------------------------------------------
        let integer_parts = if integer_sufficient {
            None
        } else {
            Some(self.expand_integer(&integer_text, required_integer)?)
        };

        // -- fraction construction -----------------------------------------
        let fraction_plan = if fraction_sufficient {
            FractionPlan::Keep
        } else {
            FractionPlan::Replace(self.construct_fraction(
                &fraction_part,
                rounded_fraction.as_ref(),
                min_fd,
                max_fd,
                policy,
            ))
        };

        self.reassemble(template, integer_parts, fraction_plan)
    }

    /// Renders a grouped scaffold of `width` digits through the integer
    /// oracle and overlays the exact digits onto its low end.
    ///
    /// The proxy is 10^(width-1): wide enough to carry every grouping
    /// separator, with a known leading digit that is blanked to the zero
    /// glyph before the overlay.
    fn expand_integer(
        &self,
        integer_text: &str,
        width: usize,
    ) -> Result<Vec<FormatPart>, TemplateError> {
        let proxy = pow10_bigint(width.saturating_sub(1));
        let rendered = self
            .integer
            .format_to_parts(OracleNumber::Integer(&proxy))
            .map_err(|e| TemplateError::Oracle {
                phase: TemplatePhase::IntegerExpansion,
                source: e,
            })?;
        let mut parts: Vec<FormatPart> = rendered
            .into_iter()
            .filter(FormatPart::is_integer_or_group)
            .collect();

        let first = parts
            .iter_mut()
            .find(|p| p.is_integer())
            .ok_or(TemplateError::MissingPart {
                phase: TemplatePhase::IntegerExpansion,
                part: PartType::Integer,
            })?;
        let mut chars: Vec<char> = first.value.chars().collect();
        match chars.first() {
            Some(c) if *c == self.digits[1] => chars[0] = self.digits[0],
            other => {
                return Err(TemplateError::Mismatch {
                    phase: TemplatePhase::IntegerExpansion,
                    detail: format!("proxy scaffold starts with {other:?}, expected a one"),
                });
            }
        }
        first.value = chars.into_iter().collect();

        let localized: Vec<char> = self.localize(integer_text).chars().collect();
        let mut source = localized.iter().rev();
        'overlay: for part in parts.iter_mut().rev() {
            if !part.is_integer() {
                continue;
            }
            let mut chars: Vec<char> = part.value.chars().collect();
            for slot in chars.iter_mut().rev() {
                match source.next() {
                    Some(digit) => *slot = *digit,
                    None => {
                        part.value = chars.into_iter().collect();
                        break 'overlay;
                    }
                }
            }
            part.value = chars.into_iter().collect();
        }
        if source.next().is_some() {
            return Err(TemplateError::Mismatch {
                phase: TemplatePhase::IntegerExpansion,
                detail: "proxy scaffold narrower than the exact integer".to_string(),
            });
        }
        Ok(parts)
    }

    /// Builds the exact localized fraction digit string. Empty output means
    /// the fraction (and its separator) should disappear.
    fn construct_fraction(
        &self,
        fraction: &BigDecimal,
        rounded: Option<&BigDecimal>,
        min_fd: u32,
        max_fd: u32,
        policy: TrailingZeroDisplay,
    ) -> String {
        let mut ascii = if fraction.is_zero() {
            "0".repeat(min_fd as usize)
        } else if let Some(rounded) = rounded {
            if rounded.is_zero() {
                "0".repeat(min_fd as usize)
            } else if *rounded >= BigDecimal::one() {
                // Rounding carried into the integer; the caller folded the
                // carry into the integer text, so the fraction is all zeros.
                "0".repeat(max_fd as usize)
            } else {
                exact_fraction_digits(rounded)
            }
        } else {
            exact_fraction_digits(fraction)
        };

        if ascii.len() < min_fd as usize {
            let pad = min_fd as usize - ascii.len();
            ascii.extend(std::iter::repeat('0').take(pad));
        }
        // Trailing zeros beyond the minimum never survive: either they were
        // rounding artifacts or padding past what the options require.
        while ascii.len() > min_fd as usize && ascii.ends_with('0') {
            ascii.pop();
        }

        let integral = ascii.chars().all(|c| c == '0');
        if integral && policy != TrailingZeroDisplay::Auto {
            return String::new();
        }
        self.localize(&ascii)
    }

    /// Whether the template's integer digits already spell the exact
    /// integer, minimum-digit zero padding aside. A mismatch means the
    /// oracle's rounded double disagrees with the exact value and the
    /// integer section must be rebuilt.
    fn template_integer_matches(&self, template: &[FormatPart], integer_text: &str) -> bool {
        let mut ascii = String::new();
        for part in template.iter().filter(|p| p.is_integer()) {
            for c in part.value.chars() {
                match self.digits.iter().position(|&g| g == c) {
                    Some(i) => ascii.push(char::from(b'0' + i as u8)),
                    None if c.is_ascii_digit() => ascii.push(c),
                    None => return false,
                }
            }
        }
        strip_leading_zeros(&ascii) == strip_leading_zeros(integer_text)
    }

    /// Splices expanded sections into the template: the first integer run
    /// swallows the whole expanded integer sequence, the first fraction run
    /// is replaced wholesale, and everything else passes through.
    fn reassemble(
        &self,
        template: Vec<FormatPart>,
        integer_parts: Option<Vec<FormatPart>>,
        fraction_plan: FractionPlan,
    ) -> Result<Vec<FormatPart>, TemplateError> {
        let mut out = Vec::with_capacity(template.len());
        let mut integer_done = false;
        let mut fraction_done = false;
        for part in template {
            match part.part_type {
                PartType::Integer | PartType::Group => match &integer_parts {
                    None => out.push(part),
                    Some(expanded) => {
                        if !integer_done {
                            integer_done = true;
                            out.extend(expanded.iter().cloned());
                        }
                    }
                },
                PartType::Fraction => {
                    if fraction_done {
                        continue;
                    }
                    fraction_done = true;
                    match &fraction_plan {
                        FractionPlan::Keep => out.push(part),
                        FractionPlan::Replace(text) if text.is_empty() => {
                            if out.last().map(|p| p.part_type) == Some(PartType::Decimal) {
                                out.pop();
                            }
                        }
                        FractionPlan::Replace(text) => {
                            out.push(FormatPart::new(PartType::Fraction, text.clone()));
                        }
                    }
                }
                _ => out.push(part),
            }
        }

        if let Some(expanded) = &integer_parts {
            if !integer_done && !expanded.is_empty() {
                return Err(TemplateError::MissingPart {
                    phase: TemplatePhase::Reassembly,
                    part: PartType::Integer,
                });
            }
        }
        if let FractionPlan::Replace(text) = &fraction_plan {
            if !fraction_done && !text.is_empty() {
                // The oracle's rounded double dropped the fraction the exact
                // value still has; attach it after the integer section.
                let at = out
                    .iter()
                    .rposition(FormatPart::is_integer_or_group)
                    .map(|i| i + 1)
                    .ok_or(TemplateError::MissingPart {
                        phase: TemplatePhase::Reassembly,
                        part: PartType::Fraction,
                    })?;
                out.insert(at, FormatPart::new(PartType::Decimal, self.separator.clone()));
                out.insert(at + 1, FormatPart::new(PartType::Fraction, text.clone()));
            }
        }
        Ok(out)
    }

    /// Reads a localized exponent back into a number via the probed glyph
    /// table. Empty text means exponent zero.
    fn delocalize_exponent(&self, text: &str) -> Result<i64, TemplateError> {
        let mut ascii = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '-' | '\u{2212}' => ascii.push('-'),
                '\u{200E}' | '\u{200F}' | '\u{061C}' => {}
                c => {
                    if let Some(i) = self.digits.iter().position(|&g| g == c) {
                        ascii.push(char::from(b'0' + i as u8));
                    } else if c.is_ascii_digit() {
                        ascii.push(c);
                    } else {
                        return Err(TemplateError::Mismatch {
                            phase: TemplatePhase::MagnitudeCorrection,
                            detail: format!("unrecognized exponent character {c:?}"),
                        });
                    }
                }
            }
        }
        if ascii.is_empty() {
            return Ok(0);
        }
        ascii.parse().map_err(|_| TemplateError::Mismatch {
            phase: TemplatePhase::MagnitudeCorrection,
            detail: format!("unreadable exponent {text:?}"),
        })
    }

    /// Maps ASCII digits into the locale's glyphs.
    fn localize(&self, ascii: &str) -> String {
        ascii
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.digits[d as usize],
                None => c,
            })
            .collect()
    }
}

/// Magnitude-shifted one: 10^exponent as an exact decimal.
fn pow10(exponent: i64) -> BigDecimal {
    if exponent >= 0 {
        BigDecimal::new(pow10_bigint(exponent as usize), 0)
    } else {
        BigDecimal::new(BigInt::one(), -exponent)
    }
}

fn pow10_bigint(zeros: usize) -> BigInt {
    num_traits::pow(BigInt::from(10), zeros)
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Digits before the decimal point, leading zeros trimmed; 0 for |v| < 1.
fn true_integer_digits(decimal: &BigDecimal) -> usize {
    let truncated = decimal.with_scale_round(0, RoundingMode::Down);
    if truncated.is_zero() {
        0
    } else {
        truncated
            .as_bigint_and_exponent()
            .0
            .magnitude()
            .to_string()
            .len()
    }
}

/// Zeros between the decimal point and the first significant fraction
/// digit of a value in [0, 1).
fn fraction_leading_zeros(fraction: &BigDecimal) -> u32 {
    if fraction.is_zero() {
        return 0;
    }
    let (digits, scale) = fraction.as_bigint_and_exponent();
    let written = digits.magnitude().to_string().len() as i64;
    (scale - written).max(0) as u32
}

/// The fraction's digit string at its own scale, leading zeros included.
fn exact_fraction_digits(fraction: &BigDecimal) -> String {
    let (digits, scale) = fraction.as_bigint_and_exponent();
    let written = digits.magnitude().to_string();
    let pad = (scale - written.len() as i64).max(0) as usize;
    let mut out = String::with_capacity(pad + written.len());
    out.extend(std::iter::repeat('0').take(pad));
    out.push_str(&written);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(3), BigDecimal::from_str("1000").unwrap());
        assert_eq!(pow10(0), BigDecimal::from_str("1").unwrap());
        assert_eq!(pow10(-4), BigDecimal::from_str("0.0001").unwrap());
        assert_eq!(pow10_bigint(5).to_string(), "100000");
    }

    #[test]
    fn test_true_integer_digits() {
        let d = |s: &str| BigDecimal::from_str(s).unwrap();
        assert_eq!(true_integer_digits(&d("1234567.89")), 7);
        assert_eq!(true_integer_digits(&d("-1234567.89")), 7);
        assert_eq!(true_integer_digits(&d("0.5")), 0);
        assert_eq!(true_integer_digits(&d("0")), 0);
        assert_eq!(true_integer_digits(&d("9.99")), 1);
    }

    #[test]
    fn test_fraction_leading_zeros() {
        let d = |s: &str| BigDecimal::from_str(s).unwrap();
        assert_eq!(fraction_leading_zeros(&d("0.000123")), 3);
        assert_eq!(fraction_leading_zeros(&d("0.123")), 0);
        assert_eq!(fraction_leading_zeros(&d("0")), 0);
    }

    #[test]
    fn test_exact_fraction_digits() {
        let d = |s: &str| BigDecimal::from_str(s).unwrap().normalized();
        assert_eq!(exact_fraction_digits(&d("0.000123")), "000123");
        assert_eq!(exact_fraction_digits(&d("0.5")), "5");
        assert_eq!(exact_fraction_digits(&d("0.120")), "12");
    }
}
