//! Error types for configuration and formatting.

use thiserror::Error;

use crate::part::PartType;

/// Errors in user-supplied formatting options.
///
/// These surface synchronously from [`DecimalFormat::new`](crate::DecimalFormat::new);
/// a formatter that constructed successfully never raises them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// One or more digit-count options exceed the arbitrary-precision ceiling.
    ///
    /// All offending property names are collected into a single error so the
    /// caller sees every problem at once.
    #[error("{} value{} out of range", properties.join(", "), if properties.len() == 1 { " is" } else { "s are" })]
    DigitsOutOfRange { properties: Vec<&'static str> },

    /// Style is `currency` but no currency code was given.
    #[error("currency is required when style is \"currency\"")]
    MissingCurrency,

    /// Style is `unit` but no unit identifier was given.
    #[error("unit is required when style is \"unit\"")]
    MissingUnit,

    /// None of the requested locales is supported by the oracle.
    #[error("no supported locale among {requested:?}")]
    UnsupportedLocale { requested: Vec<String> },

    /// The oracle failed a construction-time capability probe.
    #[error("oracle rejected construction probe: {0}")]
    ProbeFailed(String),
}

/// Failure reported by a locale oracle while producing parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct OracleError(pub String);

/// Phase of the templating pipeline, attached to [`TemplateError`] for
/// diagnosis against a changed oracle or locale-data version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePhase {
    /// Obtaining the structural template from the primary oracle.
    Acquisition,
    /// Splitting the template into exponent, integer and fraction sections.
    Classification,
    /// Compact/scientific/engineering/percent magnitude adjustment.
    MagnitudeCorrection,
    /// Rendering the expanded integer grouping.
    IntegerExpansion,
    /// Building the exact fraction digit string.
    FractionConstruction,
    /// Splicing expanded sections back into the template.
    Reassembly,
}

/// Implementation-invariant violations in the templating engine.
///
/// These indicate that the oracle's output shape broke an assumption of the
/// splicing logic, not that the input was bad. They are fatal: the engine
/// never retries or silently tolerates them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A structural part the resolved options require was absent.
    #[error("template invariant violated in {phase:?}: missing expected {part:?} part")]
    MissingPart { phase: TemplatePhase, part: PartType },

    /// The template and the expanded content disagree about shape.
    #[error("template invariant violated in {phase:?}: {detail}")]
    Mismatch { phase: TemplatePhase, detail: String },

    /// The oracle itself failed mid-pipeline.
    #[error("oracle failure in {phase:?}")]
    Oracle {
        phase: TemplatePhase,
        #[source]
        source: OracleError,
    },
}

/// Either kind of failure, for APIs that construct and format in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_out_of_range_message() {
        let one = OptionsError::DigitsOutOfRange {
            properties: vec!["minimumIntegerDigits"],
        };
        assert_eq!(one.to_string(), "minimumIntegerDigits value is out of range");

        let two = OptionsError::DigitsOutOfRange {
            properties: vec!["minimumFractionDigits", "maximumFractionDigits"],
        };
        assert_eq!(
            two.to_string(),
            "minimumFractionDigits, maximumFractionDigits values are out of range"
        );
    }

    #[test]
    fn test_template_error_names_phase_and_part() {
        let err = TemplateError::MissingPart {
            phase: TemplatePhase::Reassembly,
            part: PartType::Fraction,
        };
        let text = err.to_string();
        assert!(text.contains("Reassembly"), "{text}");
        assert!(text.contains("Fraction"), "{text}");
    }
}
