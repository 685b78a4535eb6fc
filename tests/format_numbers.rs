use decintl::{
    CompactDisplay, DecimalFormat, DecimalValue, FormatOptions, Notation, RoundingMode,
    SignDisplay, Style, TrailingZeroDisplay, UseGrouping,
};

fn value(text: &str) -> DecimalValue {
    text.parse().unwrap()
}

fn en(options: FormatOptions) -> DecimalFormat {
    DecimalFormat::new(&["en-US"], options).unwrap()
}

// ============================================================================
// Standard notation
// ============================================================================

#[test]
fn test_standard_defaults() {
    let fmt = en(FormatOptions::default());

    assert_eq!(fmt.format(value("0")).unwrap(), "0");
    assert_eq!(fmt.format(value("1")).unwrap(), "1");
    assert_eq!(fmt.format(value("-1")).unwrap(), "-1");
    assert_eq!(fmt.format(value("0.25")).unwrap(), "0.25");
    assert_eq!(fmt.format(value("1000.5")).unwrap(), "1,000.5");
    assert_eq!(fmt.format(value("1234567")).unwrap(), "1,234,567");
}

#[test]
fn test_double_inputs_match_their_exact_value() {
    let fmt = en(FormatOptions::default());

    assert_eq!(fmt.format(0.0).unwrap(), "0");
    assert_eq!(fmt.format(-0.0).unwrap(), "-0");
    assert_eq!(fmt.format(1.0).unwrap(), "1");
    assert_eq!(fmt.format(-1.0).unwrap(), "-1");
    assert_eq!(fmt.format(1000.5).unwrap(), "1,000.5");
}

#[test]
fn test_default_maximum_fraction_rounds() {
    // Three fraction digits by default, half-even at the boundary.
    let fmt = en(FormatOptions::default());

    assert_eq!(
        fmt.format(value("0.8414709848078965066525023216")).unwrap(),
        "0.841"
    );
    assert_eq!(fmt.format(value("0.0004")).unwrap(), "0");
}

#[test]
fn test_from_f64_carries_binary_expansion() {
    // 0.1 as a double is 0.1000000000000000055511151231257827…; converting
    // from f64 keeps that exact binary value. Parse from a string when the
    // decimal literal is what you mean.
    let fmt = en(FormatOptions {
        maximum_fraction_digits: Some(30),
        ..Default::default()
    });

    assert_eq!(
        fmt.format(0.1_f64).unwrap(),
        "0.100000000000000005551115123126"
    );
    assert_eq!(fmt.format(value("0.1")).unwrap(), "0.1");
}

// ============================================================================
// Digit minimums past the native ceiling
// ============================================================================

#[test]
fn test_minimum_integer_digit_expansion() {
    let fmt = en(FormatOptions {
        minimum_integer_digits: Some(30),
        ..Default::default()
    });

    assert_eq!(
        fmt.format(value("1")).unwrap(),
        "000,000,000,000,000,000,000,000,000,001"
    );
    assert_eq!(
        fmt.format(value("-1")).unwrap(),
        "-000,000,000,000,000,000,000,000,000,001"
    );
}

#[test]
fn test_minimum_integer_digits_below_one() {
    let fmt = en(FormatOptions {
        minimum_integer_digits: Some(25),
        ..Default::default()
    });

    assert_eq!(
        fmt.format(value("0.5")).unwrap(),
        "0,000,000,000,000,000,000,000,000.5"
    );
}

#[test]
fn test_minimum_fraction_digit_padding() {
    let fmt = en(FormatOptions {
        minimum_fraction_digits: Some(25),
        ..Default::default()
    });

    let expected = format!("0.1{}", "0".repeat(24));
    assert_eq!(fmt.format(value("0.1")).unwrap(), expected);

    let zeros = format!("7.{}", "0".repeat(25));
    assert_eq!(fmt.format(value("7")).unwrap(), zeros);
}

#[test]
fn test_long_fraction_is_deterministic() {
    let fmt = en(FormatOptions {
        maximum_fraction_digits: Some(30),
        ..Default::default()
    });
    let thirds = format!("0.{}", "3".repeat(150));

    let first = fmt.format(value(&thirds)).unwrap();
    let second = fmt.format(value(&thirds)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, format!("0.{}", "3".repeat(30)));
}

// ============================================================================
// Rounding modes
// ============================================================================

#[test]
fn test_rounding_mode_at_boundary_digit() {
    // 25 exact digits cut to 24; the dropped digit is an exact 5.
    let input = "0.1234567890123456789012345";
    let options = |mode| FormatOptions {
        maximum_fraction_digits: Some(24),
        rounding: Some(mode),
        ..Default::default()
    };

    // Half-even keeps the even boundary digit.
    let fmt = en(options(RoundingMode::HalfEven));
    assert_eq!(
        fmt.format(value(input)).unwrap(),
        "0.123456789012345678901234"
    );

    let fmt = en(options(RoundingMode::HalfUp));
    assert_eq!(
        fmt.format(value(input)).unwrap(),
        "0.123456789012345678901235"
    );

    let fmt = en(options(RoundingMode::Down));
    assert_eq!(
        fmt.format(value(input)).unwrap(),
        "0.123456789012345678901234"
    );
}

#[test]
fn test_rounding_carry_into_integer() {
    // Rounding up carries where the half-expand double stayed below one.
    let up = en(FormatOptions {
        maximum_fraction_digits: Some(4),
        rounding: Some(RoundingMode::Up),
        ..Default::default()
    });
    assert_eq!(up.format(value("0.99991")).unwrap(), "1");

    // The opposite disagreement: truncation must hold the value down even
    // if the double rounded up.
    let down = en(FormatOptions {
        maximum_fraction_digits: Some(4),
        rounding: Some(RoundingMode::Down),
        ..Default::default()
    });
    assert_eq!(down.format(value("0.99995")).unwrap(), "0.9999");

    // A carry that crosses a grouping boundary.
    let grouped = en(FormatOptions {
        maximum_fraction_digits: Some(2),
        rounding: Some(RoundingMode::Up),
        ..Default::default()
    });
    assert_eq!(grouped.format(value("999.999")).unwrap(), "1,000");
}

// ============================================================================
// Significant digits
// ============================================================================

#[test]
fn test_maximum_significant_digits() {
    let fmt = en(FormatOptions {
        maximum_significant_digits: Some(2),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("0.000123456")).unwrap(), "0.00012");
    assert_eq!(fmt.format(value("1.987")).unwrap(), "2");
}

#[test]
fn test_minimum_significant_digits_pad() {
    let fmt = en(FormatOptions {
        minimum_significant_digits: Some(6),
        ..Default::default()
    });
    assert_eq!(fmt.format(value("1.5")).unwrap(), "1.50000");

    // Past the native ceiling the engine takes over the padding.
    let fmt = en(FormatOptions {
        minimum_significant_digits: Some(30),
        ..Default::default()
    });
    assert_eq!(
        fmt.format(value("1.5")).unwrap(),
        format!("1.5{}", "0".repeat(28))
    );
}

#[test]
fn test_significant_digits_take_precedence() {
    // Both families supplied: the significant family wins.
    let fmt = en(FormatOptions {
        maximum_significant_digits: Some(2),
        maximum_fraction_digits: Some(5),
        minimum_fraction_digits: Some(5),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("0.123456")).unwrap(), "0.12");
}

// ============================================================================
// Sign display
// ============================================================================

#[test]
fn test_sign_display_policies() {
    let with_sign = |sign| {
        en(FormatOptions {
            sign_display: Some(sign),
            ..Default::default()
        })
    };

    let always = with_sign(SignDisplay::Always);
    assert_eq!(always.format(value("1")).unwrap(), "+1");
    assert_eq!(always.format(value("0")).unwrap(), "+0");
    assert_eq!(always.format(value("-1")).unwrap(), "-1");

    let except_zero = with_sign(SignDisplay::ExceptZero);
    assert_eq!(except_zero.format(value("1")).unwrap(), "+1");
    assert_eq!(except_zero.format(-0.0).unwrap(), "0");

    let negative = with_sign(SignDisplay::Negative);
    assert_eq!(negative.format(-0.0).unwrap(), "0");
    assert_eq!(negative.format(value("-1")).unwrap(), "-1");

    let never = with_sign(SignDisplay::Never);
    assert_eq!(never.format(value("-1")).unwrap(), "1");
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_use_grouping() {
    let never = en(FormatOptions {
        use_grouping: Some(UseGrouping::Never),
        ..Default::default()
    });
    assert_eq!(never.format(value("1234567.5")).unwrap(), "1234567.5");

    let min2 = en(FormatOptions {
        use_grouping: Some(UseGrouping::Min2),
        ..Default::default()
    });
    assert_eq!(min2.format(value("1000")).unwrap(), "1000");
    assert_eq!(min2.format(value("10000")).unwrap(), "10,000");
}

// ============================================================================
// Trailing zero display
// ============================================================================

#[test]
fn test_trailing_zero_display() {
    let with_policy = |policy| {
        en(FormatOptions {
            minimum_fraction_digits: Some(2),
            maximum_fraction_digits: Some(2),
            trailing_zero_display: Some(policy),
            ..Default::default()
        })
    };

    let auto = with_policy(TrailingZeroDisplay::Auto);
    assert_eq!(auto.format(value("1")).unwrap(), "1.00");

    let strip = with_policy(TrailingZeroDisplay::StripIfInteger);
    assert_eq!(strip.format(value("1")).unwrap(), "1");
    assert_eq!(strip.format(value("1.5")).unwrap(), "1.50");

    let less = with_policy(TrailingZeroDisplay::LessPrecision);
    assert_eq!(less.format(value("1")).unwrap(), "1");
}

// ============================================================================
// Styles
// ============================================================================

#[test]
fn test_percent_style() {
    let fmt = en(FormatOptions {
        style: Style::Percent,
        ..Default::default()
    });
    assert_eq!(fmt.format(value("0.5")).unwrap(), "50%");

    // The percent shift happens on the exact value, not the approximation.
    let fmt = en(FormatOptions {
        style: Style::Percent,
        maximum_fraction_digits: Some(25),
        ..Default::default()
    });
    assert_eq!(
        fmt.format(value("0.123456789012345678901234567")).unwrap(),
        "12.3456789012345678901234567%"
    );
}

#[test]
fn test_currency_style() {
    let fmt = en(FormatOptions {
        style: Style::Currency,
        currency: Some("USD".to_string()),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("1234.5")).unwrap(), "$1,234.50");
    assert_eq!(fmt.format(value("-1234.5")).unwrap(), "-$1,234.50");
}

#[test]
fn test_accounting_currency() {
    use decintl::CurrencySign;

    let fmt = en(FormatOptions {
        style: Style::Currency,
        currency: Some("USD".to_string()),
        currency_sign: Some(CurrencySign::Accounting),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("1234.5")).unwrap(), "$1,234.50");
    assert_eq!(fmt.format(value("-1234.5")).unwrap(), "($1,234.50)");
}

#[test]
fn test_unit_style() {
    let fmt = en(FormatOptions {
        style: Style::Unit,
        unit: Some("kilometer-per-hour".to_string()),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("100")).unwrap(), "100 km/h");
}

// ============================================================================
// Scientific and engineering notation
// ============================================================================

#[test]
fn test_scientific_notation() {
    let fmt = en(FormatOptions {
        notation: Notation::Scientific,
        maximum_fraction_digits: Some(4),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("1234.5")).unwrap(), "1.2345E3");
    assert_eq!(fmt.format(value("0.00012345")).unwrap(), "1.2345E-4");
}

#[test]
fn test_scientific_full_precision_mantissa() {
    let fmt = en(FormatOptions {
        notation: Notation::Scientific,
        maximum_fraction_digits: Some(40),
        ..Default::default()
    });

    assert_eq!(
        fmt.format(value("123456.789012345678901234567890123456"))
            .unwrap(),
        "1.23456789012345678901234567890123456E5"
    );
}

#[test]
fn test_engineering_notation() {
    let fmt = en(FormatOptions {
        notation: Notation::Engineering,
        maximum_fraction_digits: Some(4),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("123456")).unwrap(), "123.456E3");
}

// ============================================================================
// Compact notation
// ============================================================================

#[test]
fn test_compact_notation() {
    let fmt = en(FormatOptions {
        notation: Notation::Compact,
        ..Default::default()
    });

    assert_eq!(fmt.format(value("999")).unwrap(), "999");
    assert_eq!(fmt.format(value("123456")).unwrap(), "123K");
    assert_eq!(fmt.format(value("1000000")).unwrap(), "1M");
    assert_eq!(fmt.format(value("1234567")).unwrap(), "1.2M");
}

#[test]
fn test_compact_long() {
    let fmt = en(FormatOptions {
        notation: Notation::Compact,
        compact_display: Some(CompactDisplay::Long),
        ..Default::default()
    });

    assert_eq!(fmt.format(value("1500000")).unwrap(), "1.5 million");
}

// ============================================================================
// Non-finite values
// ============================================================================

#[test]
fn test_non_finite_short_circuit() {
    // Digit requirements are irrelevant for NaN and infinities.
    let fmt = en(FormatOptions {
        minimum_fraction_digits: Some(50),
        ..Default::default()
    });

    assert_eq!(fmt.format(f64::NAN).unwrap(), "NaN");
    assert_eq!(fmt.format(f64::INFINITY).unwrap(), "\u{221E}");
    assert_eq!(fmt.format(f64::NEG_INFINITY).unwrap(), "-\u{221E}");
}

#[test]
fn test_nan_and_infinity_parse() {
    assert!(value("NaN").is_nan());
    assert!(!value("Infinity").is_finite());
    assert!(!value("-Infinity").is_finite());
}
