use decintl::{
    DecimalFormat, FormatOptions, Notation, OptionsError, RoundingMode, Style,
};

const LIMIT: u32 = 1_000_000_000;

#[test]
fn test_digit_ceilings() {
    // 1-based families accept the limit itself, fraction digits one less.
    let ok = FormatOptions {
        minimum_integer_digits: Some(LIMIT),
        minimum_fraction_digits: Some(LIMIT - 1),
        maximum_fraction_digits: Some(LIMIT - 1),
        ..Default::default()
    };
    assert!(ok.validate().is_ok());

    let overflow = FormatOptions {
        minimum_integer_digits: Some(LIMIT + 1),
        ..Default::default()
    };
    match overflow.validate() {
        Err(OptionsError::DigitsOutOfRange { properties }) => {
            assert_eq!(properties, vec!["minimumIntegerDigits"]);
        }
        other => panic!("expected DigitsOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_all_offending_properties_reported() {
    let options = FormatOptions {
        minimum_fraction_digits: Some(LIMIT),
        maximum_fraction_digits: Some(LIMIT),
        ..Default::default()
    };
    let err = options.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "minimumFractionDigits, maximumFractionDigits values are out of range"
    );
}

#[test]
fn test_currency_requires_code() {
    let options = FormatOptions {
        style: Style::Currency,
        ..Default::default()
    };
    assert_eq!(
        DecimalFormat::new(&["en-US"], options).err(),
        Some(OptionsError::MissingCurrency)
    );
}

#[test]
fn test_unit_requires_identifier() {
    let options = FormatOptions {
        style: Style::Unit,
        ..Default::default()
    };
    assert_eq!(
        DecimalFormat::new(&["en-US"], options).err(),
        Some(OptionsError::MissingUnit)
    );
}

#[test]
fn test_unsupported_locale() {
    let result = DecimalFormat::new(&["not a locale tag!"], FormatOptions::default());
    assert!(matches!(
        result.err(),
        Some(OptionsError::UnsupportedLocale { .. })
    ));
}

#[test]
fn test_locale_fallback_order() {
    // The first well-formed tag wins.
    let fmt =
        DecimalFormat::new(&["not a locale tag!", "de", "en"], FormatOptions::default()).unwrap();
    assert_eq!(fmt.resolved_options().locale, "de");
}

#[test]
fn test_resolved_options_widen_past_clip() {
    // The oracle only ever sees clipped digit counts, but the resolution
    // reports what the caller asked for.
    let fmt = DecimalFormat::new(
        &["en-US"],
        FormatOptions {
            minimum_fraction_digits: Some(25),
            ..Default::default()
        },
    )
    .unwrap();
    let resolved = fmt.resolved_options();

    assert_eq!(resolved.locale, "en-US");
    assert_eq!(resolved.numbering_system, "latn");
    assert_eq!(resolved.minimum_fraction_digits, Some(25));
    // The fraction maximum is pushed up to the widened minimum.
    assert_eq!(resolved.maximum_fraction_digits, Some(25));
    assert_eq!(resolved.minimum_significant_digits, None);
    assert_eq!(resolved.rounding, RoundingMode::HalfEven);
}

#[test]
fn test_resolved_defaults() {
    let fmt = DecimalFormat::new(&["en-US"], FormatOptions::default()).unwrap();
    let resolved = fmt.resolved_options();

    assert_eq!(resolved.style, Style::Decimal);
    assert_eq!(resolved.notation, Notation::Standard);
    assert_eq!(resolved.minimum_integer_digits, 1);
    assert_eq!(resolved.minimum_fraction_digits, Some(0));
    assert_eq!(resolved.maximum_fraction_digits, Some(3));
}

#[test]
fn test_currency_digit_defaults() {
    let with_currency = |code: &str| {
        DecimalFormat::new(
            &["en-US"],
            FormatOptions {
                style: Style::Currency,
                currency: Some(code.to_string()),
                ..Default::default()
            },
        )
        .unwrap()
    };

    // Yen has no minor unit; dinar has three.
    assert_eq!(
        with_currency("JPY")
            .resolved_options()
            .maximum_fraction_digits,
        Some(0)
    );
    assert_eq!(
        with_currency("BHD")
            .resolved_options()
            .maximum_fraction_digits,
        Some(3)
    );
}

#[test]
fn test_compact_resolves_significant_family() {
    let fmt = DecimalFormat::new(
        &["en-US"],
        FormatOptions {
            notation: Notation::Compact,
            ..Default::default()
        },
    )
    .unwrap();
    let resolved = fmt.resolved_options();

    assert_eq!(resolved.minimum_significant_digits, Some(1));
    assert_eq!(resolved.maximum_significant_digits, Some(2));
    assert_eq!(resolved.minimum_fraction_digits, None);
}

#[test]
fn test_supported_locales_of_filters_malformed() {
    let supported =
        DecimalFormat::supported_locales_of(&["en-US", "definitely not!", "ja"], None);
    assert_eq!(supported, vec!["en-US".to_string(), "ja".to_string()]);
}

#[test]
fn test_supported_locales_list() {
    let locales = DecimalFormat::supported_locales();
    assert!(locales.contains(&"en-US"));
    assert!(locales.contains(&"hi"));
    assert!(locales.len() >= 50);
}
