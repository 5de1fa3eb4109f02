use serde::Serialize;

/// Names that qualify for the special-offer banner.
pub const SPECIAL_OFFER_NAMES: [&str; 2] = ["Nandos", "McDonalds"];

/// Rate applied to any non-empty name missing from [`RATE_TABLE`].
pub const DEFAULT_RATE: f64 = 20.0;

const RATE_TABLE: &[(&str, f64)] = &[("Nandos", 10.0), ("McDonalds", 15.0)];

/// Looks up the base rate for a business. Matching is exact and case-sensitive.
pub fn resolve_business_rate(business_name: Option<&str>) -> Option<f64> {
    let name = business_name.filter(|name| !name.is_empty())?;

    let rate = RATE_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RATE);

    Some(rate)
}

pub fn has_special_rate(business_name: Option<&str>) -> bool {
    business_name
        .map(|name| SPECIAL_OFFER_NAMES.contains(&name))
        .unwrap_or(false)
}

/// Applies a percentage discount to the base rate.
///
/// A zero (or NaN) operand means "no discount": the base rate passes through
/// untouched, including when it is absent. Discounts are not clamped, so values
/// above 100 produce negative rates.
pub fn apply_discount(business_rate: Option<f64>, discount_rate: Option<f64>) -> Option<f64> {
    match (business_rate, discount_rate) {
        (Some(rate), Some(discount)) if is_applicable(rate) && is_applicable(discount) => {
            Some(rate - (rate * discount) / 100.0)
        }
        _ => business_rate,
    }
}

fn is_applicable(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Every value derived from one set of component inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RateQuote {
    pub business_name: Option<String>,
    pub discount_rate: Option<f64>,
    pub business_rate: Option<f64>,
    pub has_special_rate: bool,
    pub final_rate: Option<f64>,
}

impl RateQuote {
    pub fn new(business_name: Option<&str>, discount_rate: Option<f64>) -> Self {
        let business_rate = resolve_business_rate(business_name);

        Self {
            business_name: business_name.map(str::to_string),
            discount_rate,
            business_rate,
            has_special_rate: has_special_rate(business_name),
            final_rate: apply_discount(business_rate, discount_rate),
        }
    }

    pub fn business_name_display(&self) -> &str {
        self.business_name.as_deref().unwrap_or_default()
    }

    pub fn business_rate_display(&self) -> String {
        format_rate(self.business_rate)
    }

    pub fn final_rate_display(&self) -> String {
        format_rate(self.final_rate)
    }
}

/// Shortest round-trip form, so `10.0` renders as `10` and `13.5` stays `13.5`.
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map(|value| value.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_known_and_fallback_rates() {
        assert_eq!(resolve_business_rate(Some("Nandos")), Some(10.0));
        assert_eq!(resolve_business_rate(Some("McDonalds")), Some(15.0));
        assert_eq!(resolve_business_rate(Some("Some Other Business")), Some(20.0));
        assert_eq!(resolve_business_rate(Some("nandos")), Some(DEFAULT_RATE));
    }

    #[test]
    fn absent_or_empty_name_has_no_rate() {
        assert_eq!(resolve_business_rate(None), None);
        assert_eq!(resolve_business_rate(Some("")), None);
    }

    #[test]
    fn special_rate_is_exact_match_only() {
        assert!(has_special_rate(Some("Nandos")));
        assert!(has_special_rate(Some("McDonalds")));
        assert!(!has_special_rate(Some("Mcdonalds")));
        assert!(!has_special_rate(Some(" Nandos")));
        assert!(!has_special_rate(Some("")));
        assert!(!has_special_rate(None));
    }

    #[test]
    fn zero_discount_is_ignored() {
        assert_eq!(apply_discount(Some(10.0), Some(0.0)), Some(10.0));
        assert_eq!(apply_discount(Some(10.0), None), Some(10.0));
        assert_eq!(apply_discount(None, Some(10.0)), None);
        assert_eq!(apply_discount(Some(10.0), Some(f64::NAN)), Some(10.0));
    }

    #[test]
    fn discount_is_applied_without_rounding_or_clamping() {
        assert_eq!(apply_discount(Some(15.0), Some(10.0)), Some(13.5));
        assert_eq!(apply_discount(Some(10.0), Some(100.0)), Some(0.0));
        assert_eq!(apply_discount(Some(10.0), Some(150.0)), Some(-5.0));
        assert_eq!(apply_discount(Some(20.0), Some(-10.0)), Some(22.0));
    }

    #[test]
    fn quote_scenarios() {
        let cases: [(Option<&str>, Option<f64>, Option<f64>, Option<f64>, bool); 10] = [
            (None, None, None, None, false),
            (None, Some(10.0), None, None, false),
            (Some("Nandos"), None, Some(10.0), Some(10.0), true),
            (Some("Nandos"), Some(0.0), Some(10.0), Some(10.0), true),
            (Some("Nandos"), Some(50.0), Some(10.0), Some(5.0), true),
            (Some("Nandos"), Some(100.0), Some(10.0), Some(0.0), true),
            (Some("McDonalds"), Some(10.0), Some(15.0), Some(13.5), true),
            (Some("McDonalds"), Some(20.0), Some(15.0), Some(12.0), true),
            (Some("Some Other Business"), Some(10.0), Some(20.0), Some(18.0), false),
            (Some("Another Business"), Some(25.0), Some(20.0), Some(15.0), false),
        ];

        for (name, discount, rate, final_rate, special) in cases {
            let quote = RateQuote::new(name, discount);
            assert_eq!(quote.business_rate, rate, "rate for {name:?}/{discount:?}");
            assert_eq!(quote.final_rate, final_rate, "final for {name:?}/{discount:?}");
            assert_eq!(quote.has_special_rate, special, "special for {name:?}");
        }
    }

    #[test]
    fn rates_display_without_trailing_fraction() {
        assert_eq!(format_rate(Some(10.0)), "10");
        assert_eq!(format_rate(Some(13.5)), "13.5");
        assert_eq!(format_rate(Some(0.0)), "0");
        assert_eq!(format_rate(None), "");

        let quote = RateQuote::new(None, Some(10.0));
        assert_eq!(quote.business_name_display(), "");
        assert_eq!(quote.business_rate_display(), "");
        assert_eq!(quote.final_rate_display(), "");
    }

    proptest! {
        #[test]
        fn rate_defined_iff_name_non_empty(name in ".*") {
            prop_assert_eq!(resolve_business_rate(Some(&name)).is_some(), !name.is_empty());
        }

        #[test]
        fn unknown_names_fall_back_to_default(name in "[a-zA-Z ]{1,24}") {
            prop_assume!(!SPECIAL_OFFER_NAMES.contains(&name.as_str()));
            prop_assert_eq!(resolve_business_rate(Some(&name)), Some(DEFAULT_RATE));
            prop_assert!(!has_special_rate(Some(&name)));
        }

        #[test]
        fn final_rate_follows_discount_formula(
            name in prop::sample::select(vec!["Nandos", "McDonalds", "Corner Shop"]),
            discount in -200.0..200.0_f64,
        ) {
            let quote = RateQuote::new(Some(name), Some(discount));
            let rate = quote.business_rate.unwrap();
            let expected = if discount == 0.0 { rate } else { rate - (rate * discount) / 100.0 };
            prop_assert_eq!(quote.final_rate, Some(expected));
        }

        #[test]
        fn eligibility_ignores_discount(name in ".*", discount in proptest::option::of(-100.0..300.0_f64)) {
            let quote = RateQuote::new(Some(&name), discount);
            prop_assert_eq!(quote.has_special_rate, has_special_rate(Some(&name)));
            prop_assert_eq!(quote.final_rate.is_some(), quote.business_rate.is_some());
        }
    }
}
