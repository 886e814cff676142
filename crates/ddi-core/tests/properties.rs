//! Property tests for category normalization and record building.

use ddi_core::{build_variable, normalize_categories};
use ddi_ingest::{RawCategory, RawVariable};
use proptest::prelude::*;

const CASES: u32 = 128;

fn numeric_code() -> impl Strategy<Value = String> {
    prop_oneof![
        (-500i64..500).prop_map(|n| n.to_string()),
        (-500i64..500).prop_map(|n| format!(" {n} ")),
        (-50i64..50, 0u8..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ]
}

fn raw_category() -> impl Strategy<Value = RawCategory> {
    (
        numeric_code(),
        proptest::option::of("[A-Za-z ]{0,8}"),
        proptest::option::of(prop_oneof!["[0-9]{1,4}", "[a-z]{1,4}"]),
        proptest::option::of(prop_oneof![Just("true"), Just("TRUE"), Just("false")]),
    )
        .prop_map(|(value, label, frequency, missing)| RawCategory {
            value: Some(value),
            label,
            frequency,
            missing: missing.map(str::to_string),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn sequences_are_parallel_and_sorted(raw in prop::collection::vec(raw_category(), 0..20)) {
        let set = normalize_categories(&raw).expect("numeric codes");
        prop_assert_eq!(set.len(), raw.len());
        prop_assert_eq!(set.labels().len(), set.len());
        prop_assert_eq!(set.missings().len(), set.len());
        prop_assert_eq!(set.frequencies().len(), set.len());

        let numbers: Vec<f64> = set
            .values()
            .iter()
            .map(|value| value.parse::<f64>().expect("numeric value"))
            .collect();
        for pair in numbers.windows(2) {
            prop_assert!(pair[0] <= pair[1], "unsorted values: {:?}", set.values());
        }
    }

    #[test]
    fn integer_without_label_uses_value(number in -10_000i64..10_000) {
        let raw = vec![RawCategory {
            value: Some(number.to_string()),
            ..RawCategory::default()
        }];
        let set = normalize_categories(&raw).expect("numeric code");
        prop_assert_eq!(set.labels()[0].clone(), number.to_string());
    }

    #[test]
    fn unparsable_frequency_is_zero(frequency in "[a-z]{1,6}|-[0-9]{1,3}|[0-9]+\\.[0-9]") {
        let raw = vec![RawCategory {
            value: Some("1".to_string()),
            frequency: Some(frequency),
            ..RawCategory::default()
        }];
        let set = normalize_categories(&raw).expect("numeric code");
        prop_assert_eq!(set.frequencies()[0], 0);
    }

    #[test]
    fn scale_is_cat_only_for_labeled_numeric(
        interval in proptest::option::of(prop_oneof![
            Just("labeled_numeric".to_string()),
            "[a-z_]{0,16}",
        ])
    ) {
        let raw = RawVariable {
            dataset: Some("persons".to_string()),
            id: Some("AGE".to_string()),
            interval: interval.clone(),
            ..RawVariable::default()
        };
        let variable = build_variable(&raw, "soep").expect("variable");
        let expected = if interval.as_deref() == Some("labeled_numeric") { "cat" } else { "" };
        prop_assert_eq!(variable.scale.as_str(), expected);
    }
}
