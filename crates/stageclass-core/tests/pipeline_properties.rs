use proptest::prelude::*;
use serde_json::{json, Value};

use stageclass_core::stage::{is_all_lowercase, is_all_uppercase, Stage};
use stageclass_core::{classify, Label, Pipeline};

// Arbitrary JSON up to a small depth
fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        ".{0,12}".prop_map(Value::String),
        wide_integer_literal().prop_map(|text| parse_json(&text)),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn record_with(value: Value) -> Value {
    json!({ "value": value })
}

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

// Integer literals wider than u64, optionally negative
fn wide_integer_literal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{20,40}"
}

// Titlecase (Lt) characters
fn titlecase_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['ǅ', 'ǈ', 'ǋ', 'ǲ', 'ᾈ', 'ᾙ', 'ῼ'])
}

// Lowercase letters outside Ll (Other_Lowercase)
fn other_lowercase_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['ª', 'º', 'ʰ', 'ˠ', 'ᵃ'])
}

proptest! {
    #[test]
    fn prop_classify_is_total_and_final(input in arbitrary_json()) {
        let label = classify(&input);
        prop_assert_eq!(label.stage(), Stage::Confirm);
        prop_assert!(Label::ALL.contains(&label));
    }

    #[test]
    fn prop_classify_is_deterministic(input in arbitrary_json()) {
        prop_assert_eq!(classify(&input), classify(&input.clone()));
    }

    #[test]
    fn prop_trace_last_matches_classify(input in arbitrary_json()) {
        let trace = Pipeline::default().trace(&input);
        prop_assert_eq!(trace.last(), classify(&input));
        prop_assert_eq!(trace.steps().len(), 3);
    }

    #[test]
    fn prop_positive_parity(n in 1i64..=i64::MAX) {
        let expected = if n % 2 == 0 {
            Label::FINAL_EVEN_NUMBER
        } else {
            Label::FINAL_ODD_NUMBER
        };
        prop_assert_eq!(classify(&record_with(json!(n))), expected);
    }

    #[test]
    fn prop_non_positive_is_uncategorized(n in i64::MIN..=0) {
        prop_assert_eq!(
            classify(&record_with(json!(n))),
            Label::FINAL_UNCATEGORIZED_RESULT
        );
    }

    #[test]
    fn prop_non_empty_strings_confirm_as_string(s in ".{1,24}") {
        prop_assert_eq!(classify(&record_with(json!(s))), Label::FINAL_STRING);
    }

    #[test]
    fn prop_non_mappings_are_invalid(items in prop::collection::vec(any::<i32>(), 0..6)) {
        let input = json!(items);
        prop_assert_eq!(
            Pipeline::through(Stage::Shape).classify(&input),
            Label::INVALID_DATA
        );
    }

    #[test]
    fn prop_uncased_text_is_neither_upper_nor_lower(s in "[0-9 !?.,_-]{0,16}") {
        prop_assert!(!is_all_uppercase(&s));
        prop_assert!(!is_all_lowercase(&s));
    }

    #[test]
    fn prop_case_fold_ignores_non_alphabetic(
        letters in "[A-Z]{1,8}",
        noise in "[0-9 !?]{0,8}"
    ) {
        let mixed = format!("{letters}{noise}");
        prop_assert!(is_all_uppercase(&mixed));
        prop_assert!(is_all_lowercase(&mixed.to_lowercase()));
    }

    #[test]
    fn prop_long_uppercase_shape(s in "[A-Z]{6,20}") {
        prop_assert_eq!(
            Pipeline::through(Stage::Shape).classify(&record_with(json!(s))),
            Label::LONG_UPPERCASE_STRING
        );
    }

    #[test]
    fn prop_wide_integers_keep_sign_and_parity(text in wide_integer_literal()) {
        let input = parse_json(&format!(r#"{{"value": {text}}}"#));
        let expected = if text.starts_with('-') {
            Label::FINAL_UNCATEGORIZED_RESULT
        } else if (text.as_bytes()[text.len() - 1] - b'0') % 2 == 0 {
            Label::FINAL_EVEN_NUMBER
        } else {
            Label::FINAL_ODD_NUMBER
        };
        prop_assert_eq!(classify(&input), expected);
    }

    #[test]
    fn prop_titlecase_blocks_case_labels(
        lower in "[a-z]{0,8}",
        upper in "[A-Z]{0,8}",
        title in titlecase_char()
    ) {
        let with_lower = format!("{title}{lower}");
        let with_upper = format!("{upper}{title}");
        prop_assert!(!is_all_lowercase(&with_lower));
        prop_assert!(!is_all_uppercase(&with_upper));

        let shape = Pipeline::through(Stage::Shape).classify(&record_with(json!(with_lower)));
        prop_assert!(shape == Label::SHORT_STRING || shape == Label::LONG_STRING);
        let shape = Pipeline::through(Stage::Shape).classify(&record_with(json!(with_upper)));
        prop_assert!(shape == Label::SHORT_STRING || shape == Label::LONG_STRING);
    }

    #[test]
    fn prop_other_lowercase_counts_as_lower(
        lower in "[a-z]{0,3}",
        extra in other_lowercase_char()
    ) {
        let s = format!("{extra}{lower}");
        prop_assert!(is_all_lowercase(&s));
        prop_assert_eq!(
            Pipeline::through(Stage::Shape).classify(&record_with(json!(s))),
            Label::SHORT_LOWERCASE_STRING
        );
    }
}
