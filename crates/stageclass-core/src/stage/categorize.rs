//! Categorize Stage
//!
//! Shapeラベルを "CONFIRMED ..." またはエラーカテゴリへ分類する第2ステージ。

use serde_json::Value;

use crate::label::Label;

/// 生のJSON値を分類（文字列以外は "UNHANDLED RESULT TYPE"）
pub fn categorize_value(value: &Value) -> Label {
    match value.as_str() {
        Some(text) => categorize(text),
        None => Label::UNHANDLED_RESULT_TYPE,
    }
}

/// 前段ラベルを分類
pub fn categorize(result: &str) -> Label {
    if result.contains("ERROR") {
        // 現行のShapeラベルはいずれも "ERROR" を含まないため到達しない
        return categorize_error(result);
    }

    if result.contains("NUMBER") {
        categorize_number(result)
    } else if result.contains("STRING") {
        categorize_string(result)
    } else {
        Label::UNKNOWN_CATEGORY
    }
}

fn categorize_error(result: &str) -> Label {
    if result.contains("MISSING") {
        Label::CRITICAL_VALUE_MISSING
    } else if result.contains("INVALID") {
        Label::CRITICAL_DATA_INVALID
    } else {
        Label::UNKNOWN_CRITICAL_ERROR
    }
}

fn categorize_number(result: &str) -> Label {
    if result.contains("EVEN") {
        Label::CONFIRMED_EVEN
    } else if result.contains("ODD") {
        Label::CONFIRMED_ODD
    } else if result.contains("ZERO") {
        Label::CONFIRMED_ZERO
    } else {
        Label::UNEXPECTED_NUMBER_CASE
    }
}

fn categorize_string(result: &str) -> Label {
    if result.contains("LONG") {
        Label::LONG_CONFIRMED_STRING
    } else if result.contains("SHORT") {
        Label::SHORT_CONFIRMED_STRING
    } else {
        Label::GENERAL_CONFIRMED_STRING
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(categorize("POSITIVE EVEN NUMBER"), Label::CONFIRMED_EVEN);
        assert_eq!(categorize("POSITIVE ODD NUMBER"), Label::CONFIRMED_ODD);
        assert_eq!(categorize("NEGATIVE NUMBER"), Label::UNEXPECTED_NUMBER_CASE);
        assert_eq!(categorize("ZERO NUMBER"), Label::CONFIRMED_ZERO);
    }

    #[test]
    fn test_bare_zero_is_not_a_number_label() {
        assert_eq!(categorize("ZERO"), Label::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_strings() {
        assert_eq!(categorize("LONG STRING"), Label::LONG_CONFIRMED_STRING);
        assert_eq!(categorize("LONG UPPERCASE STRING"), Label::LONG_CONFIRMED_STRING);
        assert_eq!(categorize("SHORT STRING"), Label::SHORT_CONFIRMED_STRING);
        assert_eq!(categorize("EMPTY STRING"), Label::GENERAL_CONFIRMED_STRING);
    }

    #[test]
    fn test_uncategorized() {
        assert_eq!(categorize("UNKNOWN VALUE TYPE"), Label::UNKNOWN_CATEGORY);
        assert_eq!(categorize("INVALID DATA"), Label::UNKNOWN_CATEGORY);
        assert_eq!(categorize(""), Label::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_error_markers() {
        assert_eq!(categorize("ERROR: MISSING VALUE"), Label::CRITICAL_VALUE_MISSING);
        assert_eq!(categorize("ERROR: INVALID"), Label::CRITICAL_DATA_INVALID);
        assert_eq!(categorize("ERROR"), Label::UNKNOWN_CRITICAL_ERROR);
        // error markers win over category keywords
        assert_eq!(categorize("NUMBER ERROR"), Label::UNKNOWN_CRITICAL_ERROR);
    }

    #[test]
    fn test_number_beats_string() {
        assert_eq!(categorize("NUMBER STRING ODD"), Label::CONFIRMED_ODD);
    }

    #[test]
    fn test_non_text_values() {
        assert_eq!(categorize_value(&json!(1)), Label::UNHANDLED_RESULT_TYPE);
        assert_eq!(categorize_value(&json!(["SHORT STRING"])), Label::UNHANDLED_RESULT_TYPE);
        assert_eq!(categorize_value(&json!("SHORT STRING")), Label::SHORT_CONFIRMED_STRING);
    }
}
