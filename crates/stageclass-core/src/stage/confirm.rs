//! Confirm Stage
//!
//! Categorizeラベルを最終ラベル "FINAL CHECK: ..." へ変換する第3ステージ。

use serde_json::Value;

use crate::label::Label;

/// 生のJSON値を確認（文字列以外は "FINAL CHECK: UNHANDLED RESULT TYPE"）
pub fn confirm_value(value: &Value) -> Label {
    match value.as_str() {
        Some(text) => confirm(text),
        None => Label::FINAL_UNHANDLED_RESULT_TYPE,
    }
}

/// 前段ラベルを確認
pub fn confirm(result: &str) -> Label {
    if !result.contains("CONFIRMED") {
        return Label::FINAL_UNCATEGORIZED_RESULT;
    }

    if result.contains("EVEN") {
        Label::FINAL_EVEN_NUMBER
    } else if result.contains("ODD") {
        Label::FINAL_ODD_NUMBER
    } else if result.contains("STRING") {
        Label::FINAL_STRING
    } else {
        Label::FINAL_UNEXPECTED_CONFIRMATION
    }
}
