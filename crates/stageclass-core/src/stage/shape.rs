//! Shape Stage
//!
//! レコードの `value` を型と値で分類する第1ステージ。

use crate::label::Label;
use crate::record::{Input, Integer, Payload};

/// これより長い（文字数）文字列は "LONG" 扱い
pub const LONG_STRING_THRESHOLD: usize = 5;

/// 入力レコードを分類
pub fn classify_shape(input: Input<'_>) -> Label {
    let payload = match input {
        Input::NotARecord => return Label::INVALID_DATA,
        Input::Record(payload) => payload,
    };

    tracing::trace!(kind = payload.kind(), "shape payload");

    match payload {
        Payload::Integer(n) => classify_integer(n),
        Payload::Text(s) => classify_text(s),
        Payload::Other => Label::UNKNOWN_VALUE_TYPE,
    }
}

fn classify_integer(n: Integer) -> Label {
    if n.is_positive() {
        if n.is_even() {
            Label::POSITIVE_EVEN_NUMBER
        } else {
            Label::POSITIVE_ODD_NUMBER
        }
    } else if n.is_zero() {
        Label::ZERO
    } else {
        Label::NEGATIVE_NUMBER
    }
}

fn classify_text(s: &str) -> Label {
    if s.is_empty() {
        return Label::EMPTY_STRING;
    }

    if s.chars().count() > LONG_STRING_THRESHOLD {
        if is_all_uppercase(s) {
            Label::LONG_UPPERCASE_STRING
        } else {
            Label::LONG_STRING
        }
    } else if is_all_lowercase(s) {
        Label::SHORT_LOWERCASE_STRING
    } else {
        Label::SHORT_STRING
    }
}

/// タイトルケース文字（例: 'ǅ'）か
///
/// 大文字でも小文字でもないが、小文字化で変化する文字。
fn is_titlecase(c: char) -> bool {
    !c.is_uppercase() && !c.is_lowercase() && c.to_lowercase().ne(std::iter::once(c))
}

/// 大文字/小文字を持つ文字が1つ以上あり、すべて大文字か
///
/// 数字・空白・記号は無視する。タイトルケース文字を含む場合は偽。
pub fn is_all_uppercase(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}

/// 大文字/小文字を持つ文字が1つ以上あり、すべて小文字か
pub fn is_all_lowercase(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            return false;
        }
        cased |= c.is_lowercase();
    }
    cased
}
