//! Input model.
//!
//! Records arrive as arbitrary JSON. They are narrowed once, at the pipeline
//! boundary, into [`Input`] so the shape stage can match on variants instead
//! of probing JSON types.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// Field of a record that carries the classified payload.
pub const VALUE_FIELD: &str = "value";

/// A record as supplied by callers.
pub type Record = Map<String, Value>;

/// Sign and parity of a JSON integer of any magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer {
    sign: Ordering,
    even: bool,
}

impl Integer {
    /// Parse a decimal integer literal such as `-0` or `18446744073709551616`.
    ///
    /// Fractions and exponents are not integers.
    pub fn from_decimal(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let sign = if digits.bytes().all(|b| b == b'0') {
            Ordering::Equal
        } else if negative {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        let even = digits.bytes().last().is_some_and(|b| (b - b'0') % 2 == 0);

        Some(Self { sign, even })
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Ordering::Greater
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Ordering::Equal
    }

    pub fn is_even(&self) -> bool {
        self.even
    }
}

impl From<i128> for Integer {
    fn from(n: i128) -> Self {
        Self {
            sign: n.cmp(&0),
            even: n % 2 == 0,
        }
    }
}

/// The `value` field, reduced to the variants the shape stage distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// JSON integers of any size, and booleans as 0/1.
    Integer(Integer),
    Text(&'a str),
    /// Absent, null, float, array or object.
    Other,
}

impl<'a> Payload<'a> {
    pub fn from_json(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .map(|v| Integer::from(i128::from(v)))
                // wider literals only survive as text
                .or_else(|| Integer::from_decimal(&n.to_string()))
                .map(Payload::Integer)
                .unwrap_or(Payload::Other),
            Some(Value::Bool(b)) => Payload::Integer(Integer::from(i128::from(*b))),
            Some(Value::String(s)) => Payload::Text(s.as_str()),
            _ => Payload::Other,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Integer(_) => "integer",
            Payload::Text(_) => "text",
            Payload::Other => "other",
        }
    }
}

/// Pipeline input after boundary narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// A key/value mapping, carrying its `value` field.
    Record(Payload<'a>),
    /// Anything that is not a mapping.
    NotARecord,
}

impl<'a> Input<'a> {
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::from_record(map),
            _ => Input::NotARecord,
        }
    }

    pub fn from_record(record: &'a Record) -> Self {
        Input::Record(Payload::from_json(record.get(VALUE_FIELD)))
    }
}

/// Wrap a bare value as `{"value": value}`.
pub fn wrap_value(value: Value) -> Value {
    let mut record = Record::new();
    record.insert(VALUE_FIELD.to_string(), value);
    Value::Object(record)
}
