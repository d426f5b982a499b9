//! Batch input and reporting.
//!
//! Records are read either as one JSON document (an array is the record
//! list, anything else a single record) or as JSON Lines.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{Result, StageclassError};
use crate::label::Label;
use crate::pipeline::Step;
use crate::stage::Stage;

/// One classified input.
#[derive(Debug, Clone, Serialize)]
pub struct Classified {
    pub index: usize,
    pub input: Value,
    pub label: Label,
    pub steps: Vec<Step>,
}

/// Results of running a batch through a pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub through: Stage,
    pub results: Vec<Classified>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Count of inputs per final label, in first-seen order.
    pub fn counts(&self) -> Vec<(Label, usize)> {
        let mut counts: Vec<(Label, usize)> = Vec::new();
        for result in &self.results {
            match counts.iter_mut().find(|(label, _)| *label == result.label) {
                Some((_, n)) => *n += 1,
                None => counts.push((result.label, 1)),
            }
        }
        counts
    }
}

/// Parse records from `text`.
///
/// `source_name` only appears in error messages.
pub fn parse_records(source_name: &str, text: &str) -> Result<Vec<Value>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(document) = serde_json::from_str::<Value>(text) {
        return Ok(match document {
            Value::Array(records) => records,
            record => vec![record],
        });
    }

    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| StageclassError::JsonParse {
            source_name: source_name.to_string(),
            line: i + 1,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Parse a single command-line argument as JSON.
///
/// With `lenient`, text that is not valid JSON is taken as a string.
pub fn parse_argument(arg: &str, lenient: bool) -> Result<Value> {
    match serde_json::from_str(arg) {
        Ok(value) => Ok(value),
        Err(_) if lenient => Ok(Value::String(arg.to_string())),
        Err(e) => Err(StageclassError::JsonParse {
            source_name: "argument".to_string(),
            line: 1,
            message: e.to_string(),
        }),
    }
}

/// Sample records covering the common shapes.
pub fn demo_records() -> Vec<Value> {
    vec![
        json!({"value": 5}),
        json!({"value": "HELLO"}),
        json!({"value": -2}),
        json!({"value": "hi"}),
        json!({}),
        json!({"other": 42}),
        json!({"value": null}),
    ]
}
