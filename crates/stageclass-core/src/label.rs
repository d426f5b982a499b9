//! Label catalogue.
//!
//! Every stage answers with one of a fixed set of labels, so a label is a
//! `&'static str` tagged with the stage that produced it. Routing between
//! stages only ever looks at the text via [`Label::contains`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::stage::Stage;

/// A label emitted by one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    stage: Stage,
    text: &'static str,
}

impl Label {
    const fn new(stage: Stage, text: &'static str) -> Self {
        Self { stage, text }
    }

    // ------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------
    pub const INVALID_DATA: Label = Label::new(Stage::Shape, "INVALID DATA");
    pub const POSITIVE_EVEN_NUMBER: Label = Label::new(Stage::Shape, "POSITIVE EVEN NUMBER");
    pub const POSITIVE_ODD_NUMBER: Label = Label::new(Stage::Shape, "POSITIVE ODD NUMBER");
    pub const ZERO: Label = Label::new(Stage::Shape, "ZERO");
    pub const NEGATIVE_NUMBER: Label = Label::new(Stage::Shape, "NEGATIVE NUMBER");
    pub const EMPTY_STRING: Label = Label::new(Stage::Shape, "EMPTY STRING");
    pub const LONG_UPPERCASE_STRING: Label = Label::new(Stage::Shape, "LONG UPPERCASE STRING");
    pub const LONG_STRING: Label = Label::new(Stage::Shape, "LONG STRING");
    pub const SHORT_LOWERCASE_STRING: Label = Label::new(Stage::Shape, "SHORT LOWERCASE STRING");
    pub const SHORT_STRING: Label = Label::new(Stage::Shape, "SHORT STRING");
    pub const UNKNOWN_VALUE_TYPE: Label = Label::new(Stage::Shape, "UNKNOWN VALUE TYPE");

    // ------------------------------------------------------------------
    // Categorize
    // ------------------------------------------------------------------
    pub const UNHANDLED_RESULT_TYPE: Label = Label::new(Stage::Categorize, "UNHANDLED RESULT TYPE");
    pub const CRITICAL_VALUE_MISSING: Label =
        Label::new(Stage::Categorize, "CRITICAL ERROR: VALUE MISSING");
    pub const CRITICAL_DATA_INVALID: Label =
        Label::new(Stage::Categorize, "CRITICAL ERROR: DATA INVALID");
    pub const UNKNOWN_CRITICAL_ERROR: Label =
        Label::new(Stage::Categorize, "UNKNOWN CRITICAL ERROR");
    pub const CONFIRMED_EVEN: Label = Label::new(Stage::Categorize, "CONFIRMED EVEN");
    pub const CONFIRMED_ODD: Label = Label::new(Stage::Categorize, "CONFIRMED ODD");
    pub const CONFIRMED_ZERO: Label = Label::new(Stage::Categorize, "CONFIRMED ZERO");
    pub const UNEXPECTED_NUMBER_CASE: Label =
        Label::new(Stage::Categorize, "UNEXPECTED NUMBER CASE");
    pub const LONG_CONFIRMED_STRING: Label = Label::new(Stage::Categorize, "LONG CONFIRMED STRING");
    pub const SHORT_CONFIRMED_STRING: Label =
        Label::new(Stage::Categorize, "SHORT CONFIRMED STRING");
    pub const GENERAL_CONFIRMED_STRING: Label =
        Label::new(Stage::Categorize, "GENERAL CONFIRMED STRING");
    pub const UNKNOWN_CATEGORY: Label = Label::new(Stage::Categorize, "UNKNOWN CATEGORY");

    // ------------------------------------------------------------------
    // Confirm
    // ------------------------------------------------------------------
    pub const FINAL_UNHANDLED_RESULT_TYPE: Label =
        Label::new(Stage::Confirm, "FINAL CHECK: UNHANDLED RESULT TYPE");
    pub const FINAL_EVEN_NUMBER: Label = Label::new(Stage::Confirm, "FINAL CHECK: EVEN NUMBER");
    pub const FINAL_ODD_NUMBER: Label = Label::new(Stage::Confirm, "FINAL CHECK: ODD NUMBER");
    pub const FINAL_STRING: Label = Label::new(Stage::Confirm, "FINAL CHECK: STRING");
    pub const FINAL_UNEXPECTED_CONFIRMATION: Label =
        Label::new(Stage::Confirm, "FINAL CHECK: UNEXPECTED CONFIRMATION");
    pub const FINAL_UNCATEGORIZED_RESULT: Label =
        Label::new(Stage::Confirm, "FINAL CHECK: UNCATEGORIZED RESULT");

    /// Every label any stage can produce, grouped by stage.
    pub const ALL: &'static [Label] = &[
        Self::INVALID_DATA,
        Self::POSITIVE_EVEN_NUMBER,
        Self::POSITIVE_ODD_NUMBER,
        Self::ZERO,
        Self::NEGATIVE_NUMBER,
        Self::EMPTY_STRING,
        Self::LONG_UPPERCASE_STRING,
        Self::LONG_STRING,
        Self::SHORT_LOWERCASE_STRING,
        Self::SHORT_STRING,
        Self::UNKNOWN_VALUE_TYPE,
        Self::UNHANDLED_RESULT_TYPE,
        Self::CRITICAL_VALUE_MISSING,
        Self::CRITICAL_DATA_INVALID,
        Self::UNKNOWN_CRITICAL_ERROR,
        Self::CONFIRMED_EVEN,
        Self::CONFIRMED_ODD,
        Self::CONFIRMED_ZERO,
        Self::UNEXPECTED_NUMBER_CASE,
        Self::LONG_CONFIRMED_STRING,
        Self::SHORT_CONFIRMED_STRING,
        Self::GENERAL_CONFIRMED_STRING,
        Self::UNKNOWN_CATEGORY,
        Self::FINAL_UNHANDLED_RESULT_TYPE,
        Self::FINAL_EVEN_NUMBER,
        Self::FINAL_ODD_NUMBER,
        Self::FINAL_STRING,
        Self::FINAL_UNEXPECTED_CONFIRMATION,
        Self::FINAL_UNCATEGORIZED_RESULT,
    ];

    /// Labels produced by a single stage, in catalogue order.
    pub fn of_stage(stage: Stage) -> impl Iterator<Item = Label> {
        Self::ALL.iter().copied().filter(move |l| l.stage == stage)
    }

    /// Look up a catalogue label by its exact text.
    pub fn from_text(text: &str) -> Option<Label> {
        Self::ALL.iter().copied().find(|l| l.text == text)
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }

    /// Stage that emits this label.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Keyword test used by the downstream stages.
    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text)
    }
}
