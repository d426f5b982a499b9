//! # Stage Module
//!
//! レコードをラベルへ変換する3段階のステージを提供する。
//!
//! ## 設計目的
//!
//! 各ステージは前段の出力ラベル（文字列）のみを入力とする純粋関数であり、
//! 共有状態を持たない。ステージ間のルーティングはキーワードの部分一致のみで行う。
//!
//! - **Shape**: レコードの `value` を型・値で分類（例: "POSITIVE EVEN NUMBER"）
//! - **Categorize**: Shapeのラベルを "CONFIRMED ..." / "CRITICAL ERROR ..." へ分類
//! - **Confirm**: Categorizeのラベルを最終的な "FINAL CHECK: ..." へ変換
//!
//! ## モジュール構成
//!
//! - `shape`: 第1ステージ
//! - `categorize`: 第2ステージ
//! - `confirm`: 第3ステージ
//!
//! ## 使用例
//!
//! ```rust
//! use serde_json::json;
//! use stageclass_core::stage::Stage;
//!
//! // 単一ステージを生のJSON値に適用
//! assert_eq!(Stage::Shape.apply(&json!({"value": 4})), "POSITIVE EVEN NUMBER");
//! assert_eq!(Stage::Categorize.apply(&json!("POSITIVE EVEN NUMBER")), "CONFIRMED EVEN");
//! assert_eq!(Stage::Confirm.apply(&json!(42)), "FINAL CHECK: UNHANDLED RESULT TYPE");
//! ```

mod categorize;
mod confirm;
mod shape;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StageclassError;
use crate::label::Label;
use crate::record::Input;

// Re-exports
pub use categorize::{categorize, categorize_value};
pub use confirm::{confirm, confirm_value};
pub use shape::{classify_shape, is_all_lowercase, is_all_uppercase, LONG_STRING_THRESHOLD};

/// パイプラインのステージ（実行順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// 第1ステージ: 値の型・形状を分類
    Shape,
    /// 第2ステージ: 結果のカテゴリ分け
    Categorize,
    /// 第3ステージ: 最終確認
    Confirm,
}

impl Stage {
    /// 全ステージ（実行順）
    pub const ALL: [Stage; 3] = [Stage::Shape, Stage::Categorize, Stage::Confirm];

    /// ステージ名（CLI・設定ファイルで使用）
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Shape => "shape",
            Stage::Categorize => "categorize",
            Stage::Confirm => "confirm",
        }
    }

    /// 1始まりのステージ番号
    pub fn number(&self) -> usize {
        match self {
            Stage::Shape => 1,
            Stage::Categorize => 2,
            Stage::Confirm => 3,
        }
    }

    /// 次のステージ
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Shape => Some(Stage::Categorize),
            Stage::Categorize => Some(Stage::Confirm),
            Stage::Confirm => None,
        }
    }

    /// 単一ステージを生のJSON値に適用
    ///
    /// Shapeは値をレコード全体として扱う。Categorize/Confirmは文字列以外を
    /// "UNHANDLED" 系ラベルへ落とす。
    pub fn apply(&self, value: &Value) -> Label {
        match self {
            Stage::Shape => classify_shape(Input::from_json(value)),
            Stage::Categorize => categorize_value(value),
            Stage::Confirm => confirm_value(value),
        }
    }

    /// 前段ラベルのテキストに適用（Shapeはテキストを受け取らない）
    pub(crate) fn refine(&self, previous: &str) -> Option<Label> {
        match self {
            Stage::Shape => None,
            Stage::Categorize => Some(categorize(previous)),
            Stage::Confirm => Some(confirm(previous)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = StageclassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shape" | "1" => Ok(Stage::Shape),
            "categorize" | "2" => Ok(Stage::Categorize),
            "confirm" | "3" => Ok(Stage::Confirm),
            _ => Err(StageclassError::UnknownStage {
                name: s.to_string(),
            }),
        }
    }
}
