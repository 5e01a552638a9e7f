//! レジストリが配布するコンポーネント記述子
//!
//! 記述子は取得ごとに新しく構築され、以後変更されない。

use crate::error::{RazError, Result};
use serde::{Deserialize, Serialize};

/// 名前の最大長
const MAX_NAME_LENGTH: usize = 64;

/// コンポーネントに含まれるファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFile {
    /// コンポーネントディレクトリからの相対パス
    pub path: String,
    /// プレースホルダー import を含む生のソース
    pub content: String,
    #[serde(rename = "type", default)]
    pub file_type: String,
}

/// レジストリ上のコンポーネント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
    /// npm パッケージ名（コンポーネント間で重複してよい）
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// 依存する他コンポーネントの名前
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub files: Vec<ComponentFile>,
}

/// index.json のエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
}

/// index.json のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryIndex {
    #[serde(default)]
    pub components: Vec<IndexEntry>,
}

/// コンポーネント名の検証
///
/// 名前はそのままURLのパスセグメントになるため `[a-z0-9._-]` のみ許可する。
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RazError::InvalidArgument(
            "Component name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(RazError::InvalidArgument(format!(
            "Component name is too long (max {} characters)",
            MAX_NAME_LENGTH
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && !matches!(c, '.' | '_' | '-'))
    {
        return Err(RazError::InvalidArgument(format!(
            "Invalid character '{}' in component name '{}'. Only [a-z0-9._-] are allowed.",
            c, name
        )));
    }

    if name.starts_with('.') {
        return Err(RazError::InvalidArgument(format!(
            "Component name '{}' cannot start with a period",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
