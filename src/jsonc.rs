//! コメント付き JSON の読み込みと書式保持編集
//!
//! tsconfig.json はコメントや末尾カンマを含むため、serde_json で読み込んで
//! 再シリアライズするとコメントと書式が失われる。
//! 編集は jsonc-parser の CST 上で行い、変更したメンバー以外はそのまま書き戻す。

use crate::error::{RazError, Result};
use jsonc_parser::cst::{CstInputValue, CstObject, CstRootNode};
use jsonc_parser::ParseOptions;
use serde_json::Value;

/// コメント・末尾カンマを許容して読み込む
pub fn parse(text: &str) -> Result<Value> {
    jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| RazError::Jsonc(e.to_string()))?
        .ok_or_else(|| RazError::Jsonc("document is empty".to_string()))
}

/// `key_path` のメンバーに `value` を設定したテキストを返す
///
/// - 既存メンバーは値だけを置き換える
/// - 無いメンバーは親オブジェクトの末尾に追加する
/// - 途中のオブジェクトが無い（またはオブジェクトでない）場合は作成する
///
/// 既に同じ値が入っている場合は入力をそのまま返す。
pub fn set_value(text: &str, key_path: &[&str], value: &Value) -> Result<String> {
    let Some((last, parents)) = key_path.split_last() else {
        return Err(RazError::Jsonc("key path is empty".to_string()));
    };

    let current = parse(text)?;
    if !current.is_object() {
        return Err(RazError::Jsonc("root value is not an object".to_string()));
    }
    if lookup(&current, key_path) == Some(value) {
        return Ok(text.to_string());
    }

    let root = CstRootNode::parse(text, &ParseOptions::default())
        .map_err(|e| RazError::Jsonc(e.to_string()))?;
    let object = parents
        .iter()
        .fold(root.object_value_or_set(), |object, key| {
            object.object_value_or_set(key)
        });
    set_member(&object, last, to_input(value));

    Ok(root.to_string())
}

fn lookup<'a>(value: &'a Value, key_path: &[&str]) -> Option<&'a Value> {
    key_path.iter().try_fold(value, |current, key| current.get(*key))
}

fn set_member(object: &CstObject, key: &str, value: CstInputValue) {
    match object.get(key) {
        Some(member) => {
            member.set_value(value);
        }
        None => {
            object.append(key, value);
        }
    }
}

fn to_input(value: &Value) -> CstInputValue {
    match value {
        Value::Null => CstInputValue::Null,
        Value::Bool(b) => CstInputValue::Bool(*b),
        Value::Number(n) => CstInputValue::Number(n.to_string()),
        Value::String(s) => CstInputValue::String(s.clone()),
        Value::Array(items) => CstInputValue::Array(items.iter().map(to_input).collect()),
        Value::Object(map) => CstInputValue::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_input(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
#[path = "jsonc_test.rs"]
mod tests;
