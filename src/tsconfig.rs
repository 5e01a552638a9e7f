//! tsconfig のパスエイリアス設定
//!
//! `tsconfig.json`（ルート）と `tsconfig.app.json`（アプリ）の
//! `compilerOptions.paths` を raz-ui の標準エイリアスに揃える。
//! 書き換えは [`crate::jsonc`] で行い、コメントと書式は保持される。

use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use crate::jsonc;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// ルートの tsconfig
pub const ROOT_TSCONFIG: &str = "tsconfig.json";

/// アプリ用の tsconfig（baseUrl はルートから継承する）
pub const APP_TSCONFIG: &str = "tsconfig.app.json";

/// tsconfig の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsConfigRole {
    /// baseUrl と paths を設定する
    Root,
    /// paths のみ設定する
    App,
}

/// パッチ対象のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTarget {
    pub path: PathBuf,
    pub role: TsConfigRole,
}

impl PatchTarget {
    pub fn new(path: impl Into<PathBuf>, role: TsConfigRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}

/// プロジェクトルート直下の標準対象
pub fn default_targets(root: &Path) -> Vec<PatchTarget> {
    vec![
        PatchTarget::new(root.join(ROOT_TSCONFIG), TsConfigRole::Root),
        PatchTarget::new(root.join(APP_TSCONFIG), TsConfigRole::App),
    ]
}

/// ファイルごとの結果
#[derive(Debug)]
pub enum PatchOutcome {
    Updated,
    /// 既に目的の状態
    Unchanged,
    /// ファイルが存在しない
    Skipped,
    Failed(RazError),
}

/// パッチ結果
#[derive(Debug, Default)]
pub struct PatchReport {
    pub results: Vec<(PathBuf, PatchOutcome)>,
}

impl PatchReport {
    /// 失敗したファイル
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &RazError)> {
        self.results.iter().filter_map(|(path, outcome)| match outcome {
            PatchOutcome::Failed(err) => Some((path.as_path(), err)),
            _ => None,
        })
    }

    /// 更新したファイル数
    pub fn updated_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| matches!(outcome, PatchOutcome::Updated))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// どの対象ファイルも存在しなかったか
    pub fn all_skipped(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|(_, outcome)| matches!(outcome, PatchOutcome::Skipped))
    }
}

/// エイリアス用にパスを正規化する
///
/// 前後のスラッシュ（と先頭の `./`）を除去し、`src/` で始まらなければ付与する。
pub fn normalize_alias_path(path: &str) -> String {
    let trimmed = path.trim_start_matches("./").trim_matches('/');
    if trimmed == "src" || trimmed.starts_with("src/") {
        trimmed.to_string()
    } else if trimmed.is_empty() {
        "src".to_string()
    } else {
        format!("src/{}", trimmed)
    }
}

/// raz-ui 標準のエイリアス表
pub fn alias_table(components_path: &str, utils_path: &str) -> Value {
    let mut paths = Map::new();
    paths.insert("@/*".to_string(), json!(["src/*"]));
    paths.insert(
        "@/components/*".to_string(),
        json!([format!("{}/*", normalize_alias_path(components_path))]),
    );
    paths.insert(
        "@/lib/*".to_string(),
        json!([format!("{}/*", normalize_alias_path(utils_path))]),
    );
    Value::Object(paths)
}

/// tsconfig のテキストにエイリアスを適用する
///
/// 既存の `paths` は丸ごと置き換える（カスタムエイリアスとのマージはしない）。
pub fn patch_text(text: &str, role: TsConfigRole, aliases: &Value) -> Result<String> {
    let text = match role {
        TsConfigRole::Root => {
            jsonc::set_value(text, &["compilerOptions", "baseUrl"], &json!("./"))?
        }
        TsConfigRole::App => text.to_string(),
    };
    jsonc::set_value(&text, &["compilerOptions", "paths"], aliases)
}

/// 対象ファイルにエイリアスを設定する
///
/// 存在しないファイルはスキップする。1ファイルの失敗は他のファイルに影響しない。
pub fn patch_aliases(
    fs: &dyn FileSystem,
    targets: &[PatchTarget],
    components_path: &str,
    utils_path: &str,
) -> PatchReport {
    let aliases = alias_table(components_path, utils_path);
    let mut report = PatchReport::default();

    for target in targets {
        let outcome = match patch_file(fs, target, &aliases) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(path = %target.path.display(), error = %err, "tsconfig patch failed");
                PatchOutcome::Failed(err)
            }
        };
        report.results.push((target.path.clone(), outcome));
    }

    report
}

fn patch_file(fs: &dyn FileSystem, target: &PatchTarget, aliases: &Value) -> Result<PatchOutcome> {
    if !fs.exists(&target.path) {
        tracing::debug!(path = %target.path.display(), "tsconfig not found, skipping");
        return Ok(PatchOutcome::Skipped);
    }

    let original = fs.read_to_string(&target.path)?;
    let patched = patch_text(&original, target.role, aliases).map_err(|e| match e {
        RazError::Jsonc(message) => RazError::ConfigPatch {
            path: target.path.clone(),
            message,
        },
        other => other,
    })?;

    if patched == original {
        return Ok(PatchOutcome::Unchanged);
    }

    fs.write(&target.path, patched.as_bytes())?;
    tracing::debug!(path = %target.path.display(), "tsconfig aliases updated");
    Ok(PatchOutcome::Updated)
}

#[cfg(test)]
#[path = "tsconfig_test.rs"]
mod tests;
