//! ホストプロジェクト（Angular ワークスペース）の検出

use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use crate::jsonc;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

pub const ANGULAR_JSON: &str = "angular.json";
pub const PACKAGE_JSON: &str = "package.json";

/// サポートする Angular の最小メジャーバージョン
pub const MIN_ANGULAR_MAJOR: u32 = 19;

const ANGULAR_CORE: &str = "@angular/core";

/// "^19.0.0" / "~19.1.2" / "19.x" から先頭の数値を取り出す
static MAJOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\^~]?(\d+)").unwrap());

/// `angular.json` があるか
pub fn is_angular_workspace(fs: &dyn FileSystem, root: &Path) -> bool {
    fs.exists(&root.join(ANGULAR_JSON))
}

/// バージョン指定文字列からメジャーバージョンを取り出す
pub fn parse_major(spec: &str) -> Option<u32> {
    MAJOR_RE
        .captures(spec)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// package.json の `@angular/core` のメジャーバージョン
///
/// dependencies → devDependencies の順に探す。読めない・見つからない場合は None。
pub fn angular_major_version(fs: &dyn FileSystem, root: &Path) -> Option<u32> {
    let text = fs.read_to_string(&root.join(PACKAGE_JSON)).ok()?;
    let package: Value = jsonc::parse(&text).ok()?;

    ["dependencies", "devDependencies"]
        .iter()
        .find_map(|section| package.get(section)?.get(ANGULAR_CORE)?.as_str())
        .and_then(parse_major)
}

/// init 可能なワークスペースか検証し、Angular のメジャーバージョンを返す
pub fn check_workspace(fs: &dyn FileSystem, root: &Path) -> Result<u32> {
    if !is_angular_workspace(fs, root) {
        return Err(RazError::UnsupportedProject(format!(
            "no {} found in {}",
            ANGULAR_JSON,
            root.display()
        )));
    }

    match angular_major_version(fs, root) {
        Some(major) if major >= MIN_ANGULAR_MAJOR => Ok(major),
        Some(major) => Err(RazError::UnsupportedProject(format!(
            "Angular {} detected, raz-ui requires Angular {} or higher",
            major, MIN_ANGULAR_MAJOR
        ))),
        None => Err(RazError::UnsupportedProject(format!(
            "{} is not listed in {}",
            ANGULAR_CORE, PACKAGE_JSON
        ))),
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
