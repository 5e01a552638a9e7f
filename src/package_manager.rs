//! パッケージマネージャー呼び出し
//!
//! コンポーネントが要求する npm パッケージをホストプロジェクトに追加する。
//! 使用するマネージャーはプロジェクトルートのロックファイルから判定する。

use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use clap::ValueEnum;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Mutex;

/// 依存の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// dependencies
    Runtime,
    /// devDependencies
    Dev,
}

/// パッケージマネージャー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManagerKind {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManagerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Bun => "bun",
        }
    }

    /// ロックファイルから判定（見つからなければ npm）
    pub fn detect(fs: &dyn FileSystem, root: &Path) -> Self {
        const LOCKFILES: &[(&str, PackageManagerKind)] = &[
            ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
            ("yarn.lock", PackageManagerKind::Yarn),
            ("bun.lockb", PackageManagerKind::Bun),
            ("bun.lock", PackageManagerKind::Bun),
        ];

        LOCKFILES
            .iter()
            .find(|(file, _)| fs.exists(&root.join(file)))
            .map(|(_, kind)| *kind)
            .unwrap_or(PackageManagerKind::Npm)
    }

    /// 実行ファイル名（Windows では npm.cmd 等のシム）
    fn program(&self) -> String {
        if cfg!(windows) {
            format!("{}.cmd", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }

    /// インストールコマンドの引数
    pub fn install_args(&self, packages: &[String], kind: DependencyKind) -> Vec<String> {
        let mut args: Vec<String> = match self {
            PackageManagerKind::Npm => vec!["install".to_string()],
            _ => vec!["add".to_string()],
        };
        args.extend(packages.iter().cloned());

        let flag = match (self, kind) {
            (PackageManagerKind::Npm, DependencyKind::Runtime) => Some("--save"),
            (PackageManagerKind::Npm, DependencyKind::Dev) => Some("--save-dev"),
            (PackageManagerKind::Bun, DependencyKind::Dev) => Some("-d"),
            (_, DependencyKind::Dev) => Some("-D"),
            (_, DependencyKind::Runtime) => None,
        };
        args.extend(flag.map(str::to_string));
        args
    }

    /// 手動インストール用のコマンド文字列
    pub fn command_line(&self, packages: &[String], kind: DependencyKind) -> String {
        format!("{} {}", self.as_str(), self.install_args(packages, kind).join(" "))
    }
}

impl std::fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// パッケージマネージャー trait
pub trait PackageManager: Send + Sync {
    /// パッケージを追加
    fn install<'a>(
        &'a self,
        packages: &'a [String],
        kind: DependencyKind,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// 外部プロセスとして実行するパッケージマネージャー
pub struct ProcessPackageManager {
    kind: PackageManagerKind,
    root: PathBuf,
}

impl ProcessPackageManager {
    pub fn new(kind: PackageManagerKind, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            root: root.into(),
        }
    }
}

impl PackageManager for ProcessPackageManager {
    fn install<'a>(
        &'a self,
        packages: &'a [String],
        kind: DependencyKind,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if packages.is_empty() {
                return Ok(());
            }

            let args = self.kind.install_args(packages, kind);
            tracing::debug!(manager = %self.kind, ?args, root = %self.root.display(), "running package manager");

            let failure = |status: String, stderr: String| RazError::PackageInstall {
                manager: self.kind.to_string(),
                packages: packages.join(" "),
                status,
                stderr,
            };

            let output = tokio::process::Command::new(self.kind.program())
                .args(&args)
                .current_dir(&self.root)
                .output()
                .await
                .map_err(|e| failure("failed to start".to_string(), e.to_string()))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(failure(output.status.to_string(), stderr_tail(&stderr)));
            }

            Ok(())
        })
    }
}

/// 最後の数行だけ残す
fn stderr_tail(stderr: &str) -> String {
    const MAX_LINES: usize = 5;
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    lines[lines.len().saturating_sub(MAX_LINES)..].join("\n")
}

/// インストールせずに要求だけを記録する（`--skip-install`）
#[derive(Default)]
pub struct SkipInstall {
    requested: Mutex<Vec<(Vec<String>, DependencyKind)>>,
}

impl SkipInstall {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された要求（重複パッケージは除外、要求順）
    pub fn requested(&self, kind: DependencyKind) -> Vec<String> {
        let mut packages: Vec<String> = Vec::new();
        if let Ok(requested) = self.requested.lock() {
            for (names, k) in requested.iter() {
                if *k != kind {
                    continue;
                }
                for name in names {
                    if !packages.contains(name) {
                        packages.push(name.clone());
                    }
                }
            }
        }
        packages
    }
}

impl PackageManager for SkipInstall {
    fn install<'a>(
        &'a self,
        packages: &'a [String],
        kind: DependencyKind,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push((packages.to_vec(), kind));
        }
        Box::pin(async { Ok(()) })
    }
}

/// 常に失敗するパッケージマネージャー
#[cfg(test)]
pub struct FailingInstall;

#[cfg(test)]
impl PackageManager for FailingInstall {
    fn install<'a>(
        &'a self,
        packages: &'a [String],
        _kind: DependencyKind,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            Err(RazError::PackageInstall {
                manager: "npm".to_string(),
                packages: packages.join(" "),
                status: "exit status: 1".to_string(),
                stderr: "npm ERR! 404".to_string(),
            })
        })
    }
}

#[cfg(test)]
#[path = "package_manager_test.rs"]
mod tests;
