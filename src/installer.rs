//! コンポーネントの依存解決とインストール
//!
//! 要求された名前ごとに記述子を取得し、`registryDependencies` を再帰的に展開して
//! ファイルをプロジェクトに書き込む。
//!
//! - 1 回の `install` 呼び出しの中で同じコンポーネントは一度しか書き込まない
//!   （ダイヤモンド依存・循環依存に対応）
//! - npm パッケージのインストール失敗は警告として記録し、ファイル書き込みは続行
//! - ネストした依存の失敗は、それを引き込んだトップレベル名の失敗になる
//! - トップレベル名同士は互いに影響しない

use crate::component::{Component, ComponentFile};
use crate::config::InstallConfig;
use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use crate::package_manager::{DependencyKind, PackageManager};
use crate::registry::Registry;
use crate::rewrite::ImportRewriter;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Component as PathComponent, Path, PathBuf};
use std::pin::Pin;

/// 1 回の解決における各コンポーネントの状態
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResolveState {
    /// 解決中（ここに戻ってきたら循環）
    Resolving,
    Installed,
    /// 失敗理由
    Failed(String),
}

/// トップレベル名ごとの結果
#[derive(Debug)]
pub enum InstallStatus {
    /// 新たにインストールしたコンポーネント（依存を先に、要求名を最後に）と書き込んだファイル
    Installed {
        components: Vec<String>,
        files: Vec<PathBuf>,
    },
    /// 同じ呼び出しの中ですでに依存としてインストール済み
    AlreadyInstalled,
    Failed(RazError),
}

#[derive(Debug)]
pub struct InstallOutcome {
    pub name: String,
    pub status: InstallStatus,
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, InstallStatus::Failed(_))
    }
}

/// パッケージインストールの失敗（ファイルは書き込み済み）
#[derive(Debug)]
pub struct PackageWarning {
    pub component: String,
    pub packages: Vec<String>,
    pub error: RazError,
}

/// `install` の結果
#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
    pub package_warnings: Vec<PackageWarning>,
}

impl InstallReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &RazError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            InstallStatus::Failed(e) => Some((o.name.as_str(), e)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    /// この呼び出しで書き込んだ全ファイル
    pub fn written_files(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.status {
                InstallStatus::Installed { files, .. } => Some(files),
                _ => None,
            })
            .flatten()
            .map(PathBuf::as_path)
            .collect()
    }
}

/// 1 回の `install` 呼び出しが専有する解決状態
struct Resolution {
    states: HashMap<String, ResolveState>,
    rewriter: ImportRewriter,
    components_dir: PathBuf,
    /// 現在のトップレベル名で新たにインストールしたもの
    installed: Vec<String>,
    files: Vec<PathBuf>,
    package_warnings: Vec<PackageWarning>,
}

/// インストーラー
pub struct Installer<'a> {
    registry: &'a dyn Registry,
    packages: &'a dyn PackageManager,
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(
        registry: &'a dyn Registry,
        packages: &'a dyn PackageManager,
        fs: &'a dyn FileSystem,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            packages,
            fs,
            root: root.into(),
        }
    }

    /// 要求された名前を順にインストール
    pub async fn install(&self, names: &[String], config: &InstallConfig) -> InstallReport {
        let mut run = Resolution {
            states: HashMap::new(),
            rewriter: ImportRewriter::new(config),
            components_dir: self.root.join(&config.components_path),
            installed: Vec::new(),
            files: Vec::new(),
            package_warnings: Vec::new(),
        };
        let mut outcomes = Vec::with_capacity(names.len());

        for name in names {
            let status = match run.states.get(name.as_str()).cloned() {
                Some(ResolveState::Failed(reason)) => {
                    InstallStatus::Failed(RazError::DependencyFailed {
                        name: name.clone(),
                        reason,
                    })
                }
                Some(_) => InstallStatus::AlreadyInstalled,
                None => match self.resolve(name, &mut run).await {
                    Ok(()) => InstallStatus::Installed {
                        components: std::mem::take(&mut run.installed),
                        files: std::mem::take(&mut run.files),
                    },
                    Err(e) => {
                        tracing::warn!(component = %name, error = %e, "installation failed");
                        run.installed.clear();
                        run.files.clear();
                        InstallStatus::Failed(e)
                    }
                },
            };
            outcomes.push(InstallOutcome {
                name: name.clone(),
                status,
            });
        }

        InstallReport {
            outcomes,
            package_warnings: run.package_warnings,
        }
    }

    /// 1 コンポーネントを解決（依存を先に再帰）
    fn resolve<'s>(
        &'s self,
        name: &'s str,
        run: &'s mut Resolution,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 's>> {
        Box::pin(async move {
            match run.states.get(name) {
                Some(ResolveState::Resolving) | Some(ResolveState::Installed) => {
                    tracing::debug!(component = name, "already visited");
                    return Ok(());
                }
                Some(ResolveState::Failed(reason)) => {
                    return Err(RazError::DependencyFailed {
                        name: name.to_string(),
                        reason: reason.clone(),
                    });
                }
                None => {}
            }
            run.states.insert(name.to_string(), ResolveState::Resolving);

            match self.install_component(name, run).await {
                Ok(()) => {
                    run.states.insert(name.to_string(), ResolveState::Installed);
                    run.installed.push(name.to_string());
                    Ok(())
                }
                Err(e) => {
                    run.states
                        .insert(name.to_string(), ResolveState::Failed(e.to_string()));
                    Err(e)
                }
            }
        })
    }

    async fn install_component(&self, name: &str, run: &mut Resolution) -> Result<()> {
        tracing::debug!(component = name, "fetching component");
        let component = self.registry.fetch_component(name).await?;

        self.install_packages(&component, run).await;

        for dependency in &component.registry_dependencies {
            self.resolve(dependency, run).await?;
        }

        for file in &component.files {
            let written = self.write_file(file, run)?;
            run.files.push(written);
        }
        Ok(())
    }

    /// npm 依存のインストール（失敗は警告として記録）
    async fn install_packages(&self, component: &Component, run: &mut Resolution) {
        if component.dependencies.is_empty() {
            return;
        }

        if let Err(error) = self
            .packages
            .install(&component.dependencies, DependencyKind::Runtime)
            .await
        {
            tracing::warn!(component = %component.name, error = %error, "package install failed");
            run.package_warnings.push(PackageWarning {
                component: component.name.clone(),
                packages: component.dependencies.clone(),
                error,
            });
        }
    }

    fn write_file(&self, file: &ComponentFile, run: &Resolution) -> Result<PathBuf> {
        let relative = safe_relative_path(&file.path)?;
        let destination = run.components_dir.join(relative);

        if let Some(parent) = destination.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let content = run.rewriter.rewrite(&file.content);
        self.fs.write(&destination, content.as_bytes())?;

        tracing::debug!(path = %destination.display(), "wrote component file");
        Ok(destination)
    }
}

/// コンポーネントディレクトリの外を指さない相対パスか検証
fn safe_relative_path(path: &str) -> Result<&Path> {
    let candidate = Path::new(path);
    let is_safe = !path.is_empty()
        && candidate
            .components()
            .all(|c| matches!(c, PathComponent::Normal(_) | PathComponent::CurDir))
        && candidate
            .components()
            .any(|c| matches!(c, PathComponent::Normal(_)));

    if is_safe {
        Ok(candidate)
    } else {
        Err(RazError::UnsafePath(path.to_string()))
    }
}

#[cfg(test)]
#[path = "installer_test.rs"]
mod tests;
