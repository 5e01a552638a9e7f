use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::commands::{add, init, list};
use crate::env::EnvVar;
use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use crate::package_manager::PackageManagerKind;
use crate::registry::DEFAULT_REGISTRY_URL;

#[derive(Debug, Parser)]
#[command(name = "raz-ui", version)]
#[command(about = "Add raz-ui components to your Angular project", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全サブコマンド共通のオプション
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Registry base URL (overrides RAZ_UI_REGISTRY)
    #[arg(long, global = true, value_name = "URL")]
    pub registry: Option<String>,

    /// Package manager to use (detected from lockfiles by default)
    #[arg(long, global = true, value_enum)]
    pub package_manager: Option<PackageManagerKind>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// プロジェクトルート（`--cwd` がなければカレントディレクトリ）
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir()
                .map_err(|e| RazError::fs("resolve current directory", ".", e)),
        }
    }

    /// `--registry` → `RAZ_UI_REGISTRY` → 公式レジストリ
    pub fn registry_url(&self) -> String {
        EnvVar::registry_url(self.registry.as_deref(), DEFAULT_REGISTRY_URL)
    }

    pub fn package_manager(&self, fs: &dyn FileSystem, root: &Path) -> PackageManagerKind {
        self.package_manager
            .unwrap_or_else(|| PackageManagerKind::detect(fs, root))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize raz-ui in an Angular project
    Init(init::Args),

    /// Add components to your project
    Add(add::Args),

    /// List components available in the registry
    List(list::Args),
}
