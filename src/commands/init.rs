//! raz-ui init コマンド
//!
//! Angular ワークスペースに raz-ui の初期設定を行う。
//!
//! 1. Angular 19 以上のワークスペースか確認
//! 2. `raz-ui.json` を作成
//! 3. 基本パッケージをインストール（失敗は警告）
//! 4. `<utils>/utils.ts` に `cn` ヘルパーを作成
//! 5. tsconfig にパスエイリアスを設定（失敗は手動設定の案内を表示）

use crate::cli::GlobalArgs;
use crate::commands::render_error;
use crate::config::{self, InstallConfig, CONFIG_FILE};
use crate::error::{RazError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::output;
use crate::package_manager::{DependencyKind, PackageManager, ProcessPackageManager, SkipInstall};
use crate::project;
use crate::tsconfig::{self, PatchReport};
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};

/// ランタイム依存
pub const BASE_DEPENDENCIES: &[&str] = &["class-variance-authority", "clsx", "tailwind-merge"];

/// 開発依存（Tailwind v3 系）
pub const BASE_DEV_DEPENDENCIES: &[&str] = &["tailwindcss@^3.4.0", "postcss", "autoprefixer"];

pub const UTILS_FILE: &str = "utils.ts";

const UTILS_TEMPLATE: &str = "import { clsx, type ClassValue } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BaseColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

impl BaseColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseColor::Slate => "slate",
            BaseColor::Gray => "gray",
            BaseColor::Zinc => "zinc",
            BaseColor::Neutral => "neutral",
            BaseColor::Stone => "stone",
        }
    }
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Where to store components
    #[arg(long, default_value = "src/app/components")]
    pub components_path: String,

    /// Where to store utility functions
    #[arg(long, default_value = "src/app/lib")]
    pub utils_path: String,

    /// Base color for theming
    #[arg(long, value_enum, default_value = "slate")]
    pub base_color: BaseColor,

    /// Do not use CSS variables for theming
    #[arg(long)]
    pub no_css_variables: bool,

    /// Overwrite an existing raz-ui.json
    #[arg(long)]
    pub force: bool,

    /// Do not run the package manager
    #[arg(long)]
    pub skip_install: bool,
}

impl Args {
    fn install_config(&self) -> InstallConfig {
        InstallConfig {
            components_path: self.components_path.clone(),
            utils_path: self.utils_path.clone(),
            base_color: self.base_color.as_str().to_string(),
            use_css_variables: !self.no_css_variables,
            ..InstallConfig::default()
        }
    }
}

/// パッケージインストールの失敗
#[derive(Debug)]
pub struct PackageFailure {
    pub kind: DependencyKind,
    pub packages: Vec<String>,
    pub error: RazError,
}

/// init の結果
#[derive(Debug)]
pub struct InitReport {
    pub angular_major: u32,
    pub config_path: PathBuf,
    pub utils_file: PathBuf,
    pub package_failures: Vec<PackageFailure>,
    pub tsconfig: PatchReport,
}

pub async fn run(args: Args, global: &GlobalArgs) -> std::result::Result<(), String> {
    let verbose = global.verbose;
    let fs = RealFs;
    let root = global.project_root().map_err(|e| render_error(&e, verbose))?;
    let config = args.install_config();

    let kind = global.package_manager(&fs, &root);
    let skipped = SkipInstall::new();
    let process = ProcessPackageManager::new(kind, &root);
    let packages: &dyn PackageManager = if args.skip_install {
        &skipped
    } else {
        &process
    };

    let report = initialize(&fs, packages, &root, &config, args.force)
        .await
        .map_err(|e| render_error(&e, verbose))?;

    output::success(&format!("Angular {} detected", report.angular_major));
    output::success(&format!("Created {}", report.config_path.display()));

    if args.skip_install {
        for dependency_kind in [DependencyKind::Runtime, DependencyKind::Dev] {
            let pending = skipped.requested(dependency_kind);
            if !pending.is_empty() {
                output::info(&format!(
                    "Skipped package install. Run: {}",
                    kind.command_line(&pending, dependency_kind)
                ));
            }
        }
    } else if report.package_failures.is_empty() {
        output::success("Dependencies installed");
    } else {
        output::warning("Failed to install dependencies automatically");
        for failure in &report.package_failures {
            eprintln!("{}", render_error(&failure.error, verbose));
            eprintln!(
                "  Install manually: {}",
                kind.command_line(&failure.packages, failure.kind)
            );
        }
    }

    output::success(&format!("Created {}", report.utils_file.display()));
    display_tsconfig(&report.tsconfig, &config, verbose);

    println!();
    println!("Setup complete. You can now add components:");
    println!("  raz-ui add button");
    println!("  raz-ui add card");
    Ok(())
}

/// 初期設定を実行
///
/// ワークスペースの検証と raz-ui.json の作成に失敗した場合のみエラーを返す。
/// 以降の手順の失敗は `InitReport` に記録する。
pub async fn initialize(
    fs: &dyn FileSystem,
    packages: &dyn PackageManager,
    root: &Path,
    config: &InstallConfig,
    force: bool,
) -> Result<InitReport> {
    let angular_major = project::check_workspace(fs, root)?;

    if config::exists(fs, root) && !force {
        return Err(RazError::Config(format!(
            "{} already exists, pass --force to overwrite it",
            CONFIG_FILE
        )));
    }
    config::save(fs, root, config)?;

    let mut package_failures = Vec::new();
    for (kind, names) in [
        (DependencyKind::Runtime, BASE_DEPENDENCIES),
        (DependencyKind::Dev, BASE_DEV_DEPENDENCIES),
    ] {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        if let Err(error) = packages.install(&names, kind).await {
            tracing::warn!(?kind, error = %error, "base package install failed");
            package_failures.push(PackageFailure {
                kind,
                packages: names,
                error,
            });
        }
    }

    let utils_file = root.join(&config.utils_path).join(UTILS_FILE);
    fs.write(&utils_file, UTILS_TEMPLATE.as_bytes())?;

    let tsconfig = tsconfig::patch_aliases(
        fs,
        &tsconfig::default_targets(root),
        &config.components_path,
        &config.utils_path,
    );

    Ok(InitReport {
        angular_major,
        config_path: root.join(CONFIG_FILE),
        utils_file,
        package_failures,
        tsconfig,
    })
}

fn display_tsconfig(report: &PatchReport, config: &InstallConfig, verbose: bool) {
    if report.all_skipped() {
        output::warning("No tsconfig.json or tsconfig.app.json found");
        eprintln!("Add the following to your tsconfig.json manually:");
        eprintln!("{}", manual_tsconfig_snippet(config));
        return;
    }

    if !report.has_failures() {
        if report.updated_count() > 0 {
            output::success("TypeScript path aliases configured");
        } else {
            output::info("TypeScript path aliases already up to date");
        }
        return;
    }

    output::warning("Could not configure TypeScript paths automatically");
    for (_, error) in report.failures() {
        eprintln!("{}", render_error(error, verbose));
    }
    eprintln!("Add the following to your tsconfig.json manually:");
    eprintln!("{}", manual_tsconfig_snippet(config));
}

/// 手動設定用の tsconfig 断片
pub fn manual_tsconfig_snippet(config: &InstallConfig) -> String {
    let snippet = json!({
        "compilerOptions": {
            "baseUrl": "./",
            "paths": tsconfig::alias_table(&config.components_path, &config.utils_path),
        }
    });
    serde_json::to_string_pretty(&snippet).unwrap_or_default()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
