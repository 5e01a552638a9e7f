//! raz-ui add コマンド
//!
//! コンポーネントをレジストリから取得し、依存コンポーネントと合わせて
//! プロジェクトに書き込む。

use crate::cli::GlobalArgs;
use crate::commands::{fetch_index, list, render_error};
use crate::config::{self, HttpConfig, CONFIG_FILE};
use crate::error::RazError;
use crate::fs::RealFs;
use crate::installer::{InstallReport, InstallStatus, Installer};
use crate::output::{self, CommandSummary};
use crate::package_manager::{
    DependencyKind, PackageManager, PackageManagerKind, ProcessPackageManager, SkipInstall,
};
use crate::registry::HttpRegistry;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Components to add (e.g. button card)
    pub components: Vec<String>,

    /// Add every component in the registry
    #[arg(long, conflicts_with = "components")]
    pub all: bool,

    /// Do not run the package manager
    #[arg(long)]
    pub skip_install: bool,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let verbose = global.verbose;
    let fs = RealFs;
    let root = global.project_root().map_err(|e| render_error(&e, verbose))?;

    let config = match config::load(&fs, &root).map_err(|e| render_error(&e, verbose))? {
        Some(config) => config,
        None => {
            let err = RazError::Config(format!("No {} found in {}", CONFIG_FILE, root.display()));
            return Err(render_error(&err, verbose));
        }
    };

    let registry = HttpRegistry::new(&global.registry_url(), &HttpConfig::default());

    let names = if args.all || args.components.is_empty() {
        let index = fetch_index(&registry)
            .await
            .map_err(|e| render_error(&e, verbose))?;

        if !args.all {
            list::print_table(&index);
            return Err(
                "No components specified. Pass component names (e.g. `raz-ui add button`) or --all"
                    .to_string(),
            );
        }
        index.into_iter().map(|entry| entry.name).collect()
    } else {
        args.components
    };

    let kind = global.package_manager(&fs, &root);
    let skipped = SkipInstall::new();
    let process = ProcessPackageManager::new(kind, &root);
    let packages: &dyn PackageManager = if args.skip_install {
        &skipped
    } else {
        &process
    };

    let report = Installer::new(&registry, packages, &fs, &root)
        .install(&names, &config)
        .await;

    display_report(&report, kind, verbose);
    if args.skip_install {
        let pending = skipped.requested(DependencyKind::Runtime);
        if !pending.is_empty() {
            output::info(&format!(
                "Skipped package install. Run: {}",
                kind.command_line(&pending, DependencyKind::Runtime)
            ));
        }
    }

    if verbose {
        for file in report.written_files() {
            println!("  {}", file.display());
        }
    }

    let failed = report.failed().count();
    println!("{}", CommandSummary::format(report.succeeded().count(), failed));

    if report.has_failures() {
        Err(format!(
            "{} of {} component(s) failed to install",
            failed,
            names.len()
        ))
    } else {
        Ok(())
    }
}

fn display_report(report: &InstallReport, kind: PackageManagerKind, verbose: bool) {
    for outcome in &report.outcomes {
        match &outcome.status {
            InstallStatus::Installed { components, files } => {
                let dependencies: Vec<&str> = components
                    .iter()
                    .map(String::as_str)
                    .filter(|name| *name != outcome.name)
                    .collect();
                let mut line = format!("Installed {} ({} file(s))", outcome.name, files.len());
                if !dependencies.is_empty() {
                    line.push_str(&format!(" with {}", dependencies.join(", ")));
                }
                output::success(&line);
            }
            InstallStatus::AlreadyInstalled => {
                output::info(&format!("{} already installed as a dependency", outcome.name));
            }
            InstallStatus::Failed(err) => {
                output::failure(&format!("Failed to install {}", outcome.name));
                eprintln!("{}", render_error(err, verbose));
                if err.is_not_found() {
                    output::info("Run `raz-ui list` to see available components");
                }
            }
        }
    }

    for warning in &report.package_warnings {
        output::warning(&format!(
            "Could not install packages for {}: {}",
            warning.component, warning.error
        ));
        eprintln!(
            "  Install manually: {}",
            kind.command_line(&warning.packages, DependencyKind::Runtime)
        );
    }
}
