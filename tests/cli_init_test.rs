//! init integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TSCONFIG: &str = r#"/* To learn more about Typescript configuration file: https://www.typescriptlang.org/docs/handbook/tsconfig-json.html. */
{
  "compileOnSave": false,
  "compilerOptions": {
    "outDir": "./dist/out-tsc",
    // keep this comment
    "strict": true
  }
}
"#;

const APP_TSCONFIG: &str = r#"{
  "extends": "./tsconfig.json",
  "compilerOptions": {
    "outDir": "./out-tsc/app"
  }
}
"#;

fn raz_ui(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("raz-ui").unwrap();
    cmd.arg("--cwd").arg(project.path());
    cmd
}

fn angular_project(core_version: &str) -> TempDir {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("angular.json"), "{}").unwrap();
    fs::write(
        project.path().join("package.json"),
        format!(
            r#"{{ "dependencies": {{ "@angular/core": "{}" }} }}"#,
            core_version
        ),
    )
    .unwrap();
    project
}

#[test]
fn test_init_sets_up_project() {
    let project = angular_project("^19.1.0");
    fs::write(project.path().join("tsconfig.json"), TSCONFIG).unwrap();
    fs::write(project.path().join("tsconfig.app.json"), APP_TSCONFIG).unwrap();

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Angular 19 detected"))
        .stdout(predicate::str::contains("npm install class-variance-authority clsx tailwind-merge --save"))
        .stdout(predicate::str::contains("Setup complete"));

    let config: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(project.path().join("raz-ui.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["aliases"]["components"], "src/app/components");
    assert_eq!(config["tailwind"]["baseColor"], "slate");

    let utils = fs::read_to_string(project.path().join("src/app/lib/utils.ts")).unwrap();
    assert!(utils.contains("twMerge(clsx(inputs))"));

    let tsconfig = fs::read_to_string(project.path().join("tsconfig.json")).unwrap();
    assert!(tsconfig.starts_with("/* To learn more"));
    assert!(tsconfig.contains("    // keep this comment\n"));
    assert!(tsconfig.contains(r#""baseUrl": "./""#));
    assert!(tsconfig.contains(r#""src/app/components/*""#));

    let app = fs::read_to_string(project.path().join("tsconfig.app.json")).unwrap();
    assert!(app.contains(r#""@/lib/*""#));
    assert!(!app.contains("baseUrl"));
}

#[test]
fn test_init_custom_paths() {
    let project = angular_project("~20.0.0");
    fs::write(project.path().join("tsconfig.json"), TSCONFIG).unwrap();

    raz_ui(&project)
        .args([
            "init",
            "--skip-install",
            "--components-path",
            "ui",
            "--utils-path",
            "src/shared",
            "--base-color",
            "zinc",
            "--no-css-variables",
        ])
        .assert()
        .success();

    assert!(project.path().join("src/shared/utils.ts").exists());
    let tsconfig = fs::read_to_string(project.path().join("tsconfig.json")).unwrap();
    assert!(tsconfig.contains(r#""src/ui/*""#));

    let config: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(project.path().join("raz-ui.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["tailwind"]["baseColor"], "zinc");
    assert_eq!(config["tailwind"]["cssVariables"], false);
}

#[test]
fn test_init_outside_angular_fails() {
    let project = TempDir::new().unwrap();

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL002]"));

    assert!(!project.path().join("raz-ui.json").exists());
}

#[test]
fn test_init_old_angular_fails() {
    let project = angular_project("^17.3.0");

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Angular 17 detected"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let project = angular_project("^19.0.0");
    fs::write(project.path().join("raz-ui.json"), "{}").unwrap();

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(project.path().join("raz-ui.json")).unwrap(),
        "{}"
    );

    raz_ui(&project)
        .args(["init", "--skip-install", "--force"])
        .assert()
        .success();
    assert_ne!(
        fs::read_to_string(project.path().join("raz-ui.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_init_broken_tsconfig_prints_manual_snippet() {
    let project = angular_project("^19.0.0");
    fs::write(project.path().join("tsconfig.json"), "{ \"compilerOptions\": ").unwrap();

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("error[CFG002]"))
        .stderr(predicate::str::contains("\"@/components/*\""));
}

#[test]
fn test_init_without_tsconfig_prints_manual_snippet() {
    let project = angular_project("^19.0.0");

    raz_ui(&project)
        .args(["init", "--skip-install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No tsconfig.json or tsconfig.app.json found"))
        .stderr(predicate::str::contains("\"@/components/*\""))
        .stdout(predicate::str::contains("already up to date").not());
}
