//! 設定
//!
//! - `raz-ui.json`（ホストプロジェクトの設定ファイル）の読み書き
//! - インストール処理に渡す `InstallConfig`
//! - HTTP クライアント設定

use crate::error::{RazError, Result};
use crate::fs::FileSystem;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 設定ファイル名
pub const CONFIG_FILE: &str = "raz-ui.json";

const SCHEMA_URL: &str = "https://raz-ui.vercel.app/schema.json";
const DEFAULT_TAILWIND_VERSION: u8 = 3;

/// インストール時に参照するホスト側の設定
///
/// `base_color` 以降はインストール処理では使わないが、設定ファイルとの往復のために保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// コンポーネントの配置先（プロジェクトルートからの相対パス）
    pub components_path: String,
    /// `utils.ts` の配置先（プロジェクトルートからの相対パス）
    pub utils_path: String,
    pub base_color: String,
    pub use_css_variables: bool,
    pub tailwind_version: u8,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            components_path: "src/app/components".to_string(),
            utils_path: "src/app/lib".to_string(),
            base_color: "slate".to_string(),
            use_css_variables: true,
            tailwind_version: DEFAULT_TAILWIND_VERSION,
        }
    }
}

/// raz-ui.json の tailwind セクション
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TailwindSection {
    #[serde(default = "default_tailwind_version")]
    version: u8,
    #[serde(default)]
    config: Option<String>,
    #[serde(default)]
    css: Option<String>,
    base_color: String,
    css_variables: bool,
}

/// raz-ui.json の aliases セクション
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AliasesSection {
    components: String,
    utils: String,
}

/// raz-ui.json のスキーマ
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectConfigFile {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    #[serde(default = "default_style")]
    style: String,
    tailwind: TailwindSection,
    aliases: AliasesSection,
}

fn default_tailwind_version() -> u8 {
    DEFAULT_TAILWIND_VERSION
}

fn default_style() -> String {
    "default".to_string()
}

impl From<&InstallConfig> for ProjectConfigFile {
    fn from(config: &InstallConfig) -> Self {
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            style: default_style(),
            tailwind: TailwindSection {
                version: config.tailwind_version,
                // v4 は設定ファイルを持たない
                config: (config.tailwind_version == 3).then(|| "tailwind.config.js".to_string()),
                css: Some("src/styles.css".to_string()),
                base_color: config.base_color.clone(),
                css_variables: config.use_css_variables,
            },
            aliases: AliasesSection {
                components: config.components_path.clone(),
                utils: config.utils_path.clone(),
            },
        }
    }
}

impl From<ProjectConfigFile> for InstallConfig {
    fn from(file: ProjectConfigFile) -> Self {
        Self {
            components_path: file.aliases.components,
            utils_path: file.aliases.utils,
            base_color: file.tailwind.base_color,
            use_css_variables: file.tailwind.css_variables,
            tailwind_version: file.tailwind.version,
        }
    }
}

/// raz-ui.json を読み込む
///
/// ファイルが存在しなければ `Ok(None)`。
pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Option<InstallConfig>> {
    let path = root.join(CONFIG_FILE);
    if !fs.exists(&path) {
        return Ok(None);
    }

    let content = fs.read_to_string(&path)?;
    let file: ProjectConfigFile = serde_json::from_str(&content)
        .map_err(|e| RazError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

    tracing::debug!(path = %path.display(), "loaded project config");
    Ok(Some(file.into()))
}

/// raz-ui.json を書き込む（既存ファイルは上書き）
pub fn save(fs: &dyn FileSystem, root: &Path, config: &InstallConfig) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    let mut content = serde_json::to_string_pretty(&ProjectConfigFile::from(config))?;
    content.push('\n');
    fs.write(&path, content.as_bytes())
}

/// raz-ui.json が存在するか
pub fn exists(fs: &dyn FileSystem, root: &Path) -> bool {
    fs.exists(&root.join(CONFIG_FILE))
}

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "raz-ui-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
