//! 環境変数による設定の上書き

/// レジストリのベースURLを上書きする環境変数
pub const REGISTRY_ENV: &str = "RAZ_UI_REGISTRY";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空白のみの値はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// レジストリURLを解決
    ///
    /// 優先順位: 明示的な指定 > RAZ_UI_REGISTRY > デフォルト
    pub fn registry_url(explicit: Option<&str>, default: &str) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| Self::get(REGISTRY_ENV))
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
