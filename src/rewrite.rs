//! import パスの書き換え
//!
//! レジストリのソースは `@/lib/utils` と `@/components` を固定で参照している。
//! これをホストプロジェクトで設定された配置先に合わせたパスへ置き換える。

use crate::config::InstallConfig;
use regex::Regex;
use std::sync::LazyLock;

/// utils の import プレースホルダー
pub const UTILS_TOKEN: &str = "@/lib/utils";

/// コンポーネントの import プレースホルダー（前方一致）
pub const COMPONENTS_TOKEN: &str = "@/components";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|{}",
        regex::escape(UTILS_TOKEN),
        regex::escape(COMPONENTS_TOKEN)
    ))
    .unwrap()
});

/// 設定から組み立てた置換先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRewriter {
    utils: String,
    components: String,
}

impl ImportRewriter {
    pub fn new(config: &InstallConfig) -> Self {
        let utils = match import_base(&config.utils_path) {
            "" => "@/utils".to_string(),
            base => format!("@/{}/utils", base),
        };
        let components = match import_base(&config.components_path) {
            "" => "@".to_string(),
            base => format!("@/{}", base),
        };
        Self { utils, components }
    }

    /// プレースホルダーをすべて置換する
    ///
    /// 左から一度だけ走査し、置換結果は再走査しない。
    /// `@/lib/utils2` や `@/lib/utils-extra` のような別名はそのまま残す。
    /// 置換先がプレースホルダーを延長した形（`@/components/ui` など）の場合、
    /// 再適用するとさらに延長されるため、1ファイルにつき一度だけ適用すること。
    pub fn rewrite(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len());
        let mut last = 0;

        for m in PLACEHOLDER_RE.find_iter(content) {
            let replacement = if m.as_str() == UTILS_TOKEN {
                if content[m.end()..].starts_with(is_identifier_char) {
                    continue;
                }
                &self.utils
            } else {
                &self.components
            };

            out.push_str(&content[last..m.start()]);
            out.push_str(replacement);
            last = m.end();
        }

        out.push_str(&content[last..]);
        out
    }
}

/// import に使うベースパス（先頭の `./`、前後の `/`、先頭の `src/` を除去）
fn import_base(path: &str) -> &str {
    let trimmed = path.trim_start_matches("./").trim_matches('/');
    if trimmed == "src" {
        return "";
    }
    trimmed.strip_prefix("src/").unwrap_or(trimmed)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '$')
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;

#[cfg(test)]
#[path = "rewrite_proptests.rs"]
mod proptests;
