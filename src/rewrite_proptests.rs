use super::*;
use proptest::prelude::*;

fn rewrite(content: &str, cfg: &InstallConfig) -> String {
    ImportRewriter::new(cfg).rewrite(content)
}

/// 置換先そのものが再置換されない設定か
fn is_stable(cfg: &InstallConfig) -> bool {
    let rewriter = ImportRewriter::new(cfg);
    rewriter.rewrite(&rewriter.utils) == rewriter.utils
        && rewriter.rewrite(&rewriter.components) == rewriter.components
}

/// 配置先パス（任意で src/ 始まり、末尾スラッシュあり）
fn path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec("[a-z]{1,8}", 1..4),
        any::<bool>(),
    )
        .prop_map(|(src, segments, trailing)| {
            let mut path = segments.join("/");
            if src {
                path = format!("src/{}", path);
            }
            if trailing {
                path.push('/');
            }
            path
        })
}

/// プレースホルダーを含みうるソース片
fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("import { cn } from '@/lib/utils';\n".to_string()),
            Just("import { A } from '@/components/a';\n".to_string()),
            Just("'@/lib/utils2'".to_string()),
            "[a-zA-Z0-9 {};'/\n]{0,20}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    /// 置換先がプレースホルダーを延長しない設定では、再適用しても結果は変わらない
    #[test]
    fn prop_rewrite_is_idempotent(
        components in path_strategy(),
        utils in path_strategy(),
        content in content_strategy()
    ) {
        let cfg = InstallConfig {
            components_path: components,
            utils_path: utils,
            ..InstallConfig::default()
        };
        prop_assume!(is_stable(&cfg));
        let once = rewrite(&content, &cfg);
        prop_assert_eq!(rewrite(&once, &cfg), once);
    }

    /// 同じ入力には常に同じ出力
    #[test]
    fn prop_rewrite_is_deterministic(
        components in path_strategy(),
        utils in path_strategy(),
        content in content_strategy()
    ) {
        let cfg = InstallConfig {
            components_path: components,
            utils_path: utils,
            ..InstallConfig::default()
        };
        prop_assert_eq!(rewrite(&content, &cfg), rewrite(&content, &cfg));
    }

    /// プレースホルダーを含まないソースは変化しない
    #[test]
    fn prop_rewrite_without_placeholders_is_identity(
        components in path_strategy(),
        content in "[a-z0-9 {};'\n]{0,40}"
    ) {
        let cfg = InstallConfig {
            components_path: components,
            ..InstallConfig::default()
        };
        prop_assert_eq!(rewrite(&content, &cfg), content);
    }
}
