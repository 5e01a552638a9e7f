//! ログ設定
//!
//! `RUST_LOG` があればそれに従う。なければ `raz_ui=warn`（`--verbose` 時は `raz_ui=debug`）。
//! 出力は stderr。stdout はコマンドの結果表示に使う。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "raz_ui=debug"
    } else {
        "raz_ui=warn"
    }
}

pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 二重初期化（テストなど）は無視する
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
