use crate::cli::{Cli, Command};
use crate::component::IndexEntry;
use crate::error::{ErrorFormatter, RazError};
use crate::http;
use crate::registry::Registry;

pub mod add;
pub mod init;
pub mod list;

/// レジストリ一覧取得の再試行回数
const INDEX_RETRIES: u32 = 2;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Init(args) => init::run(args, &cli.global).await,
        Command::Add(args) => add::run(args, &cli.global).await,
        Command::List(args) => list::run(args, &cli.global).await,
    }
}

/// `error[CODE]: message` 形式に整形
pub(crate) fn render_error(error: &RazError, verbose: bool) -> String {
    ErrorFormatter::new(verbose).format(error)
}

/// index.json を取得（一時的な失敗は再試行）
pub(crate) async fn fetch_index(registry: &dyn Registry) -> crate::error::Result<Vec<IndexEntry>> {
    http::with_retry(|| registry.fetch_index(), INDEX_RETRIES).await
}
