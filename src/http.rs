//! 共通HTTPヘルパー

use crate::error::{RazError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// リトライ間隔の初期値
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// GET して JSON としてデコード
///
/// 成功以外のステータスは `RazError::RegistryApi` になる。
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!(%url, "GET");

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(RazError::RegistryApi {
            url: url.to_string(),
            status: status.as_u16(),
            message: message.trim().chars().take(200).collect(),
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// リトライ可能なエラーかどうか
pub fn is_retriable_error(error: &RazError) -> bool {
    error.is_retryable()
}

/// リトライ付きで非同期処理を実行
///
/// リトライ可能なエラーのみ `max_retries` 回まで再試行する（指数バックオフ）。
pub async fn with_retry<F, Fut, T>(mut operation: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    let mut backoff = INITIAL_BACKOFF;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries && is_retriable_error(&err) => {
                attempt += 1;
                tracing::warn!(attempt, error = %err, "request failed, retrying");
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
