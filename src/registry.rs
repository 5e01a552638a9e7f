//! コンポーネントレジストリ
//!
//! 名前からコンポーネント記述子を取得する。キャッシュもリトライもしない。
//! 呼び出しごとに毎回取得し直す。

mod client;

#[cfg(test)]
pub mod mock;

pub use client::{HttpRegistry, DEFAULT_REGISTRY_URL};

use crate::component::{Component, IndexEntry};
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// レジストリ trait
pub trait Registry: Send + Sync {
    /// コンポーネント記述子を取得
    ///
    /// 存在しなければ `RazError::ComponentNotFound`。
    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Component>> + Send + 'a>>;

    /// 公開されているコンポーネントの一覧を取得
    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>>> + Send + '_>>;
}
