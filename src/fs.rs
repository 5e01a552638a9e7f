//! ファイルシステム抽象化
//!
//! コンポーネントの書き込みと tsconfig のパッチはすべてこのトレイト経由で行う。
//! パスは常に呼び出し側がプロジェクトルートと結合した絶対パスを渡し、
//! カレントディレクトリには依存しない。テスト時は MockFs を注入する。

use crate::error::{RazError, Result};
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
pub trait FileSystem: Send + Sync {
    /// パスが存在するか（シンボリックリンク追従）
    fn exists(&self, path: &Path) -> bool;

    /// ディレクトリを再帰的に作成
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 親ディレクトリは自動作成
    /// - 既存ファイルは上書き（マージもバックアップもしない）
    /// - アトミック性は保証しない
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| RazError::fs("create directory", path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| RazError::fs("read", path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        // 親ディレクトリを作成
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| RazError::fs("write", path, e))
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
