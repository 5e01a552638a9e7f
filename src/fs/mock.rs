//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
    /// このプレフィックス配下への書き込みは PermissionDenied で失敗する
    read_only: RwLock<Vec<String>>,
    /// パスごとの書き込み回数
    writes: RwLock<HashMap<String, usize>>,
}

enum MockFile {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            read_only: RwLock::new(Vec::new()),
            writes: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile::File(content.as_bytes().to_vec()),
        );
    }

    /// 書き込み禁止のプレフィックスを登録
    pub fn deny_writes_under(&self, prefix: &str) {
        self.read_only.write().unwrap().push(prefix.to_string());
    }

    /// ファイル内容を取得（存在しなければ None）
    pub fn content(&self, path: &str) -> Option<String> {
        match self.files.read().unwrap().get(path) {
            Some(MockFile::File(bytes)) => Some(String::from_utf8_lossy(bytes).to_string()),
            _ => None,
        }
    }

    /// 指定パスへの書き込み回数
    pub fn write_count(&self, path: &str) -> usize {
        self.writes.read().unwrap().get(path).copied().unwrap_or(0)
    }

    /// 書き込まれたファイル数（重複なし）
    pub fn written_files(&self) -> usize {
        self.writes.read().unwrap().len()
    }

    /// ディレクトリとして登録されているか
    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.files
                .read()
                .unwrap()
                .get(path.to_string_lossy().as_ref()),
            Some(MockFile::Dir)
        )
    }

    fn is_denied(&self, path: &str) -> bool {
        self.read_only
            .read()
            .unwrap()
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy().to_string();
        if self.is_denied(&path_str) {
            return Err(RazError::fs(
                "create directory",
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }

        // 祖先ディレクトリもすべて登録
        let mut files = self.files.write().unwrap();
        for ancestor in path.ancestors() {
            let key = ancestor.to_string_lossy().to_string();
            if key.is_empty() {
                continue;
            }
            files.entry(key).or_insert(MockFile::Dir);
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self
            .files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
        {
            Some(MockFile::File(bytes)) => Ok(String::from_utf8_lossy(bytes).to_string()),
            _ => Err(RazError::fs(
                "read",
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            )),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let path_str = path.to_string_lossy().to_string();
        if self.is_denied(&path_str) {
            return Err(RazError::fs(
                "write",
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }

        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.files
            .write()
            .unwrap()
            .insert(path_str.clone(), MockFile::File(content.to_vec()));
        *self.writes.write().unwrap().entry(path_str).or_insert(0) += 1;
        Ok(())
    }
}
