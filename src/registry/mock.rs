//! テスト用インメモリレジストリ

use super::*;
use crate::component::ComponentFile;
use crate::error::RazError;
use std::collections::HashMap;
use std::sync::Mutex;

/// テスト用レジストリ
#[derive(Default)]
pub struct MockRegistry {
    components: HashMap<String, Component>,
    /// 名前ごとの取得回数
    fetches: Mutex<HashMap<String, usize>>,
    /// この名前の取得はネットワークエラーで失敗する
    unreachable: Vec<String>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// コンポーネントを登録
    pub fn with(mut self, component: Component) -> Self {
        self.components.insert(component.name.clone(), component);
        self
    }

    /// 取得時に 503 を返す名前を登録
    pub fn unreachable(mut self, name: &str) -> Self {
        self.unreachable.push(name.to_string());
        self
    }

    /// 取得回数
    pub fn fetch_count(&self, name: &str) -> usize {
        self.fetches.lock().unwrap().get(name).copied().unwrap_or(0)
    }
}

/// テスト用コンポーネントを組み立てる
pub fn component(name: &str, registry_dependencies: &[&str], files: &[(&str, &str)]) -> Component {
    Component {
        name: name.to_string(),
        component_type: "ui".to_string(),
        dependencies: Vec::new(),
        registry_dependencies: registry_dependencies.iter().map(|s| s.to_string()).collect(),
        files: files
            .iter()
            .map(|(path, content)| ComponentFile {
                path: path.to_string(),
                content: content.to_string(),
                file_type: "ui".to_string(),
            })
            .collect(),
    }
}

impl Registry for MockRegistry {
    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Component>> + Send + 'a>> {
        *self
            .fetches
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_insert(0) += 1;

        let result = if self.unreachable.iter().any(|n| n == name) {
            Err(RazError::RegistryApi {
                url: format!("mock://components/{}.json", name),
                status: 503,
                message: "unavailable".to_string(),
            })
        } else {
            self.components
                .get(name)
                .cloned()
                .ok_or_else(|| RazError::ComponentNotFound(name.to_string()))
        };
        Box::pin(async move { result })
    }

    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>>> + Send + '_>> {
        let mut entries: Vec<IndexEntry> = self
            .components
            .values()
            .map(|c| IndexEntry {
                name: c.name.clone(),
                component_type: c.component_type.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Box::pin(async move { Ok(entries) })
    }
}
