//! HTTP レジストリクライアント
//!
//! - `GET <base>/index.json`
//! - `GET <base>/components/<name>.json`

use crate::component::{validate_name, Component, IndexEntry, RegistryIndex};
use crate::config::HttpConfig;
use crate::error::{RazError, Result};
use crate::http;
use crate::registry::Registry;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// 公式レジストリ
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/muadz-askarul/raz-ui/main/registry";

/// HTTP レジストリ
pub struct HttpRegistry {
    http: Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(base_url: &str, config: &HttpConfig) -> Self {
        Self {
            http: config.build_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    fn component_url(&self, name: &str) -> String {
        format!("{}/components/{}.json", self.base_url, name)
    }
}

impl Registry for HttpRegistry {
    fn fetch_component<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Component>> + Send + 'a>> {
        Box::pin(async move {
            validate_name(name)?;
            let url = self.component_url(name);

            let component: Component = match http::get_json(&self.http, &url).await {
                Ok(component) => component,
                Err(RazError::RegistryApi { status: 404, .. }) => {
                    return Err(RazError::ComponentNotFound(name.to_string()))
                }
                Err(RazError::Json(e)) => {
                    return Err(RazError::InvalidDescriptor {
                        name: name.to_string(),
                        reason: e.to_string(),
                    })
                }
                Err(e) => return Err(e),
            };

            if component.name != name {
                tracing::warn!(
                    requested = name,
                    received = %component.name,
                    "registry returned a descriptor with a different name"
                );
            }
            Ok(component)
        })
    }

    fn fetch_index(&self) -> Pin<Box<dyn Future<Output = Result<Vec<IndexEntry>>> + Send + '_>> {
        Box::pin(async move {
            let index: RegistryIndex = http::get_json(&self.http, &self.index_url()).await?;
            Ok(index.components)
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
