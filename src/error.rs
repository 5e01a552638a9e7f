use std::path::PathBuf;
use thiserror::Error;

mod code;
mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

/// raz-ui 統一エラー型
#[derive(Debug, Error)]
pub enum RazError {
    #[error("Component \"{0}\" not found in registry")]
    ComponentNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Registry error: {message} (status: {status}, url: {url})")]
    RegistryApi {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Dependency \"{name}\" failed to install earlier: {reason}")]
    DependencyFailed { name: String, reason: String },

    #[error("Invalid component descriptor for \"{name}\": {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("Failed to {action} {}: {source}", .path.display())]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported project: {0}")]
    UnsupportedProject(String),

    #[error("Refusing to write outside the components directory: {0}")]
    UnsafePath(String),

    #[error("{manager} exited with {status} while installing {packages}{}", stderr_suffix(.stderr))]
    PackageInstall {
        manager: String,
        packages: String,
        status: String,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot patch {}: {message}", .path.display())]
    ConfigPatch { path: PathBuf, message: String },

    #[error("Invalid JSON with comments: {0}")]
    Jsonc(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RazError>;

fn stderr_suffix(stderr: &str) -> String {
    let tail = stderr.trim();
    if tail.is_empty() {
        String::new()
    } else {
        format!(": {tail}")
    }
}

impl RazError {
    /// ファイルシステムエラーをパス付きで生成
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RazError::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// エラーコードを返す
    pub fn code(&self) -> ErrorCode {
        match self {
            RazError::ComponentNotFound(_) => ErrorCode::Reg001,
            RazError::Network(e) if e.is_timeout() => ErrorCode::Net002,
            RazError::Network(_) => ErrorCode::Net001,
            RazError::RegistryApi { status, .. } if *status == 404 => ErrorCode::Reg001,
            RazError::RegistryApi { .. } => ErrorCode::Reg002,
            RazError::InvalidDescriptor { .. } => ErrorCode::Reg003,
            RazError::DependencyFailed { .. } => ErrorCode::Reg004,
            RazError::FileSystem { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Io003,
            },
            RazError::UnsafePath(_) => ErrorCode::Io004,
            RazError::PackageInstall { .. } => ErrorCode::Pkg001,
            RazError::Config(_) => ErrorCode::Cfg001,
            RazError::ConfigPatch { .. } | RazError::Jsonc(_) => ErrorCode::Cfg002,
            RazError::Json(_) => ErrorCode::Reg003,
            RazError::InvalidArgument(_) => ErrorCode::Val001,
            RazError::UnsupportedProject(_) => ErrorCode::Val002,
        }
    }

    /// レジストリにエントリが存在しないことを示すエラーか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RazError::ComponentNotFound(_) | RazError::RegistryApi { status: 404, .. }
        )
    }

    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            RazError::Network(_) => true,
            RazError::RegistryApi { status, .. } => {
                // 5xx と 429 はリトライ可能
                *status == 429 || (*status >= 500 && *status < 600)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
