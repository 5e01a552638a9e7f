//! ユーザー向けステータス行

use owo_colors::OwoColorize;

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "!".yellow(), message);
}

pub fn info(message: &str) {
    println!("{} {}", "•".cyan(), message);
}

/// インストール結果のまとめ行
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(success: usize, failure: usize) -> Self {
        match (success, failure) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} installed, {} failed", success.green(), f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} component(s) installed", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "Nothing to install".to_string(),
            },
        }
    }
}

impl std::fmt::Display for CommandSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
