use std::error::Error;
use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::OwoColorize;
use regex::Regex;

use super::RazError;

static QUERY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])([^=&\s]+)=([^&\s)]+)").unwrap());

/// Formats RazError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &RazError) -> String {
        let mut plain = format!("error[{}]: {}", error.code(), error);

        if self.verbose {
            plain.push_str(&self.format_details(error));
        }

        // Registry URLs may carry tokens in their query string
        let masked = QUERY_PARAM_RE.replace_all(&plain, "$1$2=***").to_string();

        if self.use_color {
            Self::apply_color(&masked)
        } else {
            masked
        }
    }

    fn format_details(&self, error: &RazError) -> String {
        let code = error.code();
        let mut output = String::new();

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", code.cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in code.remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let mut chain = Vec::new();
        let mut current = error.source();
        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }
        if !chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", chain.join("\n")));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `raz-ui --help` for more information");
        output
    }

    fn apply_color(text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.starts_with("error[") {
                    let bracket_end = line.find(']').map_or(0, |i| i + 1);
                    let (prefix, rest) = line.split_at(bracket_end);
                    format!("{}{}", prefix.red().bold(), rest.bold())
                } else if line.starts_with("  | Cause:") {
                    line.yellow().to_string()
                } else if line.starts_with("  | Remediation:") {
                    line.green().to_string()
                } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                    line.dimmed().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_color() -> bool {
        false
    }

    #[test]
    fn format_simple() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RazError::ComponentNotFound("button".to_string());

        let output = formatter.format(&error);
        assert_eq!(output, "error[REG001]: Component \"button\" not found in registry");
    }

    #[test]
    fn format_verbose() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RazError::Config("missing".to_string());

        let output = formatter.format(&error);
        assert!(output.starts_with("error[CFG001]"));
        assert!(output.contains("Cause:"));
        assert!(output.contains("Remediation:"));
        assert!(output.contains("raz-ui init"));
        assert!(output.contains("note: use `raz-ui --help`"));
    }

    #[test]
    fn verbose_includes_source_chain() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "underlying error");
        let error = RazError::fs("read", "/p/tsconfig.json", io_error);

        let output = formatter.format(&error);
        assert!(output.contains("error[IO001]"));
        assert!(output.contains("Source chain:"));
        assert!(output.contains("underlying error"));
    }

    #[test]
    fn mask_query_params() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RazError::RegistryApi {
            url: "https://registry.test/index.json?token=abc123".to_string(),
            status: 401,
            message: "unauthorized".to_string(),
        };

        let output = formatter.format(&error);
        assert!(output.contains("token=***"), "output was: {}", output);
        assert!(!output.contains("abc123"), "output was: {}", output);
    }

    #[test]
    fn no_color_has_no_escape_codes() {
        let formatter = ErrorFormatter::with_color_detection(true, || false);
        let error = RazError::InvalidArgument("bad".to_string());
        assert!(!formatter.format(&error).contains("\x1b["));
    }

    #[test]
    fn color_wraps_error_line() {
        let formatter = ErrorFormatter::with_color_detection(false, || true);
        let error = RazError::InvalidArgument("bad".to_string());
        let output = formatter.format(&error);
        assert!(output.contains("\x1b["));
        assert!(output.contains("VAL001"));
    }
}
