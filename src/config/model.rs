//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the client works out of the box.

use serde::{Deserialize, Serialize};

use super::nickname::generate_nickname;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nickname: default_nickname(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Startup appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print the ASCII-art banner on startup.
    #[serde(default = "default_true")]
    pub show_header: bool,
    /// Switch the terminal background to black on startup.
    #[serde(default = "default_true")]
    pub dark_background: bool,
    #[serde(default)]
    pub clear_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            dark_background: true,
            clear_on_start: false,
        }
    }
}

/// Diagnostic log settings. Logs go to a file; stdout is the chat display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_nickname() -> String {
    generate_nickname()
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/dogechat/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(!cfg.nickname.is_empty());
        assert!(cfg.ui.show_header);
        assert!(cfg.ui.dark_background);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
nickname = "shibe"

[ui]
show_header = false

[logging]
enabled = true
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.nickname, "shibe");
        assert!(!cfg.ui.show_header);
        assert!(cfg.ui.dark_background);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, default_log_dir());
    }
}
