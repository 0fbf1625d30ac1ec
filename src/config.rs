use std::path::PathBuf;
use std::str::FromStr;

// =============================================================================
// Environment variables
// =============================================================================

/// Tracing filter directive; logging stays off while unset
pub const LOG_ENV: &str = "CHATBOTEVAL_LOG";

/// Log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "CHATBOTEVAL_LOG_FORMAT";

/// Overrides the log file location
pub const LOG_FILE_ENV: &str = "CHATBOTEVAL_LOG_FILE";

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log: LogConfig,
    /// Cargo home holding the `cargo install` manifest
    pub cargo_home: PathBuf,
}

/// Logging-related configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "debug" or "chatboteval=trace"
    pub filter: Option<String>,
    pub format: LogFormat,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    fn from_lookup<F>(var: F, home_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = data_dir_with_env(var("XDG_DATA_HOME"), home_dir.clone());
        let log = LogConfig {
            filter: var(LOG_ENV).filter(|f| !f.trim().is_empty()),
            format: var(LOG_FORMAT_ENV)
                .and_then(|f| f.parse().ok())
                .unwrap_or_default(),
            file: var(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("chatboteval.log")),
        };

        Self {
            log,
            cargo_home: cargo_home_with_env(var("CARGO_HOME"), home_dir),
        }
    }
}

/// Data directory for chatboteval.
/// Uses $XDG_DATA_HOME/chatboteval if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/chatboteval,
/// or ./chatboteval if neither is available.
fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("chatboteval")
}

/// Cargo home directory.
/// Uses $CARGO_HOME if set, otherwise ~/.cargo, or ./.cargo as a last resort.
fn cargo_home_with_env(cargo_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    cargo_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cargo")))
        .unwrap_or_else(|| PathBuf::from(".cargo"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)], home: Option<&str>) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned(), home.map(PathBuf::from))
    }

    #[test]
    fn config_defaults_disable_logging() {
        let config = config_from(&[], Some("/home/user"));

        assert_eq!(
            config,
            Config {
                log: LogConfig {
                    filter: None,
                    format: LogFormat::Text,
                    file: PathBuf::from("/home/user/.local/share/chatboteval/chatboteval.log"),
                },
                cargo_home: PathBuf::from("/home/user/.cargo"),
            }
        );
    }

    #[test]
    fn config_reads_all_variables() {
        let config = config_from(
            &[
                ("CHATBOTEVAL_LOG", "debug"),
                ("CHATBOTEVAL_LOG_FORMAT", "json"),
                ("CHATBOTEVAL_LOG_FILE", "/tmp/cbe.log"),
                ("CARGO_HOME", "/opt/cargo"),
            ],
            Some("/home/user"),
        );

        assert_eq!(config.log.filter.as_deref(), Some("debug"));
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.file, PathBuf::from("/tmp/cbe.log"));
        assert_eq!(config.cargo_home, PathBuf::from("/opt/cargo"));
    }

    #[test]
    fn config_treats_blank_filter_as_disabled() {
        let config = config_from(&[("CHATBOTEVAL_LOG", "  ")], Some("/home/user"));

        assert_eq!(config.log.filter, None);
    }

    #[test]
    fn config_ignores_unknown_log_format() {
        let config = config_from(&[("CHATBOTEVAL_LOG_FORMAT", "xml")], Some("/home/user"));

        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn config_places_log_file_under_xdg_data_home() {
        let config = config_from(&[("XDG_DATA_HOME", "/custom/data")], Some("/home/user"));

        assert_eq!(
            config.log.file,
            PathBuf::from("/custom/data/chatboteval/chatboteval.log")
        );
    }

    #[rstest]
    #[case("text", LogFormat::Text)]
    #[case("JSON", LogFormat::Json)]
    #[case(" json ", LogFormat::Json)]
    fn log_format_parses_case_insensitively(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>().unwrap(), expected);
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/custom/data".to_string()),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(path, PathBuf::from("/custom/data/chatboteval"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));
        assert_eq!(path, PathBuf::from("/home/user/.local/share/chatboteval"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./chatboteval"));
    }

    #[test]
    fn cargo_home_with_env_prefers_cargo_home() {
        let path = cargo_home_with_env(
            Some("/opt/cargo".to_string()),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(path, PathBuf::from("/opt/cargo"));
    }

    #[test]
    fn cargo_home_with_env_ignores_empty_value() {
        let path = cargo_home_with_env(Some(String::new()), Some(PathBuf::from("/home/user")));
        assert_eq!(path, PathBuf::from("/home/user/.cargo"));
    }

    #[test]
    fn cargo_home_with_env_falls_back_to_current_dir() {
        let path = cargo_home_with_env(None, None);
        assert_eq!(path, PathBuf::from(".cargo"));
    }
}
