use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TgramError};

pub const DEFAULT_CONFIG_PATH: &str = "tgram.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Envelope violations fail `check` instead of only being reported.
    #[serde(default = "default_strict")]
    pub strict: bool,
    #[serde(default)]
    pub payload: PayloadShape,
}

fn default_strict() -> bool {
    true
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            payload: PayloadShape::default(),
        }
    }
}

/// Which JSON shape input files hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadShape {
    /// Guess from the top-level value.
    #[default]
    Auto,
    /// One `Update` object.
    Update,
    /// An array of updates.
    Updates,
    /// A `getUpdates` response.
    Response,
}

impl std::str::FromStr for PayloadShape {
    type Err = TgramError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "update" => Ok(Self::Update),
            "updates" => Ok(Self::Updates),
            "response" => Ok(Self::Response),
            other => Err(TgramError::Config(format!(
                "unknown payload shape {other:?}, expected auto, update, updates or response"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = TgramError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TgramError::Config(format!(
                "unknown output format {other:?}, expected text or json"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config: defaults → tgram.toml → env vars (env wins).
    ///
    /// Without an explicit path, `TGRAM_CONFIG` or `tgram.toml` is used.
    /// A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var_os("TGRAM_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };
        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        tracing::debug!(path = %path.display(), strict = config.decode.strict, "config loaded");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| TgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| TgramError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Override fields from `TGRAM_*` variables looked up through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = var("TGRAM_STRICT") {
            self.decode.strict = parse_bool("TGRAM_STRICT", &v)?;
        }
        if let Some(v) = var("TGRAM_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = var("TGRAM_OUTPUT") {
            self.output.format = v.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(TgramError::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(TgramError::Config(format!("{name} must be a boolean, got {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.decode.strict);
        assert_eq!(config.decode.payload, PayloadShape::Auto);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[decode]
strict = false
payload = "response"

[output]
format = "json"
"#
        )
        .unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.decode.strict);
        assert_eq!(config.decode.payload, PayloadShape::Response);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[decode]\npayload = \"xml\"").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TgramError::Config(_)));
    }

    #[test]
    fn test_env_wins() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("TGRAM_STRICT", "false"),
                ("TGRAM_LOG_LEVEL", "tgram=debug"),
                ("TGRAM_OUTPUT", "json"),
            ]))
            .unwrap();
        assert!(!config.decode.strict);
        assert_eq!(config.logging.level, "tgram=debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_env_rejected() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[("TGRAM_STRICT", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("TGRAM_STRICT"));
        let err = config.apply_env(env(&[("TGRAM_OUTPUT", "yaml")])).unwrap_err();
        assert!(matches!(err, TgramError::Config(_)));
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_payload_shape_parse() {
        assert_eq!("updates".parse::<PayloadShape>().unwrap(), PayloadShape::Updates);
        assert!("batch".parse::<PayloadShape>().is_err());
    }
}
