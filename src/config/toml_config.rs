use crate::core::{ConfigProvider, DocumentSchema};
use crate::utils::error::{AgendaError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_tag_name, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub document: DocumentSchema,
    pub load: LoadConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn default_output_file() -> String {
    "agenda.txt".to_string()
}

const LOG_FORMATS: [&str; 2] = ["compact", "json"];
/// Most verbose first.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DEBUG: usize = 1;
const INFO: usize = 2;

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| AgendaError::ConfigError {
                message: format!("cannot read config file {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Parse with `${VAR}` values taken from `lookup` instead of the process environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_env_vars(content, lookup);

        toml::from_str(&processed_content).map_err(|e| AgendaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with its looked-up value; unknown variables stay as written.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ENV_VAR_RE
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.input_path", &self.source.input_path)?;
        validate_file_extension("source.input_path", &self.source.input_path, &["xml"])?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_path("load.output_file", &self.load.output_file)?;

        validate_tag_name("document.event", &self.document.event)?;
        validate_tag_name("document.place", &self.document.place)?;
        validate_tag_name("document.genre", &self.document.genre)?;
        validate_tag_name("document.text", &self.document.text)?;

        if let Some(level) = self.configured_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(AgendaError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !LOG_FORMATS.contains(&format) {
                return Err(AgendaError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!("Unsupported format. Valid formats: {}", LOG_FORMATS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format == "json")
    }

    fn configured_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Level for the crate's own log target.
    ///
    /// `logging.level` when it names a known level, `info` otherwise. `verbose`
    /// raises anything quieter than `debug` to `debug`.
    pub fn log_level(&self, verbose: bool) -> &'static str {
        let configured = self
            .configured_level()
            .and_then(|level| {
                let level = level.to_ascii_lowercase();
                LOG_LEVELS.iter().position(|known| *known == level)
            })
            .unwrap_or(INFO);
        let index = if verbose { configured.min(DEBUG) } else { configured };
        LOG_LEVELS[index]
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }

    fn schema(&self) -> &DocumentSchema {
        &self.document
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
