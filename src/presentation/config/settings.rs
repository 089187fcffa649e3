use std::path::PathBuf;

use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

/// Secret that enables the Format action. Checked as an environment variable
/// fallback when the config layers leave the key empty.
const API_KEY_ENV: &str = "EURIAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub tts: TtsSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// Empty means "not configured": the Format action degrades to a
    /// user-facing error instead of the process failing to start.
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsSettings {
    /// When set, all synthesis requests go to this base URL instead of the
    /// accent-specific translate.google host.
    pub host_override: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Scratch directory for generated audio. Defaults to a subdirectory of
    /// the system temp dir.
    pub scratch_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layer `appsettings.<environment>.toml` (optional) under `APP_*`
    /// environment variables, then fall back to `EURIAI_API_KEY` for the
    /// completion secret.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                settings.llm.api_key = key;
            }
        }

        Ok(settings)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.storage
            .scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("voicechef"))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: crate::infrastructure::llm::DEFAULT_BASE_URL.to_string(),
            default_model: "gpt-4.1-mini".to_string(),
        }
    }
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            host_override: None,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { scratch_dir: None }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
