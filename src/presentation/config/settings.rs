use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub storage: StorageSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "deepl")]
    DeepL,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub document_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub pdf_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<env>`, `APP_*` variables and
    /// `DEEPL_API_KEY`, in increasing precedence.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let upload_dir = std::env::temp_dir().join("doc-translator-uploads");
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("provider.kind", "deepl")?
            .set_default("provider.request_timeout_secs", 60)?
            .set_default("provider.document_timeout_secs", 300)?
            .set_default("storage.upload_dir", upload_dir.to_string_lossy().into_owned())?
            .set_default("extraction.pdf_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("provider.api_key", api_key)?
            .build()?
            .try_deserialize()
    }

    pub fn api_key_configured(&self) -> bool {
        self.provider
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
