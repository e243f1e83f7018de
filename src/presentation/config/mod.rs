mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    API_KEY_ENV, ExtractionSettings, LoggingSettings, ProviderKind, ProviderSettings,
    ServerSettings, Settings, StorageSettings,
};
