mod loader;
mod model;

pub use loader::{
    ConfigLoader, ConfigSource, DiskSource, FileConfigLoader, LOCAL_CONFIG_NAME, USER_CONFIG_NAME,
};
pub use model::{Config, CustomLanguageConfig, LimitsConfig, ScannerConfig};
