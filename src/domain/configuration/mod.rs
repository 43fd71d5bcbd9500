pub mod app_config;
pub mod loader;

pub use app_config::{
    AppConfig, CompaniesTableConfig, DataConfig, GenerationConfig, NewsTableConfig, OutputConfig,
    ProfilesTableConfig, PromptConfig,
};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content, resolve_path};
