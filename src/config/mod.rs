#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use credentials::{load_api_key, load_api_key_from, load_dotenv, API_KEY_ENV};
pub use toml_config::TomlConfig;
