pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod sampling;
pub mod server;
pub mod upstream;

pub use crate::constants::CONFIG_PATH;

pub use app::AppConfig;
pub use error::ConfigError;
pub use loader::ensure_env_loaded;
pub use sampling::{ActivityFilter, SamplingConfig};
pub use server::ServerConfig;
pub use upstream::{GeoapifyConfig, HttpConfig, WeatherXmConfig};
