pub mod config_spec;
pub mod env_provider;
pub mod errors;
pub mod logging;
pub mod server_settings;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use server_settings::ServerSettings;
