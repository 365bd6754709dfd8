use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::{ConfigSpec, ConfigValueSource};
use crate::config::env_provider::{EnvironmentProvider, SystemEnvironment};
use crate::config::errors::ApplicationError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";

/// Settings needed to bind and expose the HTTP server
pub struct ServerSettings {
    host: String,
    port: u16,
    swagger_enabled: bool,
}

impl ServerSettings {
    /// Load HOST, PORT and SWAGGER_ENABLED, falling back to defaults
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value(DEFAULT_HOST)
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value(DEFAULT_PORT)
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let swagger_spec = ConfigSpec::new(env_provider)
            .env_override("SWAGGER_ENABLED")
            .default_value("true");

        let host = host_spec.load_setting_with_source()?.value;
        let port = ConfigSpec::parse_port(&port_spec.load_setting_with_source()?.value, "PORT")?;

        let swagger = swagger_spec.load_setting_with_source()?;
        if let ConfigValueSource::EnvironmentVariable { name } = &swagger.source {
            tracing::debug!("Swagger UI toggle taken from {}", name);
        }
        let swagger_enabled = ConfigSpec::parse_bool(&swagger.value, "SWAGGER_ENABLED")?;

        Ok(Self {
            host,
            port,
            swagger_enabled,
        })
    }

    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn swagger_enabled(&self) -> bool {
        self.swagger_enabled
    }

    /// Address for the TCP listener; IPv6 literals are bracketed
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Base URL advertised in the OpenAPI document
    pub fn server_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            host => host,
        };
        if host.contains(':') {
            format!("http://[{}]:{}", host, self.port)
        } else {
            format!("http://{}:{}", host, self.port)
        }
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("swagger_enabled", &self.swagger_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    fn load(vars: &[(&str, &str)]) -> Result<ServerSettings, ApplicationError> {
        ServerSettings::from_env_provider(Arc::new(MockEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_server_settings_with_defaults() {
        let settings = load(&[]).unwrap();

        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 3000);
        assert!(settings.swagger_enabled());
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(settings.server_url(), "http://localhost:3000");
    }

    #[test]
    fn test_server_settings_from_env() {
        let settings = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SWAGGER_ENABLED", "off"),
        ])
        .unwrap();

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8080);
        assert!(!settings.swagger_enabled());
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.server_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_server_settings_empty_host_fails_validation() {
        match load(&[("HOST", "")]) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "HOST");
                assert!(reason.contains("cannot be empty"));
            }
            other => panic!("Expected InvalidSetting for HOST, got: {:?}", other),
        }
    }

    #[test]
    fn test_server_settings_invalid_port() {
        match load(&[("PORT", "not_a_number")]) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("Expected port number between 1 and 65535"));
            }
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_server_settings_port_boundaries() {
        assert!(load(&[("PORT", "0")]).is_err());
        assert_eq!(load(&[("PORT", "1")]).unwrap().port(), 1);
        assert_eq!(load(&[("PORT", "65535")]).unwrap().port(), 65535);
        assert!(load(&[("PORT", "65536")]).is_err());
    }

    #[test]
    fn test_server_settings_invalid_swagger_flag() {
        match load(&[("SWAGGER_ENABLED", "sometimes")]) {
            Err(ApplicationError::ParseError { setting_name, .. }) => {
                assert_eq!(setting_name, "SWAGGER_ENABLED");
            }
            other => panic!("Expected ParseError, got: {:?}", other),
        }
    }

    #[test]
    fn test_server_settings_ipv6_host() {
        let settings = load(&[("HOST", "::1"), ("PORT", "8080")]).unwrap();

        assert_eq!(settings.bind_address(), "[::1]:8080");
        assert_eq!(settings.server_url(), "http://[::1]:8080");
    }
}
