/// Source of environment variables for settings
///
/// Settings read through this trait instead of `std::env` so tests can supply
/// their own values without touching process-wide state.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables for tests
#[cfg(test)]
#[derive(Default)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_reads_process_env() {
        let provider = SystemEnvironment;

        unsafe {
            std::env::set_var("WIDGET_SERVICE_TEST_VAR", "present");
        }

        assert_eq!(
            provider.get_var("WIDGET_SERVICE_TEST_VAR"),
            Some("present".to_string())
        );
        assert_eq!(provider.get_var("WIDGET_SERVICE_MISSING_VAR"), None);

        unsafe {
            std::env::remove_var("WIDGET_SERVICE_TEST_VAR");
        }
    }

    #[test]
    fn test_mock_environment() {
        let provider = MockEnvironment::empty()
            .with_var("HOST", "127.0.0.1")
            .with_vars(&[("PORT", "8080"), ("SWAGGER_ENABLED", "false")]);

        assert_eq!(provider.get_var("HOST"), Some("127.0.0.1".to_string()));
        assert_eq!(provider.get_var("PORT"), Some("8080".to_string()));
        assert_eq!(provider.get_var("SWAGGER_ENABLED"), Some("false".to_string()));
        assert_eq!(provider.get_var("LOG_LEVEL"), None);
    }
}
