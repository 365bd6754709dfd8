// Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::Arc;

use poem::endpoint::BoxEndpoint;
use poem::test::{TestClient, TestResponse};
use serde_json::{json, Value};
use widget_service::config::{EnvironmentProvider, ServerSettings};
use widget_service::server::build_app;
use widget_service::AppData;

/// Client over the full route tree
pub type TestApp = TestClient<BoxEndpoint<'static>>;

/// Fixed environment so tests never read or write process-wide variables
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
}

impl FixedEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl EnvironmentProvider for FixedEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn settings_with(vars: &[(&str, &str)]) -> ServerSettings {
    ServerSettings::from_env_provider(Arc::new(FixedEnvironment::new(vars)))
        .expect("test settings should be valid")
}

/// Full application over a fresh in-memory store, with default settings
pub fn setup_test_client() -> TestApp {
    setup_test_client_with(&[])
}

pub fn setup_test_client_with(vars: &[(&str, &str)]) -> TestApp {
    let app_data = Arc::new(AppData::in_memory());
    TestClient::new(build_app(app_data, &settings_with(vars)))
}

pub fn widget_json(name: &str, description: &str, price: f64) -> Value {
    json!({ "name": name, "description": description, "price": price })
}

pub async fn create_widget(cli: &TestApp, name: &str, description: &str, price: f64) {
    cli.post("/v1/widgets")
        .body_json(&widget_json(name, description, price))
        .send()
        .await
        .assert_status(poem::http::StatusCode::CREATED);
}

pub async fn body_json(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("response body should be JSON")
}
