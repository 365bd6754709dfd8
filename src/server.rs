use std::sync::Arc;

use poem::endpoint::BoxEndpoint;
use poem::middleware::CatchPanic;
use poem::{listener::TcpListener, Endpoint, EndpointExt, Route, Server};
use poem_openapi::error::ParseRequestPayloadError;
use poem_openapi::OpenApiService;

use crate::api::{HealthApi, WidgetApi};
use crate::app_data::AppData;
use crate::config::ServerSettings;
use crate::errors::WidgetApiError;

pub const API_TITLE: &str = "Widget Service";
pub const API_PREFIX: &str = "/v1";
pub const SWAGGER_PATH: &str = "/swagger";

pub type WidgetApiService = OpenApiService<(HealthApi, WidgetApi), ()>;

/// Build the OpenAPI service for every endpoint, advertised under `server_url`
pub fn build_api_service(app_data: Arc<AppData>, server_url: &str) -> WidgetApiService {
    OpenApiService::new(
        (HealthApi, WidgetApi::new(app_data)),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}{}", server_url, API_PREFIX))
}

/// Compose the routes: the API under /v1 and, when enabled, Swagger UI under /swagger
pub fn build_app(app_data: Arc<AppData>, settings: &ServerSettings) -> BoxEndpoint<'static> {
    let api_service = build_api_service(app_data, &settings.server_url());

    let route = if settings.swagger_enabled() {
        let ui = api_service.swagger_ui();
        Route::new().nest(API_PREFIX, api_service).nest(SWAGGER_PATH, ui)
    } else {
        Route::new().nest(API_PREFIX, api_service)
    };

    with_error_handling(route)
}

/// Render unparseable bodies and handler panics as `WidgetApiError` JSON
pub fn with_error_handling<E>(endpoint: E) -> BoxEndpoint<'static>
where
    E: Endpoint + 'static,
{
    endpoint
        .catch_error(|err: ParseRequestPayloadError| async move {
            tracing::warn!("Rejected unparseable request body: {}", err.reason);
            WidgetApiError::unparseable_body(&err.reason)
        })
        .with(CatchPanic::new().with_handler(
            |_panic: Box<dyn std::any::Any + Send + 'static>| {
                tracing::error!("Request handler panicked");
                WidgetApiError::internal_server_error()
            },
        ))
        .boxed()
}

/// Serve until Ctrl-C
pub async fn run(app_data: Arc<AppData>, settings: &ServerSettings) -> std::io::Result<()> {
    let app = build_app(app_data, settings);
    let bind_address = settings.bind_address();

    tracing::info!("Starting server on {}", bind_address);
    tracing::info!("API endpoints available at {}{}", settings.server_url(), API_PREFIX);
    if settings.swagger_enabled() {
        tracing::info!("Swagger UI available at {}{}", settings.server_url(), SWAGGER_PATH);
    }

    Server::new(TcpListener::bind(bind_address))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await
}
