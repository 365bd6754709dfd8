use std::sync::Arc;

use clap::Parser;

use widget_service::cli::{execute_command, Cli};
use widget_service::config::{init_logging, ServerSettings};
use widget_service::AppData;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = ServerSettings::from_env().map_err(|e| {
        tracing::error!("Failed to load server settings: {}", e);
        e
    })?;
    tracing::debug!("Loaded {:?}", settings);

    let app_data = Arc::new(AppData::in_memory());

    execute_command(cli, app_data, &settings).await
}
