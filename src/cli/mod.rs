// Command line entry points

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::ServerSettings;
use crate::server;

/// Widget service CLI
#[derive(Parser, Debug)]
#[command(name = "widget-service")]
#[command(about = "CRUD backend for widgets over HTTP/JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the OpenAPI document as JSON and exit
    Openapi,
}

/// Execute CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `app_data` - Application data shared with the API
/// * `settings` - Server settings loaded at startup
pub async fn execute_command(
    cli: Cli,
    app_data: Arc<AppData>,
    settings: &ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            server::run(app_data, settings).await?;
        }
        Commands::Openapi => {
            let api_service = server::build_api_service(app_data, &settings.server_url());
            println!("{}", api_service.spec());
        }
    }

    Ok(())
}
