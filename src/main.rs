//! Contact Mail MCP Server - Main entry point
//!
//! Serves the contact-form and notification email tools over MCP (stdio).

use anyhow::Result;
use contact_mail_mcp_server::config::API_KEY_ENV;
use contact_mail_mcp_server::{
    Config, ContactMailMcpServer, ContactMailer, MailService, MailServiceImpl, MailerSettings,
    Metrics, ResendClient,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL from .env applies
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!(
        "Starting Contact Mail MCP Server with API URL: {}",
        config.api_url
    );
    if config.api_key.is_none() {
        warn!(
            "{} is not set; every send will report a configuration error",
            API_KEY_ENV
        );
    }

    // One metrics collector shared by the transport and the mailer
    let metrics = Metrics::new();
    let client = ResendClient::new(&config, metrics.clone());

    let mailer = ContactMailer::new(
        Arc::new(client),
        config.api_key.clone(),
        MailerSettings::from_config(&config),
    )
    .with_metrics(metrics.clone());

    let mail_service = Arc::new(MailServiceImpl::new(mailer)) as Arc<dyn MailService>;
    let server = ContactMailMcpServer::new(mail_service);

    info!("Contact Mail MCP Server initialized");
    info!("Request timeout: {} seconds", config.request_timeout);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contact_mail_mcp_server::server::run_server(server).await?;

    info!("Shutdown metrics: {}", metrics.summary());
    info!("Contact Mail MCP Server shutdown complete");
    Ok(())
}
