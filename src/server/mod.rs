//! MCP server implementation for the contact mail tools.
//!
//! This module provides the MCP protocol server that exposes the email tools
//! to the agent runtime through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactMailMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: ContactMailMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
