//! MCP server launcher
//!
//! Starts the MCP server over stdio.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use crate::config::load_config;
use crate::mcp::GulpTargetsServer;

/// Run the MCP server over stdio.
///
/// stdout carries the protocol, so logging must stay on stderr.
pub async fn run_mcp_server(config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;

    let server = GulpTargetsServer::with_config(config);

    let transport = (stdin(), stdout());

    tracing::info!("Serving MCP over stdio");
    let service = server.serve(transport).await?;

    service.waiting().await?;

    Ok(())
}
