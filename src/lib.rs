//! Buildez MCP server.
//!
//! Lets AI assistants build websites on the Buildez platform through a single
//! MCP tool, `build_website`. Runs over STDIO (local clients) or HTTP/SSE
//! (remote deployment), selected by `MCP_MODE`.

use std::sync::Arc;

use anyhow::Context;
use env_logger::Env;

pub mod config;
pub mod mcp;
pub mod upstream;

pub use crate::config::{ServerConfig, TransportMode};
pub use crate::mcp::McpService;

use crate::mcp::prompts::PromptRegistry;
use crate::mcp::tools::ToolRegistry;
use crate::mcp::website::WebsiteBuilder;
use crate::upstream::BuildezClient;

/// Build the operation registry for `config`.
pub fn build_service(config: &ServerConfig) -> anyhow::Result<McpService> {
    let client = BuildezClient::new(config.api_url.as_str())
        .context("failed to create Buildez API client")?;
    let website = WebsiteBuilder::new(Arc::new(client), config.editor_url.as_str());

    Ok(McpService::new(
        ToolRegistry::new(website),
        PromptRegistry::new(),
    ))
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // env_logger writes to stderr, keeping stdout free for the STDIO transport.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    log::info!(
        "Buildez MCP server v{} (mode: {}, API: {})",
        env!("CARGO_PKG_VERSION"),
        config.mode,
        config.api_url
    );

    let service = build_service(&config)?;

    match config.mode {
        TransportMode::Stdio => mcp::stdio::run(service)
            .await
            .context("STDIO transport failed")?,
        TransportMode::Http => mcp::handlers::serve(service, config.port)
            .await
            .with_context(|| format!("HTTP server on port {} failed", config.port))?,
    }

    Ok(())
}
