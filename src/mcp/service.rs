//! MCP Service - Core JSON-RPC 2.0 request handler.
//!
//! Shared by both transports: the stdio loop and the SSE sessions feed raw
//! messages through [`McpService::handle_message`].

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::mcp::prompts::{PromptDescriptor, PromptRegistry};
use crate::mcp::rpc::{OutboundResponse, RpcRequest, METHOD_NOT_FOUND};
use crate::mcp::tools::{ToolDescriptor, ToolRegistry};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "buildez-mcp-server";

/// Core MCP request handler.
#[derive(Clone)]
pub struct McpService {
    tools: Arc<ToolRegistry>,
    prompts: Arc<PromptRegistry>,
}

impl McpService {
    pub fn new(tools: ToolRegistry, prompts: PromptRegistry) -> Self {
        Self {
            tools: Arc::new(tools),
            prompts: Arc::new(prompts),
        }
    }

    /// Parse one raw JSON-RPC message and handle it.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<OutboundResponse> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to parse JSON-RPC message: {err}");
                return Some(OutboundResponse::parse_error(format!("Parse error: {err}")));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<RpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => Some(OutboundResponse::invalid_request(
                id,
                format!("Invalid request: {err}"),
            )),
        }
    }

    pub async fn handle_request(&self, request: RpcRequest) -> Option<OutboundResponse> {
        if request.jsonrpc != "2.0" {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::invalid_request(
                request.id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "ping" => Some(OutboundResponse::success(id, json!({}))),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params).await),
            "prompts/list" => Some(self.handle_list_prompts(id)),
            "prompts/get" => Some(self.handle_get_prompt(id, params)),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(OutboundResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!(
            "client requested initialization: {} v{} (protocol {})",
            parsed.client_info.name,
            parsed.client_info.version.as_deref().unwrap_or("unknown"),
            parsed.protocol_version.as_deref().unwrap_or("unspecified"),
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ImplementationInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Buildez MCP Server".to_string()),
            },
            capabilities: ServerCapabilities {
                tools: ListChangedCapability {
                    list_changed: false,
                },
                prompts: ListChangedCapability {
                    list_changed: false,
                },
            },
        };

        respond(id, &result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.tools.list_tools(),
            next_cursor: None,
        };
        respond(id, &payload)
    }

    async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!("calling tool: {}", parsed.name);
        match self.tools.call_tool(&parsed.name, parsed.arguments).await {
            Ok(result) => respond(id, &result),
            Err(unknown) => {
                warn!("{unknown}");
                OutboundResponse::error(id, METHOD_NOT_FOUND, unknown.to_string())
            }
        }
    }

    fn handle_list_prompts(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListPromptsResult {
            prompts: self.prompts.list_prompts(),
            next_cursor: None,
        };
        respond(id, &payload)
    }

    fn handle_get_prompt(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: GetPromptParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        match self.prompts.get_prompt(&parsed.name, parsed.arguments.as_ref()) {
            Ok(result) => respond(id, &result),
            Err(unknown) => {
                warn!("{unknown}");
                OutboundResponse::invalid_params(id, unknown.to_string())
            }
        }
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct InitializeParams {
    #[serde(rename = "protocolVersion", default)]
    protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    client_info: ClientInfo,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ListChangedCapability,
    prompts: ListChangedCapability,
}

#[derive(Debug, Serialize)]
struct ListChangedCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ListPromptsResult {
    prompts: Vec<PromptDescriptor>,
    #[serde(rename = "nextCursor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

fn respond<T: Serialize>(id: Option<Value>, payload: &T) -> OutboundResponse {
    match serde_json::to_value(payload) {
        Ok(value) => OutboundResponse::success(id, value),
        Err(err) => OutboundResponse::internal_error(id, format!("Serialization failed: {err}")),
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    serde_json::from_value(params.unwrap_or(Value::Null)).map_err(|err| err.to_string())
}
