//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` for the `tools/*` methods.

use log::error;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::mcp::content::ToolResult;
use crate::mcp::website::{BuildWebsiteArgs, WebsiteBuilder};

use super::build_website;

/// Tool descriptor as returned by `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

/// Registry of every tool this server exposes.
pub struct ToolRegistry {
    website: WebsiteBuilder,
}

impl ToolRegistry {
    pub fn new(website: WebsiteBuilder) -> Self {
        Self { website }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![build_website::descriptor()]
    }

    /// Call a tool by name.
    ///
    /// Failures inside a known tool come back as an `isError` result; only an
    /// unknown name is an `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolResult, UnknownTool> {
        match name {
            build_website::TOOL_NAME => Ok(self.call_build_website(arguments).await),
            _ => Err(UnknownTool(name.to_string())),
        }
    }

    async fn call_build_website(&self, arguments: Option<Value>) -> ToolResult {
        let args = match parse_arguments(arguments) {
            Ok(args) => args,
            Err(message) => return failure_result(message),
        };

        match self.website.build(args).await {
            Ok(outcome) => ToolResult::success_json(&outcome),
            Err(err) => failure_result(err.to_string()),
        }
    }
}

fn failure_result(message: String) -> ToolResult {
    error!("build_website failed: {message}");
    ToolResult::error_json(&json!({
        "success": false,
        "error": message,
    }))
}

fn parse_arguments(arguments: Option<Value>) -> Result<BuildWebsiteArgs, String> {
    match arguments {
        None | Some(Value::Null) => Ok(BuildWebsiteArgs::default()),
        Some(value) => {
            serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{
        AiBuilderRequest, AiBuilderResponse, ApiError, BuildWebsiteRequest,
        BuildWebsiteResponse, BuildezApi,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UnreachableApi;

    #[async_trait]
    impl BuildezApi for UnreachableApi {
        async fn check_web_id(&self, _web_id: &str) -> Result<bool, ApiError> {
            Err(ApiError::Status {
                status: 503,
                body: "down".to_string(),
            })
        }

        async fn select_plugins(
            &self,
            _request: &AiBuilderRequest,
        ) -> Result<AiBuilderResponse, ApiError> {
            Err(ApiError::Status {
                status: 503,
                body: "down".to_string(),
            })
        }

        async fn build_website(
            &self,
            _request: &BuildWebsiteRequest,
        ) -> Result<BuildWebsiteResponse, ApiError> {
            Err(ApiError::Status {
                status: 503,
                body: "down".to_string(),
            })
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new(WebsiteBuilder::new(
            Arc::new(UnreachableApi),
            "https://buildez.ai",
        ))
    }

    fn error_payload(result: &ToolResult) -> Value {
        serde_json::from_str(result.first_text().unwrap()).unwrap()
    }

    #[test]
    fn test_lists_exactly_one_tool() {
        let tools = registry().list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "build_website");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = registry().call_tool("delete_website", None).await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: delete_website");
    }

    #[tokio::test]
    async fn test_missing_arguments_become_failure_result() {
        let result = registry().call_tool("build_website", None).await.unwrap();
        assert!(result.is_error);
        let payload = error_payload(&result);
        assert_eq!(payload["success"], false);
        assert!(payload["error"]
            .as_str()
            .unwrap()
            .contains("Both businessName and description are required"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_become_failure_result() {
        let result = registry()
            .call_tool("build_website", Some(json!({ "businessName": 42 })))
            .await
            .unwrap();
        assert!(result.is_error);
        assert!(error_payload(&result)["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid arguments"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_wrapped() {
        let result = registry()
            .call_tool(
                "build_website",
                Some(json!({ "businessName": "Joe's Pizza", "description": "pizzeria" })),
            )
            .await
            .unwrap();

        assert!(result.is_error);
        assert_eq!(error_payload(&result)["error"], "API error (503): down");
    }
}
