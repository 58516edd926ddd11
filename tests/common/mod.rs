//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use buildez_mcp::mcp::prompts::PromptRegistry;
use buildez_mcp::mcp::tools::ToolRegistry;
use buildez_mcp::mcp::website::WebsiteBuilder;
use buildez_mcp::upstream::BuildezClient;
use buildez_mcp::McpService;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EDITOR_URL: &str = "https://buildez.ai";

/// Service wired to `api_url`, with no network activity until a tool runs.
pub fn service_for(api_url: &str) -> McpService {
    let client = BuildezClient::new(api_url).expect("client builds");
    let website = WebsiteBuilder::new(Arc::new(client), EDITOR_URL);
    McpService::new(ToolRegistry::new(website), PromptRegistry::new())
}

/// Service pointed at a closed local port.
pub fn offline_service() -> McpService {
    service_for("http://127.0.0.1:9")
}

pub fn tool_call(id: i64, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": "build_website", "arguments": arguments }
    })
}

/// Parse the JSON text block of a `tools/call` result.
pub fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"]
        .as_str()
        .expect("tool result carries a text block");
    serde_json::from_str(text).expect("text block is JSON")
}

pub async fn mock_availability(server: &MockServer, web_id: &str, available: bool) {
    Mock::given(method("GET"))
        .and(path("/api/check-webid"))
        .and(query_param("webId", web_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "available": available })))
        .with_priority(1)
        .mount(server)
        .await;
}

pub async fn mock_plugin_selection(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/ai-builder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mock_build(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/build-website"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn two_plugin_selection() -> Value {
    json!({
        "selectedPlugins": [
            { "plugin": "hero-banner", "config": { "layout": "centered" } },
            { "plugin": "menu-grid" }
        ],
        "websiteType": "restaurant",
        "explanation": "A restaurant site with a menu"
    })
}
