//! MCP (Model Context Protocol) Module
//!
//! JSON-RPC 2.0 over STDIO or HTTP/SSE, exposing the `build_website` tool and
//! the `create_website` prompt.

pub mod content;
pub mod handlers;
pub mod prompts;
pub mod rpc;
pub mod service;
pub mod sse;
pub mod stdio;
pub mod tools;
pub mod website;

pub use handlers::{config, McpState};
pub use service::McpService;
