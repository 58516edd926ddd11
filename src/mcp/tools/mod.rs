//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool provides a descriptor (name, description, input schema) and is
//! dispatched through [`ToolRegistry`].

pub mod build_website;
pub mod registry;

pub use registry::{ToolDescriptor, ToolRegistry, UnknownTool};
