//! Tool definition for `build_website`.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "build_website";

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Build and deploy a complete website instantly. ",
            "When user wants a website, ask ONLY two questions: ",
            "1) Business name? 2) Brief description of the business? ",
            "Then immediately call this tool. ",
            "Do not ask about colors, style, framework, or technology - ",
            "the AI handles everything automatically."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "businessName": {
                "type": "string",
                "description": "Business name"
            },
            "description": {
                "type": "string",
                "description": "Brief description of what the business does"
            }
        },
        "required": ["businessName", "description"]
    })
}
