//! Core content types for MCP tool responses.

use serde::{Deserialize, Serialize};

/// Content item in a tool result (MCP wire format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
        }
    }

    /// Pretty-printed JSON rendered as a text block.
    pub fn json<T: Serialize>(value: &T) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
        Self::text(text)
    }
}

/// Result of a tool call (MCP wire format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn success_json<T: Serialize>(value: &T) -> Self {
        Self::success(vec![ContentItem::json(value)])
    }

    pub fn error_json<T: Serialize>(value: &T) -> Self {
        Self {
            content: vec![ContentItem::json(value)],
            is_error: true,
        }
    }

    /// Text of the first content block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|item| item.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_item_text() {
        let item = ContentItem::text("Hello world");
        assert_eq!(item.content_type, "text");
        assert_eq!(item.text, Some("Hello world".to_string()));
    }

    #[test]
    fn test_content_item_json_is_pretty() {
        let item = ContentItem::json(&json!({ "success": true }));
        assert_eq!(item.text.as_deref(), Some("{\n  \"success\": true\n}"));
    }

    #[test]
    fn test_tool_result_error_json() {
        let result = ToolResult::error_json(&json!({ "success": false, "error": "boom" }));
        assert!(result.is_error);
        assert!(result.first_text().unwrap().contains("\"error\": \"boom\""));
    }

    #[test]
    fn test_tool_result_wire_shape() {
        let result = ToolResult::success_json(&json!({ "ok": 1 }));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isError"], false);
        assert_eq!(value["content"][0]["type"], "text");
    }
}
