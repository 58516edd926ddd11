//! MCP prompt templates.

pub mod create_website;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct PromptDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetPromptResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: PromptContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl PromptContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown prompt: {0}")]
pub struct UnknownPrompt(pub String);

/// Registry of the prompt templates this server exposes.
#[derive(Debug, Default)]
pub struct PromptRegistry;

impl PromptRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn list_prompts(&self) -> Vec<PromptDescriptor> {
        vec![create_website::descriptor()]
    }

    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&Value>,
    ) -> Result<GetPromptResult, UnknownPrompt> {
        match name {
            create_website::PROMPT_NAME => Ok(create_website::render(arguments)),
            _ => Err(UnknownPrompt(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_exactly_one_prompt() {
        let prompts = PromptRegistry::new().list_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "create_website");
    }

    #[test]
    fn test_unknown_prompt() {
        let err = PromptRegistry::new().get_prompt("summarize", None).unwrap_err();
        assert_eq!(err, UnknownPrompt("summarize".to_string()));
        assert_eq!(err.to_string(), "Unknown prompt: summarize");
    }
}
