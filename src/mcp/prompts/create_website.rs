//! Prompt template `create_website`.

use serde_json::Value;

use super::{GetPromptResult, PromptArgument, PromptContent, PromptDescriptor, PromptMessage};

pub const PROMPT_NAME: &str = "create_website";

pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: PROMPT_NAME.to_string(),
        title: Some("Create Website".to_string()),
        description: Some("Build a complete website for your business".to_string()),
        arguments: vec![
            PromptArgument {
                name: "businessName".to_string(),
                description: Some("Your business name".to_string()),
                required: true,
            },
            PromptArgument {
                name: "description".to_string(),
                description: Some(
                    "What does your business do? (services, location, target audience)"
                        .to_string(),
                ),
                required: true,
            },
        ],
    }
}

/// Render the prompt; missing arguments render as empty strings.
pub fn render(arguments: Option<&Value>) -> GetPromptResult {
    let argument = |key: &str| {
        arguments
            .and_then(|args| args.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let business_name = argument("businessName");
    let description = argument("description");

    GetPromptResult {
        description: Some(format!("Create a website for {business_name}")),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: PromptContent::text(format!(
                "Build a website for \"{business_name}\". Business description: {description}"
            )),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_requires_both_arguments() {
        let desc = descriptor();
        assert_eq!(desc.name, PROMPT_NAME);
        assert_eq!(desc.arguments.len(), 2);
        assert!(desc.arguments.iter().all(|a| a.required));
    }

    #[test]
    fn test_render() {
        let args = json!({ "businessName": "Joe's Pizza", "description": "family pizzeria" });
        let result = render(Some(&args));

        assert_eq!(result.description.as_deref(), Some("Create a website for Joe's Pizza"));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, "user");
        assert_eq!(
            result.messages[0].content.text,
            "Build a website for \"Joe's Pizza\". Business description: family pizzeria"
        );
    }

    #[test]
    fn test_render_without_arguments() {
        let result = render(None);
        assert_eq!(
            result.messages[0].content.text,
            "Build a website for \"\". Business description: "
        );
    }
}
