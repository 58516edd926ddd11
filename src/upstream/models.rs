//! Request and response bodies of the Buildez HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CheckWebIdResponse {
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiBuilderRequest {
    pub prompt: String,
    pub business_name: String,
}

impl AiBuilderRequest {
    pub fn new(business_name: &str, description: &str) -> Self {
        Self {
            prompt: format!("{business_name}: {description}"),
            business_name: business_name.to_string(),
        }
    }
}

/// Plugin selection returned by `/api/ai-builder`.
///
/// Plugin entries are kept as raw JSON so they reach `/api/build-website`
/// exactly as the selector produced them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiBuilderResponse {
    #[serde(default)]
    pub selected_plugins: Option<Vec<Value>>,
    #[serde(default)]
    pub website_type: Option<String>,
    #[serde(default)]
    pub enhanced_prompt: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub color_font_suggestions: Option<ColorFontSuggestions>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFontSuggestions {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub heading_font: Option<String>,
    #[serde(default)]
    pub body_font: Option<String>,
}

impl ColorFontSuggestions {
    pub fn colors(&self) -> CustomColors {
        CustomColors {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            accent: self.accent.clone(),
        }
    }

    pub fn fonts(&self) -> CustomFonts {
        CustomFonts {
            heading_font: self.heading_font.clone(),
            body_font: self.body_font.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFonts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildWebsiteRequest {
    pub selected_plugins: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_type: Option<String>,
    pub explanation: String,
    pub project_name: String,
    pub custom_web_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fonts: Option<CustomFonts>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildWebsiteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ai_builder_request_composes_prompt() {
        let request = AiBuilderRequest::new("Joe's Pizza", "family pizzeria");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["prompt"], "Joe's Pizza: family pizzeria");
        assert_eq!(body["businessName"], "Joe's Pizza");
    }

    #[test]
    fn test_ai_builder_response_tolerates_missing_fields() {
        let parsed: AiBuilderResponse =
            serde_json::from_value(json!({ "error": "quota exceeded" })).unwrap();
        assert!(parsed.selected_plugins.is_none());
        assert_eq!(parsed.error.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_build_request_omits_absent_customization() {
        let request = BuildWebsiteRequest {
            selected_plugins: vec![json!({ "plugin": "hero" })],
            website_type: Some("restaurant".to_string()),
            explanation: "pizza".to_string(),
            project_name: "Joe's Pizza".to_string(),
            custom_web_id: "joe-s-pizza".to_string(),
            custom_colors: None,
            custom_fonts: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["customWebId"], "joe-s-pizza");
        assert_eq!(body["selectedPlugins"][0]["plugin"], "hero");
        assert!(body.get("customColors").is_none());
        assert!(body.get("customFonts").is_none());
    }

    #[test]
    fn test_suggestions_split_into_colors_and_fonts() {
        let suggestions: ColorFontSuggestions = serde_json::from_value(json!({
            "primary": "#b22222",
            "accent": "#ffd700",
            "headingFont": "Playfair Display"
        }))
        .unwrap();

        let colors = serde_json::to_value(suggestions.colors()).unwrap();
        let fonts = serde_json::to_value(suggestions.fonts()).unwrap();
        assert_eq!(colors, json!({ "primary": "#b22222", "accent": "#ffd700" }));
        assert_eq!(fonts, json!({ "headingFont": "Playfair Display" }));
    }
}
