//! Orchestrates a website build against the Buildez API.

use std::sync::Arc;

use log::info;
use serde::Serialize;
use serde_json::Value;

use super::availability::resolve_available_web_id;
use super::slug::generate_web_id;
use super::validation::BuildWebsiteArgs;
use super::{WebsiteError, BUILD_FAILED_MESSAGE, NO_PLUGINS_MESSAGE};
use crate::upstream::{AiBuilderRequest, BuildWebsiteRequest, BuildezApi};

/// Steps shown to the user after a successful build.
pub const INSTRUCTIONS: [&str; 4] = [
    "1. Open the Editor URL above",
    "2. Wait 1-2 minutes for AI to customize all content",
    "3. Review and edit text, images, colors as needed",
    "4. Click 'Publish' when ready",
];

/// Success payload of `build_website`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutcome {
    pub success: bool,
    pub message: String,
    pub editor_url: String,
    pub project_id: String,
    pub website_type: Option<String>,
    pub plugins_used: usize,
    pub plugins: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Clone)]
pub struct WebsiteBuilder {
    api: Arc<dyn BuildezApi>,
    editor_url: String,
}

impl WebsiteBuilder {
    pub fn new(api: Arc<dyn BuildezApi>, editor_url: impl Into<String>) -> Self {
        let editor_url: String = editor_url.into();
        Self {
            api,
            editor_url: editor_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn editor_link(&self, web_id: &str) -> String {
        format!("{}/editor/{}", self.editor_url, web_id)
    }

    /// Select plugins, reserve a web id, and build the site, strictly in that
    /// order. The build request depends on the selection output.
    pub async fn build(&self, args: BuildWebsiteArgs) -> Result<BuildOutcome, WebsiteError> {
        let args = args.validate().map_err(WebsiteError::InvalidArgument)?;
        let business_name = args.business_name.as_str();
        info!("building website for: {business_name}");

        info!("step 1: analyzing requirements and selecting plugins");
        let selection = self
            .api
            .select_plugins(&AiBuilderRequest::new(business_name, &args.description))
            .await?;

        let plugins = match selection.selected_plugins {
            Some(ref plugins) if !plugins.is_empty() => plugins.clone(),
            _ => {
                let message = selection
                    .error
                    .clone()
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| NO_PLUGINS_MESSAGE.to_string());
                return Err(WebsiteError::NoPlugins(message));
            }
        };
        info!(
            "selected {} plugins, website type: {}",
            plugins.len(),
            selection.website_type.as_deref().unwrap_or("unknown")
        );

        let base_web_id = generate_web_id(business_name);
        info!("base web id: {base_web_id}");
        let web_id = resolve_available_web_id(self.api.as_ref(), &base_web_id).await;
        info!("final web id: {web_id}");

        info!("step 2: building website with AI customization");
        let explanation = [
            selection.enhanced_prompt.as_deref(),
            selection.explanation.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or(args.description.as_str())
        .to_string();

        let suggestions = selection.color_font_suggestions.as_ref();
        let request = BuildWebsiteRequest {
            selected_plugins: plugins.clone(),
            website_type: selection.website_type.clone(),
            explanation,
            project_name: business_name.to_string(),
            custom_web_id: web_id.clone(),
            custom_colors: suggestions.map(|s| s.colors()),
            custom_fonts: suggestions.map(|s| s.fonts()),
        };

        let response = self.api.build_website(&request).await?;
        if !response.success {
            let message = response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| BUILD_FAILED_MESSAGE.to_string());
            return Err(WebsiteError::BuildFailed(message));
        }

        let editor_url = self.editor_link(&web_id);
        info!("website built successfully, editor URL: {editor_url}");

        Ok(BuildOutcome {
            success: true,
            message: format!("Website \"{business_name}\" created successfully!"),
            editor_url,
            project_id: web_id,
            website_type: selection.website_type,
            plugins_used: plugins.len(),
            plugins: plugin_ids(&plugins),
            instructions: INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

fn plugin_ids(plugins: &[Value]) -> Vec<String> {
    plugins
        .iter()
        .filter_map(|p| p.get("plugin").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
