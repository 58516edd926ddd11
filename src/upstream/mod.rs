//! Client for the Buildez platform API.
//!
//! The orchestrator talks to the platform through the [`BuildezApi`] trait so
//! tests can substitute scripted responses; [`BuildezClient`] is the HTTP
//! implementation used in production.

pub mod client;
pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use client::BuildezClient;
pub use models::{
    AiBuilderRequest, AiBuilderResponse, BuildWebsiteRequest, BuildWebsiteResponse,
    ColorFontSuggestions, CustomColors, CustomFonts,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("API request timed out after {}s", after.as_secs())]
    Timeout { after: Duration },
    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode API response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait BuildezApi: Send + Sync {
    /// `GET /api/check-webid`: whether `web_id` is still free.
    async fn check_web_id(&self, web_id: &str) -> Result<bool, ApiError>;

    /// `POST /api/ai-builder`
    async fn select_plugins(&self, request: &AiBuilderRequest)
        -> Result<AiBuilderResponse, ApiError>;

    /// `POST /api/build-website`
    async fn build_website(
        &self,
        request: &BuildWebsiteRequest,
    ) -> Result<BuildWebsiteResponse, ApiError>;
}
