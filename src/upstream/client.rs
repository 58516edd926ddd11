//! reqwest-backed implementation of [`BuildezApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::models::{
    AiBuilderRequest, AiBuilderResponse, BuildWebsiteRequest, BuildWebsiteResponse,
    CheckWebIdResponse,
};
use super::{ApiError, BuildezApi};

/// Full website generation includes AI editing on the remote side.
pub const API_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct BuildezClient {
    http: Client,
    base_url: String,
}

impl BuildezClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("buildez-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a request and decode its JSON body, aborting after `timeout`.
    ///
    /// Non-2xx statuses become [`ApiError::Status`] carrying the response text.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        timeout: Duration,
    ) -> Result<T, ApiError> {
        let call = async {
            let response = request
                .header(CONTENT_TYPE, "application/json")
                .send()
                .await
                .map_err(ApiError::Transport)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            response.json::<T>().await.map_err(ApiError::Decode)
        };

        tokio::time::timeout(timeout, call)
            .await
            .map_err(|_| ApiError::Timeout { after: timeout })?
    }
}

#[async_trait]
impl BuildezApi for BuildezClient {
    async fn check_web_id(&self, web_id: &str) -> Result<bool, ApiError> {
        let request = self
            .http
            .get(self.url("/api/check-webid"))
            .query(&[("webId", web_id)]);

        let response: CheckWebIdResponse = self.execute(request, CHECK_TIMEOUT).await?;
        Ok(response.available)
    }

    async fn select_plugins(
        &self,
        request: &AiBuilderRequest,
    ) -> Result<AiBuilderResponse, ApiError> {
        let request = self.http.post(self.url("/api/ai-builder")).json(request);
        self.execute(request, API_TIMEOUT).await
    }

    async fn build_website(
        &self,
        request: &BuildWebsiteRequest,
    ) -> Result<BuildWebsiteResponse, ApiError> {
        let request = self.http.post(self.url("/api/build-website")).json(request);
        self.execute(request, API_TIMEOUT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = BuildezClient::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/api/ai-builder"),
            "http://localhost:3000/api/ai-builder"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API error (502): bad gateway");
    }
}
