use crate::adapters::upstream_detail;
use crate::config::UpstreamConfig;
use crate::domain::model::{InferenceRequest, SummaryItem};
use crate::domain::ports::{ImageGenerator, Summarizer};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const IMAGE_SERVICE: &str = "image generation";
pub const SUMMARY_SERVICE: &str = "summarization";

/// Client for the hosted inference API. One bearer token covers both models.
pub struct InferenceClient {
    client: Client,
    token: String,
    image_model_url: String,
    summarizer_url: String,
}

impl InferenceClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            token: config.hf_token.clone(),
            image_model_url: config.image_model_url.clone(),
            summarizer_url: config.summarizer_url.clone(),
        }
    }

    /// POST `{"inputs": ...}` and return the body of a successful, non-empty response.
    async fn post_inputs(&self, url: &str, inputs: &str, service: &'static str) -> Result<Vec<u8>> {
        tracing::debug!("Making {} request to: {}", service, url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest {
                inputs: inputs.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", service, status);

        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!("{} failed with status {}", service, status);
            return Err(AppError::Upstream {
                service,
                status: status.as_u16(),
                detail: upstream_detail(&body),
            });
        }

        if body.is_empty() {
            return Err(AppError::EmptyResponse { service });
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for InferenceClient {
    async fn generate(&self, inputs: &str) -> Result<Vec<u8>> {
        let bytes = self
            .post_inputs(&self.image_model_url, inputs, IMAGE_SERVICE)
            .await?;
        tracing::debug!("Received {} bytes of image data", bytes.len());
        Ok(bytes)
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    async fn summarize(&self, text: &str) -> Result<Vec<SummaryItem>> {
        let body = self
            .post_inputs(&self.summarizer_url, text, SUMMARY_SERVICE)
            .await?;

        serde_json::from_slice(&body).map_err(|e| AppError::MalformedResponse {
            service: SUMMARY_SERVICE,
            reason: e.to_string(),
        })
    }
}
