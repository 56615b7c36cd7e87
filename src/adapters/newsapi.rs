use crate::config::UpstreamConfig;
use crate::domain::model::{NewsQuery, NewsResponse};
use crate::domain::ports::NewsSource;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const NEWS_SERVICE: &str = "news";

pub struct NewsApiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            endpoint: config.news_api_url.clone(),
            api_key: config.news_api_key.clone(),
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, query: &NewsQuery) -> Result<NewsResponse> {
        tracing::debug!("Searching news for '{}' since {}", query.keyword, query.from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.keyword.as_str()),
                ("from", query.from_date.as_str()),
                ("language", query.language.as_str()),
                ("sortBy", query.sort_by.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("News response status: {}", status);

        if !status.is_success() {
            tracing::warn!("News lookup for '{}' failed with status {}", query.keyword, status);
            return Err(AppError::NewsUnavailable {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedResponse {
            service: NEWS_SERVICE,
            reason: e.to_string(),
        })
    }
}
