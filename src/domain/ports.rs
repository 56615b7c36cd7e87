use crate::domain::model::{NewsQuery, NewsResponse, SummaryItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Text-to-image collaborator. Returns the encoded image exactly as received.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, inputs: &str) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Vec<SummaryItem>>;
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, query: &NewsQuery) -> Result<NewsResponse>;
}
