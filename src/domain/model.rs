use serde::{Deserialize, Serialize};

/// Body of `POST /generate-image/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

/// Payload accepted by both inference collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryItem {
    #[serde(default)]
    pub summary_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub keyword: String,
    pub from_date: String,
    pub language: String,
    pub sort_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}
