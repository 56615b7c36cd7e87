use crate::adapters::{InferenceClient, NewsApiClient};
use crate::config::AppConfig;
use crate::core::{HeadlineService, ImagePipeline, TextOverlay};
use std::sync::Arc;

/// Shared, read-only handles for the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ImagePipeline>,
    pub headlines: Arc<HeadlineService>,
}

impl AppState {
    pub fn new(pipeline: ImagePipeline, headlines: HeadlineService) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            headlines: Arc::new(headlines),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        let inference = Arc::new(InferenceClient::with_client(http.clone(), &config.upstream));
        let news = Arc::new(NewsApiClient::with_client(http, &config.upstream));

        let pipeline = ImagePipeline::new(
            inference.clone(),
            inference,
            TextOverlay::from_config(&config.render),
        );
        let headlines = HeadlineService::new(news, config.news.clone());

        Self::new(pipeline, headlines)
    }
}
