#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_date, validate_finite_range, validate_non_empty_string, validate_path, validate_range, validate_secret,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/utrobinmv/t5_summary_en_ru_zh_base_2048";
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_FONT_PATH: &str = "./public/DejaVuSans.ttf";
pub const DEFAULT_FONT_SIZE: f32 = 55.0;

/// Process-wide settings, built once at startup and handed to whatever issues
/// outbound requests or draws.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub render: RenderConfig,
    pub news: NewsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub image_model_url: String,
    pub summarizer_url: String,
    pub news_api_url: String,
    #[serde(skip_serializing)]
    pub hf_token: String,
    #[serde(skip_serializing)]
    pub news_api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub font_path: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub from_date: String,
    pub language: String,
    pub sort_by: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            image_model_url: DEFAULT_IMAGE_MODEL_URL.to_string(),
            summarizer_url: DEFAULT_SUMMARIZER_URL.to_string(),
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            hf_token: String::new(),
            news_api_key: String::new(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: DEFAULT_FONT_PATH.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            from_date: "2024-05-23".to_string(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        validate_url("upstream.image_model_url", &self.upstream.image_model_url)?;
        validate_url("upstream.summarizer_url", &self.upstream.summarizer_url)?;
        validate_url("upstream.news_api_url", &self.upstream.news_api_url)?;
        validate_secret("upstream.hf_token", &self.upstream.hf_token)?;
        validate_secret("upstream.news_api_key", &self.upstream.news_api_key)?;

        validate_path("render.font_path", &self.render.font_path)?;
        validate_finite_range("render.font_size", self.render.font_size, 1.0, 512.0)?;

        validate_date("news.from_date", &self.news.from_date)?;
        validate_non_empty_string("news.language", &self.news.language)?;
        validate_non_empty_string("news.sort_by", &self.news.sort_by)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
