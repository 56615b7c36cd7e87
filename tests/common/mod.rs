#![allow(dead_code)]

use httpmock::MockServer;
use image::{ImageFormat, Rgb, RgbImage};
use newscard::config::DEFAULT_FONT_PATH;
use newscard::AppConfig;
use std::io::Cursor;
use std::path::PathBuf;

pub fn bundled_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FONT_PATH)
}

/// Every collaborator points at the mock server.
pub fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.image_model_url = server.url("/models/sdxl");
    config.upstream.summarizer_url = server.url("/models/t5");
    config.upstream.news_api_url = server.url("/v2/everything");
    config.upstream.hf_token = "hf_test".to_string();
    config.upstream.news_api_key = "news_test".to_string();
    config.render.font_path = "/nonexistent/Sanseriffic.otf".to_string();
    config
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    });
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}
