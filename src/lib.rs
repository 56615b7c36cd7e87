pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::api::{router, AppState};
pub use crate::config::AppConfig;
pub use crate::core::{HeadlineService, ImagePipeline, TextOverlay};
pub use crate::utils::error::{AppError, Result};
