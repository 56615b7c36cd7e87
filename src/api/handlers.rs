use crate::api::AppState;
use crate::domain::model::ImageRequest;
use crate::utils::error::AppError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

pub async fn root_handler() -> &'static str {
    "newscard is running"
}

/// Latest blurb for a random tracked company, or "" when there is none.
pub async fn hello_handler(State(state): State<AppState>) -> Result<Json<String>, AppError> {
    let headline = state.headlines.latest_headline().await?;
    Ok(Json(headline))
}

/// Malformed bodies are answered with the same `{"detail": ...}` shape as every other failure.
pub async fn generate_image_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest {
        status: rejection.status().as_u16(),
        message: rejection.body_text(),
    })?;
    let png = state.pipeline.run(&request.prompt).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
