use crate::utils::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);

        if status.is_server_error() {
            tracing::error!(category = ?self.category(), status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::warn!(category = ?self.category(), status = status.as_u16(), "Request failed: {}", self);
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upstream_error_response() {
        let response = AppError::Upstream {
            service: "image generation",
            status: 503,
            detail: json!({"error": "Service Unavailable"}),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_json(response).await,
            json!({"detail": {"error": "Service Unavailable"}})
        );
    }

    #[tokio::test]
    async fn test_resource_error_is_internal() {
        let response = AppError::ResourceError {
            path: "./public/DejaVuSans.ttf".to_string(),
            reason: "No such file or directory".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Font resource unavailable"})
        );
    }

    #[tokio::test]
    async fn test_invalid_request_is_json_client_error() {
        let response = AppError::InvalidRequest {
            status: 422,
            message: "missing field `prompt`".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({"detail": "missing field `prompt`"})
        );
    }

    #[tokio::test]
    async fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let response = AppError::Upstream {
            service: "summarization",
            status: 42,
            detail: json!("weird"),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
