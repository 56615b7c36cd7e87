use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Upstream,
    Decode,
    Resource,
    Configuration,
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected request body: {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("{service} returned status {status}: {detail}")]
    Upstream {
        service: &'static str,
        status: u16,
        detail: serde_json::Value,
    },

    #[error("News service returned status {status}")]
    NewsUnavailable { status: u16 },

    #[error("Empty response from {service}")]
    EmptyResponse { service: &'static str },

    #[error("Failed to decode image data: {reason}")]
    MalformedImage { reason: String },

    #[error("Failed to decode response from {service}: {reason}")]
    MalformedResponse {
        service: &'static str,
        reason: String,
    },

    #[error("Summarization response contained no summary text")]
    MissingSummary,

    #[error("Font resource {path} unavailable: {reason}")]
    ResourceError { path: String, reason: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Image encoding failed: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidRequest { .. } => ErrorCategory::Request,
            AppError::Upstream { .. }
            | AppError::NewsUnavailable { .. }
            | AppError::EmptyResponse { .. }
            | AppError::MissingSummary
            | AppError::Transport(_) => ErrorCategory::Upstream,
            AppError::MalformedImage { .. } | AppError::MalformedResponse { .. } => {
                ErrorCategory::Decode
            }
            AppError::ResourceError { .. } => ErrorCategory::Resource,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::ImageEncode(_) | AppError::IoError(_) | AppError::Internal { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// HTTP status this error is reported with. Upstream statuses pass through.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidRequest { status, .. }
            | AppError::Upstream { status, .. }
            | AppError::NewsUnavailable { status } => *status,
            AppError::Transport(_) => 502,
            _ => 500,
        }
    }

    /// Body placed in the `detail` field of an error response.
    pub fn detail(&self) -> serde_json::Value {
        let message = match self {
            AppError::InvalidRequest { message, .. } => message.as_str(),
            AppError::Upstream { detail, .. } => return detail.clone(),
            AppError::NewsUnavailable { .. } => "Failed to fetch news",
            AppError::EmptyResponse { .. } => "Empty response from the API",
            AppError::MalformedImage { .. } => "Failed to decode the image data from the response",
            AppError::MalformedResponse { .. } => "Failed to decode the response from the API",
            AppError::MissingSummary => "Summarization response contained no summary text",
            AppError::ResourceError { .. } => "Font resource unavailable",
            AppError::Transport(_) => "Upstream service unreachable",
            AppError::ImageEncode(_) => "Failed to encode the composed image",
            AppError::Internal { .. } | AppError::IoError(_) => "Internal server error",
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => return self.to_string().into(),
        };
        serde_json::Value::String(message.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
