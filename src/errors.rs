use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::evaluation::EvaluationErrorKind;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    pub fn kind(&self) -> EvaluationErrorKind {
        match self {
            AppError::Configuration(_) => EvaluationErrorKind::Configuration,
            AppError::Extraction(_) | AppError::UnsupportedMediaType(_) => {
                EvaluationErrorKind::Extraction
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: EvaluationErrorKind,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.kind(),
        })
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        AppError::Extraction(format!("unreadable PDF: {}", err))
    }
}
impl From<std::str::Utf8Error> for AppError {
    fn from(err: std::str::Utf8Error) -> Self {
        AppError::Extraction(format!("text is not valid UTF-8: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
