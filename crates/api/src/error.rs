//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use body_language::BodyLanguageError;
use clip_capture::ClipError;
use eye_contact::EyeContactError;
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;
use vocal_confidence::VocalError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Clip(#[from] ClipError),

    #[error("Invalid landmarks: {0}")]
    InvalidLandmarks(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Analysis task failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Clip(ClipError::UnsupportedFormat { .. }) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Clip(_) | ApiError::InvalidLandmarks(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Transcription(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<BodyLanguageError> for ApiError {
    fn from(err: BodyLanguageError) -> Self {
        match err {
            BodyLanguageError::Clip(e) => ApiError::Clip(e),
            other => ApiError::InvalidLandmarks(other.to_string()),
        }
    }
}

impl From<EyeContactError> for ApiError {
    fn from(err: EyeContactError) -> Self {
        match err {
            EyeContactError::Clip(e) => ApiError::Clip(e),
            other => ApiError::InvalidLandmarks(other.to_string()),
        }
    }
}

impl From<VocalError> for ApiError {
    fn from(err: VocalError) -> Self {
        match err {
            VocalError::Clip(e) => ApiError::Clip(e),
            VocalError::Transcription(msg) => ApiError::Transcription(msg),
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unsupported = ApiError::from(BodyLanguageError::Clip(ClipError::UnsupportedFormat {
            extension: Some("mov".into()),
        }));
        assert_eq!(unsupported.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let incomplete = ApiError::from(EyeContactError::Clip(ClipError::IncompleteLandmarks {
            expected: 468,
            actual: 33,
        }));
        assert_eq!(incomplete.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let unreadable = ApiError::from(ClipError::Unreadable("empty".into()));
        assert_eq!(unreadable.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let offline = ApiError::from(VocalError::Transcription("timeout".into()));
        assert_eq!(offline.status(), StatusCode::BAD_GATEWAY);
    }
}
