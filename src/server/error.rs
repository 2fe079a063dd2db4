use crate::model::ErrorMessage;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures raised by an activity-retrieval collaborator.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced at the HTTP boundary.
///
/// Every variant renders as a 500 with a generic localized message; the
/// wrapped source is only ever written to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to retrieve activities: {0}")]
    ActivityRetrieval(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ActivityRetrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorMessage {
        match self {
            ApiError::ActivityRetrieval(_) => ErrorMessage::activities_fetch_failed(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ACTIVITIES_FETCH_FAILED;

    #[test]
    fn retrieval_failure_hides_source() {
        let error = ApiError::from(ServiceError::Unavailable("db host 10.0.0.3".to_string()));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body().message, ACTIVITIES_FETCH_FAILED);
        assert!(error.to_string().contains("db host 10.0.0.3"));
    }
}
