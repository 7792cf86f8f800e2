// API error module
// Tagged error kinds mapped to distinct HTTP status codes

use hyper::StatusCode;

use crate::store::StoreError;

/// Errors surfaced to API clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("invalid request: {0}")]
    InvalidInput(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Io(e) => Self::Storage(e.to_string()),
            StoreError::Corrupt(e) => Self::Storage(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidInput("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Storage("disk".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::NotFound(42).into();
        assert!(matches!(err, ApiError::NotFound(42)));
        assert_eq!(err.to_string(), "task not found: 42");

        let io = StoreError::Io(std::io::Error::other("disk on fire"));
        let err: ApiError = io.into();
        assert!(matches!(err, ApiError::Storage(_)));
    }
}
