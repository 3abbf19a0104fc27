use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid folder path")]
    InvalidFolderPath,
    #[error("Non UTF-8 path encountered: {0:?}")]
    NonUTF8PathEncountered(std::ffi::OsString),

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

#[derive(Debug, Serialize)]
struct Body<'a> {
    error: &'a str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, status_message) = match &self {
            Error::InvalidFolderPath => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NonUTF8PathEncountered(_) | Error::Internal(_) => {
                tracing::error!(internal_error = ?self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };
        (status_code, Json(Body { error: &status_message })).into_response()
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Internal(value.into())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Internal(value.into())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::http::to_json;

    #[rstest]
    #[case(Error::InvalidFolderPath, StatusCode::BAD_REQUEST, "Invalid folder path")]
    #[case(
        std::io::Error::other("disk on fire").into(),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error"
    )]
    #[tokio::test]
    async fn test_into_response(
        #[case] error: Error,
        #[case] status_code: StatusCode,
        #[case] message: &str,
    ) {
        let response = error.into_response();
        assert_eq!(response.status(), status_code);
        assert_eq!(to_json(response).await, serde_json::json!({ "error": message }));
    }
}
