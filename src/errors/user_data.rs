use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserDataError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("user Id not found")]
    MissingUserId,

    #[error("Failed to fetch user data")]
    InternalServerError,
}

impl IntoResponse for UserDataError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            UserDataError::Unauthorized => StatusCode::UNAUTHORIZED,
            UserDataError::MissingUserId => StatusCode::BAD_REQUEST,
            UserDataError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
