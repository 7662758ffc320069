use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation")]
    Validation(String),
    #[error("duplicate_email")]
    DuplicateEmail,

    // auth
    #[error("invalid_credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized(String),
    #[error("forbidden")]
    Forbidden(String),

    #[error("not_found")]
    NotFound(String),

    #[error("unexpected")]
    Unexpected(String),
}

#[derive(Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorResponse {
    Validation { message: String },
    DuplicateEmail { message: String },
    InvalidCredentials { message: String },
    Unauthorized { message: String },
    Forbidden { message: String },
    NotFound { message: String },
    Unexpected { message: String },
}

impl From<Error> for ErrorResponse {
    fn from(error: Error) -> Self {
        tracing::error!("{:?}", error);
        match error {
            Error::Validation(message) => Self::Validation { message },
            Error::DuplicateEmail => Self::DuplicateEmail {
                message: "User already exists".into(),
            },
            Error::InvalidCredentials => Self::InvalidCredentials {
                message: "Invalid credentials".into(),
            },
            Error::Unauthorized(message) => Self::Unauthorized { message },
            Error::Forbidden(message) => Self::Forbidden { message },
            Error::NotFound(message) => Self::NotFound { message },
            // internal detail stays in the log
            Error::Unexpected(_) => Self::Unexpected {
                message: "Server error".into(),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Error::Validation(_) | Error::DuplicateEmail => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials | Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut res = axum::Json(ErrorResponse::from(self)).into_response();
        *res.status_mut() = status;
        res
    }
}
