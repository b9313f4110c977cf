use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // request level
    #[error("missing fields")]
    MissingFields,
    #[error("user exists")]
    DuplicateUser,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("bad request: {0}")]
    BadRequest(String),

    // store level
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
}

impl AppError {
    /// Message sent to the client. Store failures never leak their cause.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing fields",
            Self::DuplicateUser => "user exists",
            Self::InvalidCredentials => "invalid credentials",
            Self::BadRequest(_) => "invalid request body",
            Self::Io(_) | Self::Serialize(_) => "internal error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::DuplicateUser | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Io(_) | Self::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.public_message(),
        })
    }
}
