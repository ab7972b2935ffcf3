use actix_http::StatusCode;
use actix_web::{http::header::ContentType, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid input")]
    InvalidInput,
    #[error("invalid accountNumber for the account, do not specify accountNumber")]
    IdentifierSpecified,
    #[error("invalid iban for the account")]
    MissingIban,
    #[error("invalid accountName for the account")]
    MissingName,
    #[error("invalid type for the account")]
    MissingType,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("id is required")]
    IncorrectAccountId,
    #[error("request malformed or invalid: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("request timed out")]
    Timeout,
    #[error("vault request failed: {0}")]
    Transport(String),
    #[error("http call failed with status code: {0}")]
    VaultStatus(u16),
    #[error("invalid transaction-id: '{0}'")]
    InvalidTransactionId(String),
    #[error("failed to decode vault response: {0}")]
    Decode(String),
    #[error("failed to parse config: {0}")]
    Config(String),
    #[error("general error occured: '{0}'")]
    Internal(String),
}

impl AppError {
    /// Status owned by the error itself. `None` means the caller decides.
    pub fn declared_status(&self) -> Option<StatusCode> {
        match self {
            AppError::Validation(_) | AppError::IncorrectAccountId | AppError::BadRequest(_) => {
                Some(StatusCode::BAD_REQUEST)
            }
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            AppError::MethodNotAllowed(_) => Some(StatusCode::METHOD_NOT_ALLOWED),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    data: Option<()>,
    error_message: String,
}

fn envelope(status: StatusCode, message: String) -> HttpResponse {
    let response = serde_json::to_string(&ErrorResponse {
        data: None,
        error_message: message.clone(),
    })
    .unwrap_or(message);

    HttpResponse::build(status)
        .insert_header(ContentType::json())
        .body(response)
}

/// An [`AppError`] together with the status and message a handler falls back to
/// when the error does not declare its own.
#[derive(Debug, Error)]
#[error("{message}: {error}")]
pub struct ApiError {
    pub error: AppError,
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(error: AppError, status: StatusCode, message: &str) -> Self {
        tracing::error!("{}: {}", message, error);
        ApiError {
            error,
            status,
            message: message.to_string(),
        }
    }

    pub fn internal(message: &str) -> impl Fn(AppError) -> ApiError + '_ {
        move |error| ApiError::new(error, StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.error.declared_status().unwrap_or(self.status)
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.error.declared_status() {
            Some(_) => self.error.to_string(),
            None => self.message.clone(),
        };
        envelope(self.status_code(), message)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
