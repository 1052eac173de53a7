//! Error Types
//!
//! Request failures, validation failures, and the controller error that
//! wraps both.

use thiserror::Error;

/// Failure of a request to the profile API or the geocoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network-level failure, the request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// Business error reported in an otherwise successful response
    #[error("{0}")]
    Server(String),
    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid request url: {0}")]
    Url(String),
    /// Local data cannot be sent, no request was made
    #[error("cannot send request: {0}")]
    Precondition(&'static str),
}

impl ApiError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server(message) if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16() }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side validation failure, shown next to the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please select a skill")]
    NameRequired,
    #[error("Please select a skill level")]
    LevelRequired,
    #[error("This skill is already added")]
    AlreadyExists,
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("URL is required")]
    UrlRequired,
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Error returned by collection controller operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error("invalid input: {}", join_errors(.0))]
    Invalid(Vec<FieldError>),
    #[error("no item with id {0}")]
    NotFound(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reading page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("invalid app config: {0}")]
    Invalid(String),
}
