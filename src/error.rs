use reqwest::header::InvalidHeaderValue;
// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VanError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("URL parsing failed: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonDeserializationFailed(String),

    #[error("EasyVan API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session token is missing")]
    SessionTokenMissing,

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Pin is farther than {threshold_meters} m from the route")]
    OutOfGeofence { threshold_meters: u32 },

    #[error("Seat {0} is already taken")]
    SeatTaken(u8),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("SDK error: {0}")]
    SdkError(String),
}

impl VanError {
    /// Creates a `VanError` from an HTTP status code and a response body.
    ///
    /// The backend answers errors either as plain text (booking endpoints)
    /// or as `{"message": "..."}` JSON (auth endpoints); both collapse to a
    /// single message string here.
    pub(crate) fn from_response(status_code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.trim().to_string());
        let message = if message.is_empty() {
            format!("HTTP {}", status_code)
        } else {
            message
        };

        match status_code {
            401 | 403 => VanError::AuthenticationError(message),
            404 => VanError::NotFound(message),
            s if s >= 500 => VanError::InternalServerError(message),
            _ => VanError::ApiError {
                status: status_code,
                message,
            },
        }
    }
}
