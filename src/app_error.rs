use thiserror::Error;
use warp::http::header::InvalidHeaderValue;
use warp::hyper::StatusCode;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing or invalid 'base64Data' in request body.")]
    MissingBase64Data,
    #[error("Invalid 'filename' in request body.")]
    InvalidFilename { filename: String },
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("Could not read request body")]
    BodyReadError(#[source] warp::Error),
    #[error("Invalid Base64 string")]
    InvalidBase64(#[from] base64_simd::Error),
    #[error("IO Operation failed")]
    IoError(#[from] std::io::Error),
    #[error("Could not serialize json")]
    JSONError(#[from] serde_json::Error),
    #[error("Invalid header value")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error("Invalid value {value:?} for {name}")]
    InvalidConfig { name: &'static str, value: String },
    #[error("Could not bind server")]
    BindError(#[from] warp::Error),
    #[error("Could not install trace pipeline")]
    TraceError(#[from] opentelemetry::trace::TraceError),
    #[error("Could not install global subscriber")]
    SubscriberError(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type AppResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingBase64Data | ServerError::InvalidFilename { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-supplied value that caused a validation error, for logging.
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            ServerError::InvalidFilename { filename } => Some(filename.as_str()),
            _ => None,
        }
    }

    /// Whether the message may be shown to the client as-is.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
