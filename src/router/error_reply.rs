use serde::{self, Serialize};
use warp::hyper::StatusCode;

use crate::app_error::ServerError;

use super::custom_reply::CustomReply;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Clone, Debug, Serialize)]
pub struct ErrorReply {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ErrorReply {
    pub fn new(status: StatusCode, error: String) -> Self {
        ErrorReply { status, error }
    }

    pub fn as_reply(&self) -> CustomReply {
        match CustomReply::json(self) {
            Ok(mut reply) => {
                reply.set_status(self.status);
                reply
            }
            Err(err) => {
                tracing::error!(error = ?err, "Could not serialize error reply");
                CustomReply::text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<ServerError> for ErrorReply {
    fn from(err: ServerError) -> Self {
        if err.is_client_error() {
            match err.rejected_value() {
                Some(value) => tracing::info!(error = %err, rejected = value, "Rejected request"),
                None => tracing::info!(error = %err, "Rejected request"),
            }
            ErrorReply::new(err.status_code(), format!("{}", err))
        } else {
            tracing::error!(error = ?err, "Request failed");
            ErrorReply::new(err.status_code(), String::from(INTERNAL_ERROR_MESSAGE))
        }
    }
}
