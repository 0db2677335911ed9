use serde::Deserialize;
use serde_json::Value;

use crate::app_error::{AppResult, ServerError};

use super::filename::SafeFilename;

/// Body as sent by the client, before any checks.
#[derive(Deserialize, Default, Debug)]
struct RawConversionRequest {
    #[serde(rename = "base64Data", default)]
    base64_data: Option<Value>,
    #[serde(default)]
    filename: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub base64_data: String,
    pub filename: SafeFilename,
}

impl ConversionRequest {
    /// Parses and validates a raw request body. Bodies that are not a JSON
    /// object are treated like an empty object.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let raw = match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => {
                serde_json::from_value::<RawConversionRequest>(value).unwrap_or_default()
            }
            _ => RawConversionRequest::default(),
        };

        let base64_data = match raw.base64_data {
            Some(Value::String(data)) if !data.is_empty() => data,
            _ => return Err(ServerError::MissingBase64Data),
        };
        let filename = match raw.filename {
            Some(Value::String(name)) => Some(name),
            _ => None,
        };

        Ok(ConversionRequest {
            base64_data,
            filename: SafeFilename::new(filename.as_deref())?,
        })
    }
}
