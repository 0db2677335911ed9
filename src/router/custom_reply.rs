use serde::Serialize;
use warp::{
    http::HeaderValue,
    hyper::{
        header::{HeaderName, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    reply::Response,
    Reply,
};

use crate::app_error::ServerError;

pub struct CustomReply {
    body: Vec<u8>,
    status: StatusCode,
    headers: HeaderMap,
}

impl CustomReply {
    pub fn bytes(body: Vec<u8>, content_type: &'static str) -> CustomReply {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        CustomReply {
            body,
            status: StatusCode::OK,
            headers,
        }
    }

    pub fn json<T>(value: &T) -> Result<CustomReply, ServerError>
    where
        T: Serialize,
    {
        Ok(CustomReply::bytes(
            serde_json::to_vec(value)?,
            "application/json",
        ))
    }

    pub fn html(body: &'static str) -> CustomReply {
        CustomReply::bytes(body.as_bytes().to_vec(), "text/html; charset=utf-8")
    }

    pub fn text(status: StatusCode, body: &str) -> CustomReply {
        let mut reply = CustomReply::bytes(body.as_bytes().to_vec(), "text/plain; charset=utf-8");
        reply.set_status(status);
        reply
    }

    pub fn add_header(&mut self, name: HeaderName, value: &str) -> Result<(), ServerError> {
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(())
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }
}

impl Reply for CustomReply {
    #[inline]
    fn into_response(self) -> Response {
        let mut response = Response::new(self.body.into());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
