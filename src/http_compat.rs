//! Conversions to and from the `http` crate, for hyper-based proxies.

use crate::headers::HeaderCollection;
use crate::message::{HttpRequest, HttpResponse};
use http::header::HeaderMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("could not rebuild HTTP message: {0}")]
    Http(#[from] http::Error),
}

fn collect_headers(map: &HeaderMap) -> HeaderCollection {
    map.iter()
        .map(|(name, value)| {
            let value = match value.to_str() {
                Ok(text) => text.to_string(),
                Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

impl From<http::Request<Vec<u8>>> for HttpRequest {
    fn from(request: http::Request<Vec<u8>>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method.as_str().to_string(),
            target: parts.uri.to_string(),
            headers: collect_headers(&parts.headers),
            body,
        }
    }
}

impl TryFrom<HttpRequest> for http::Request<Vec<u8>> {
    type Error = ConversionError;

    fn try_from(request: HttpRequest) -> Result<Self, Self::Error> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.target.as_str());
        for header in request.headers {
            builder = builder.header(header.name, header.value);
        }
        Ok(builder.body(request.body)?)
    }
}

impl From<http::Response<Vec<u8>>> for HttpResponse {
    fn from(response: http::Response<Vec<u8>>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status.as_u16(),
            headers: collect_headers(&parts.headers),
            body,
        }
    }
}

impl TryFrom<HttpResponse> for http::Response<Vec<u8>> {
    type Error = ConversionError;

    fn try_from(response: HttpResponse) -> Result<Self, Self::Error> {
        let mut builder = http::Response::builder().status(response.status);
        for header in response.headers {
            builder = builder.header(header.name, header.value);
        }
        Ok(builder.body(response.body)?)
    }
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
