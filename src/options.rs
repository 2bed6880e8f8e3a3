use crate::constants::{header, marker};
use crate::util::{equals_ignore_case, is_http_token};
use thiserror::Error;

/// How far a spoofed preflight response is rewritten.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpoofMode {
    /// Re-add the marker to `Access-Control-Allow-Headers` and, when the
    /// preflight header list had to be substituted, force a permissive answer.
    #[default]
    Full,
    /// Only re-add the marker to `Access-Control-Allow-Headers`.
    AllowHeadersOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    pub marker_header: String,
    pub default_request_header: String,
    pub spoof_mode: SpoofMode,
    pub spoof_status: u16,
    pub stripped_response_headers: Vec<String>,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            marker_header: marker::HEADER.into(),
            default_request_header: marker::DEFAULT_REQUEST_HEADER.into(),
            spoof_mode: SpoofMode::default(),
            spoof_status: marker::SPOOF_STATUS,
            stripped_response_headers: vec![header::LOCATION.into(), header::SET_COOKIE.into()],
        }
    }
}

impl RewriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_header(mut self, name: impl Into<String>) -> Self {
        self.marker_header = name.into();
        self
    }

    pub fn default_request_header(mut self, name: impl Into<String>) -> Self {
        self.default_request_header = name.into();
        self
    }

    pub fn spoof_mode(mut self, mode: SpoofMode) -> Self {
        self.spoof_mode = mode;
        self
    }

    pub fn spoof_status(mut self, status: u16) -> Self {
        self.spoof_status = status;
        self
    }

    pub fn stripped_response_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stripped_response_headers = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_token(&self.marker_header) {
            return Err(ValidationError::InvalidMarkerHeader(
                self.marker_header.clone(),
            ));
        }

        if !is_http_token(&self.default_request_header) {
            return Err(ValidationError::InvalidDefaultRequestHeader(
                self.default_request_header.clone(),
            ));
        }

        if equals_ignore_case(&self.marker_header, &self.default_request_header) {
            return Err(ValidationError::DefaultRequestHeaderIsMarker);
        }

        if !(100..=599).contains(&self.spoof_status) {
            return Err(ValidationError::InvalidSpoofStatus(self.spoof_status));
        }

        if let Some(name) = self
            .stripped_response_headers
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidStrippedHeader(name.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The marker header '{0}' must be a valid HTTP header name.")]
    InvalidMarkerHeader(String),
    #[error("The default request header '{0}' must be a valid HTTP header name.")]
    InvalidDefaultRequestHeader(String),
    #[error(
        "The default request header must differ from the marker header, otherwise an emptied preflight list would request the marker again."
    )]
    DefaultRequestHeaderIsMarker,
    #[error("The spoof status {0} must be between 100 and 599.")]
    InvalidSpoofStatus(u16),
    #[error("The stripped response header '{0}' must be a valid HTTP header name.")]
    InvalidStrippedHeader(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
