use crate::annotations::Annotations;
use crate::constants::{LIST_JOINER, header, marker};
use crate::correlation::PreflightFacts;
use crate::exchange::ExchangeContext;
use crate::header_list::HeaderList;
use crate::headers::HeaderCollection;
use crate::message::{HttpRequest, HttpResponse};
use crate::options::{RewriteOptions, SpoofMode, ValidationError};
use crate::result::Forward;
use tracing::{debug, trace};

/// Response-phase half of the marker rewriting.
///
/// Acts only on exchanges whose preflight had the marker removed: the marker
/// is granted back in `Access-Control-Allow-Headers`, and when the preflight
/// list had to be substituted the whole answer is made permissive.
#[derive(Debug, Clone, Default)]
pub struct ResponseRewriter {
    options: RewriteOptions,
}

impl ResponseRewriter {
    pub fn new(options: RewriteOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn rewrite(
        &self,
        response: HttpResponse,
        request: &HttpRequest,
        exchange: &ExchangeContext,
        enabled: bool,
    ) -> Forward<HttpResponse> {
        if !enabled {
            trace!(exchange = %exchange.id(), "marker rewriting disabled");
            return Forward::unchanged(response);
        }
        let spoofed = self.apply(response, request, exchange.facts());
        if spoofed.modified {
            debug!(
                exchange = %exchange.id(),
                status = spoofed.message.status,
                "spoofed preflight response"
            );
        }
        spoofed
    }

    /// Same as [`ResponseRewriter::rewrite`], reading the request-phase facts
    /// from the notes text alone.
    pub fn rewrite_with_annotations(
        &self,
        response: HttpResponse,
        request: &HttpRequest,
        annotations: &Annotations,
        enabled: bool,
    ) -> Forward<HttpResponse> {
        if !enabled {
            return Forward::unchanged(response);
        }
        let facts = PreflightFacts::read_notes(annotations.notes(), &self.options);
        self.apply(response, request, facts)
    }

    fn apply(
        &self,
        mut response: HttpResponse,
        request: &HttpRequest,
        facts: PreflightFacts,
    ) -> Forward<HttpResponse> {
        if !facts.marker_preflight {
            return Forward::unchanged(response);
        }

        let allow_headers = self.allow_headers_value(&response.headers);

        if facts.default_substituted && self.options.spoof_mode == SpoofMode::Full {
            self.force_permissive(&mut response, request);
        }

        response
            .headers
            .set(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);

        Forward::new(response, true)
    }

    /// Marker first, then whatever the origin already allowed. No dedupe.
    fn allow_headers_value(&self, headers: &HeaderCollection) -> String {
        let mut value = self.options.marker_header.clone();
        for existing in headers.get_all(header::ACCESS_CONTROL_ALLOW_HEADERS) {
            let existing = existing.trim();
            if !existing.is_empty() {
                value.push_str(LIST_JOINER);
                value.push_str(existing);
            }
        }
        value
    }

    fn force_permissive(&self, response: &mut HttpResponse, request: &HttpRequest) {
        response.status = self.options.spoof_status;
        for name in &self.options.stripped_response_headers {
            response.headers.remove(name);
        }

        response.body.clear();
        if response.headers.contains(header::CONTENT_LENGTH) {
            response.headers.set(header::CONTENT_LENGTH, "0");
        }

        if let Some(origin) = request.header(header::ORIGIN) {
            response
                .headers
                .set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            response.headers.set(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                marker::ALLOW_CREDENTIALS,
            );
        }

        let requested = request
            .headers
            .get_all(header::ACCESS_CONTROL_REQUEST_METHOD)
            .map(str::trim)
            .find(|requested| !requested.is_empty());
        if let Some(requested) = requested {
            let existing = response
                .headers
                .get_joined(header::ACCESS_CONTROL_ALLOW_METHODS);
            let methods = merge_allowed_methods(existing.as_deref(), requested);
            response
                .headers
                .set(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }
    }
}

/// Grants `requested` on top of the methods the origin allowed. A missing,
/// empty or wildcard list collapses to the requested method alone.
fn merge_allowed_methods(existing: Option<&str>, requested: &str) -> String {
    let existing = match existing.map(str::trim) {
        Some(value) if !value.is_empty() && value != marker::WILDCARD => value,
        _ => return requested.to_string(),
    };

    let mut methods = HeaderList::parse(existing);
    if methods.contains_exact(requested) {
        return existing.to_string();
    }
    methods.push(requested);
    methods.to_header_value()
}

#[cfg(test)]
#[path = "response_rewriter_test.rs"]
mod response_rewriter_test;
