use crate::color::Highlight;
use crate::constants::{header, method};
use crate::correlation::PreflightFacts;
use crate::exchange::ExchangeContext;
use crate::header_list::HeaderList;
use crate::message::HttpRequest;
use crate::options::{RewriteOptions, ValidationError};
use crate::result::Forward;
use tracing::{debug, trace};

/// Request-phase half of the marker rewriting.
///
/// Strips the marker header (tagging the exchange with its color) and hides
/// the marker from preflight `Access-Control-Request-Headers` lists,
/// recording what it did in the [`ExchangeContext`] for the response phase.
#[derive(Debug, Clone, Default)]
pub struct RequestRewriter {
    options: RewriteOptions,
}

impl RequestRewriter {
    pub fn new(options: RewriteOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn rewrite(
        &self,
        mut request: HttpRequest,
        exchange: &mut ExchangeContext,
        enabled: bool,
    ) -> Forward<HttpRequest> {
        if !enabled {
            trace!(exchange = %exchange.id(), "marker rewriting disabled");
            return Forward::unchanged(request);
        }

        let extracted = self.extract_marker(&mut request, exchange);
        let facts = self.rewrite_preflight(&mut request);

        if facts.marker_preflight {
            debug!(
                exchange = %exchange.id(),
                default_substituted = facts.default_substituted,
                "removed marker from preflight request headers"
            );
            exchange.record(facts, &self.options);
        }

        Forward::new(request, extracted || facts.marker_preflight)
    }

    fn extract_marker(&self, request: &mut HttpRequest, exchange: &mut ExchangeContext) -> bool {
        let marker = self.options.marker_header.as_str();
        if !request.headers.contains(marker) {
            return false;
        }
        let highlight = request.headers.get_all(marker).find_map(Highlight::new);

        request.headers.remove(marker);

        match highlight {
            Some(highlight) => {
                debug!(exchange = %exchange.id(), color = %highlight, "tagged exchange from marker header");
                exchange.annotations_mut().set_highlight(highlight);
            }
            None => {
                debug!(exchange = %exchange.id(), "stripped empty marker header");
            }
        }

        true
    }

    fn rewrite_preflight(&self, request: &mut HttpRequest) -> PreflightFacts {
        let mut facts = PreflightFacts::default();

        if !request.method.eq_ignore_ascii_case(method::OPTIONS) {
            return facts;
        }

        let Some(value) = request
            .headers
            .get_joined(header::ACCESS_CONTROL_REQUEST_HEADERS)
        else {
            return facts;
        };

        let mut requested = HeaderList::parse(&value);
        facts.marker_preflight = requested.remove_ignore_case(&self.options.marker_header);
        if !facts.marker_preflight {
            return facts;
        }

        if requested.is_empty() {
            requested.push(self.options.default_request_header.as_str());
            facts.default_substituted = true;
        }

        request.headers.set(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            requested.to_header_value(),
        );

        facts
    }
}

#[cfg(test)]
#[path = "request_rewriter_test.rs"]
mod request_rewriter_test;
