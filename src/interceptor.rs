use crate::annotations::Annotations;
use crate::capability::Capability;
use crate::exchange::{ExchangeArena, ExchangeContext, ExchangeId};
use crate::message::{HttpRequest, HttpResponse};
use crate::options::{RewriteOptions, ValidationError};
use crate::request_rewriter::RequestRewriter;
use crate::response_rewriter::ResponseRewriter;
use crate::result::Forward;
use indexmap::IndexMap;
use tracing::warn;

/// Drives both rewriters for a proxy that reports requests and responses as
/// separate callbacks.
///
/// Each request opens an exchange; its response is matched back by the
/// returned [`ExchangeId`]. Callers needing concurrent access wrap the
/// interceptor in their own lock.
pub struct Interceptor<C> {
    request_rewriter: RequestRewriter,
    response_rewriter: ResponseRewriter,
    capability: C,
    exchanges: ExchangeArena,
    forwarded: IndexMap<ExchangeId, HttpRequest>,
}

impl<C: Capability> Interceptor<C> {
    pub fn new(options: RewriteOptions, capability: C) -> Result<Self, ValidationError> {
        Ok(Self {
            request_rewriter: RequestRewriter::new(options.clone())?,
            response_rewriter: ResponseRewriter::new(options)?,
            capability,
            exchanges: ExchangeArena::new(),
            forwarded: IndexMap::new(),
        })
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn on_request(&mut self, request: HttpRequest) -> (ExchangeId, Forward<HttpRequest>) {
        let id = self.exchanges.begin();
        let enabled = self.capability.is_enabled();
        let forward = match self.exchanges.get_mut(id) {
            Some(exchange) => self.request_rewriter.rewrite(request, exchange, enabled),
            None => Forward::unchanged(request),
        };
        self.forwarded.insert(id, forward.message.clone());
        (id, forward)
    }

    /// Rewrites the response of a known exchange and closes it. Responses
    /// with an unknown id are forwarded untouched.
    pub fn on_response(&mut self, id: ExchangeId, response: HttpResponse) -> Forward<HttpResponse> {
        let request = self.forwarded.shift_remove(&id);
        let (Some(exchange), Some(request)) = (self.exchanges.finish(id), request) else {
            warn!(exchange = %id, "response without a pending exchange");
            return Forward::unchanged(response);
        };

        let enabled = self.capability.is_enabled();
        self.response_rewriter
            .rewrite(response, &request, &exchange, enabled)
    }

    pub fn annotations(&self, id: ExchangeId) -> Option<&Annotations> {
        self.exchanges.get(id).map(ExchangeContext::annotations)
    }

    /// Drops an exchange whose response will never arrive.
    pub fn abandon(&mut self, id: ExchangeId) -> Option<ExchangeContext> {
        self.forwarded.shift_remove(&id);
        self.exchanges.finish(id)
    }

    /// Bounds the number of pending exchanges, oldest first.
    pub fn evict_oldest(&mut self, max: usize) -> usize {
        let evicted = self.exchanges.evict_oldest(max);
        let excess = self.forwarded.len().saturating_sub(max);
        if excess > 0 {
            self.forwarded.drain(..excess);
        }
        evicted
    }

    pub fn pending(&self) -> usize {
        self.exchanges.len()
    }
}

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;
