use pwnfox_rs::constants::{header, marker, method};
use pwnfox_rs::{
    ExchangeContext, ExchangeId, HttpRequest, HttpResponse, RequestRewriter, ResponseRewriter,
    RewriteOptions,
};

pub struct Rewriters {
    pub request: RequestRewriter,
    pub response: ResponseRewriter,
}

pub fn rewriters() -> Rewriters {
    rewriters_with(RewriteOptions::default())
}

pub fn rewriters_with(options: RewriteOptions) -> Rewriters {
    Rewriters {
        request: RequestRewriter::new(options.clone()).expect("valid rewrite options"),
        response: ResponseRewriter::new(options).expect("valid rewrite options"),
    }
}

pub fn exchange() -> ExchangeContext {
    ExchangeContext::new(ExchangeId::new(1))
}

pub struct RequestBuilder {
    method: String,
    target: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    color: Option<String>,
    extra: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.into(),
            target: "/api/items".into(),
            origin: None,
            request_method: None,
            request_headers: None,
            color: None,
            extra: Vec::new(),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> HttpRequest {
        let mut request = HttpRequest::new(self.method, self.target).with_header("Host", "api.test");
        if let Some(origin) = self.origin {
            request = request.with_header(header::ORIGIN, origin);
        }
        if let Some(method) = self.request_method {
            request = request.with_header(header::ACCESS_CONTROL_REQUEST_METHOD, method);
        }
        if let Some(headers) = self.request_headers {
            request = request.with_header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers);
        }
        if let Some(color) = self.color {
            request = request.with_header(marker::HEADER, color);
        }
        for (name, value) in self.extra {
            request = request.with_header(name, value);
        }
        request
    }
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub struct ResponseBuilder {
    response: HttpResponse,
}

impl ResponseBuilder {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response = self.response.with_header(name, value);
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.response = self
            .response
            .with_header(header::CONTENT_LENGTH, body.len().to_string())
            .with_body(body);
        self
    }

    pub fn build(self) -> HttpResponse {
        self.response
    }
}

pub fn response(status: u16) -> ResponseBuilder {
    ResponseBuilder {
        response: HttpResponse::new(status),
    }
}

/// Redirect to a login page with cookies, the typical answer a
/// credentialed preflight gets from an application that does not handle it.
pub fn login_redirect() -> ResponseBuilder {
    response(302)
        .header(header::LOCATION, "https://api.test/login")
        .header(header::SET_COOKIE, "session=abc; HttpOnly")
        .header(header::SET_COOKIE, "csrf=def")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, method::GET)
        .body("Found. Redirecting to /login")
}
