pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const LOCATION: &str = "Location";
    pub const ORIGIN: &str = "Origin";
    pub const SET_COOKIE: &str = "Set-Cookie";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Defaults for the marker-driven rewrites.
pub mod marker {
    /// Header carrying the color tag, also the header a preflight asks permission for.
    pub const HEADER: &str = "X-Pwnfox-Color";
    /// Token injected into an emptied `Access-Control-Request-Headers` list.
    pub const DEFAULT_REQUEST_HEADER: &str = super::header::CONTENT_TYPE;
    pub const SPOOF_STATUS: u16 = 200;
    pub const ALLOW_CREDENTIALS: &str = "true";
    pub const WILDCARD: &str = "*";
}

pub const LIST_JOINER: &str = ", ";
