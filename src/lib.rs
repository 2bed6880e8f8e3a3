mod annotations;
mod capability;
mod color;
pub mod constants;
mod correlation;
mod exchange;
mod header_list;
mod headers;
#[cfg(feature = "http")]
mod http_compat;
mod interceptor;
mod message;
mod options;
mod request_rewriter;
mod response_rewriter;
mod result;
mod util;

pub use annotations::Annotations;
pub use capability::{Capability, CapabilityToggle};
pub use color::{ColorError, Highlight, HighlightColor};
pub use correlation::PreflightFacts;
pub use exchange::{ExchangeArena, ExchangeContext, ExchangeId};
pub use header_list::HeaderList;
pub use headers::{Header, HeaderCollection};
#[cfg(feature = "http")]
pub use http_compat::ConversionError;
pub use interceptor::Interceptor;
pub use message::{HttpRequest, HttpResponse};
pub use options::{RewriteOptions, SpoofMode, ValidationError};
pub use request_rewriter::RequestRewriter;
pub use response_rewriter::ResponseRewriter;
pub use result::Forward;
pub use util::equals_ignore_case;
