use pwnfox_rs::{ExchangeContext, Forward, Highlight, HttpRequest, HttpResponse};

pub fn assert_untouched_request(result: &Forward<HttpRequest>, original: &HttpRequest) {
    assert!(!result.modified, "request should not be marked as modified");
    assert_eq!(&result.message, original);
}

pub fn assert_untouched_response(result: &Forward<HttpResponse>, original: &HttpResponse) {
    assert!(!result.modified, "response should not be marked as modified");
    assert_eq!(&result.message, original);
}

pub fn assert_highlight(exchange: &ExchangeContext, expected: Option<&str>) {
    assert_eq!(
        exchange.annotations().highlight().map(Highlight::as_str),
        expected
    );
}
