//! Span filtering for instrumented network requests.

use url::Url;

/// Path of the long-polling event queue endpoint.
///
/// The event queue request stays open for the lifetime of the longpoll and
/// would dominate trace volume if spans were created for it.
pub const EVENTS_ENDPOINT: &str = "/json/events";

/// Returns `true` if a span should be created for a request to `url`.
///
/// The URL is resolved against `base` (the current page location), so both
/// relative paths and absolute URLs are matched on their path alone. Only the
/// event queue endpoint is excluded. URLs that fail to resolve are traced;
/// filtering is best-effort and must never drop an unknown request shape.
pub fn should_trace_request(url: &str, base: &Url) -> bool {
    match base.join(url) {
        Ok(resolved) => resolved.path() != EVENTS_ENDPOINT,
        Err(_) => true,
    }
}
