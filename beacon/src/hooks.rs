//! Callbacks wired into the host's navigation and network layers.

use beacon_normalization::normalize_route;
use beacon_sampling::should_trace_request;
use url::Url;

use crate::setup::Monitor;

impl Monitor {
    /// Returns the transaction name for a navigation to `path`.
    ///
    /// The path is normalized into a route template so that navigations to
    /// the same logical endpoint share a transaction name. On the portico
    /// surface, names carry the `portico: ` prefix.
    pub fn transaction_name(&self, path: Option<&str>) -> String {
        let portico = match self {
            Monitor::Reporting(options) => options.is_portico(),
            Monitor::Disabled => false,
        };
        normalize_route(path, portico)
    }
}

/// Returns the span filter for instrumented requests on a page at `base`.
///
/// The filter decides whether a span is created for a request URL; only the
/// long-polling event queue is excluded.
pub fn request_span_filter(base: Url) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |url| should_trace_request(url, &base)
}

#[cfg(test)]
mod tests {
    use beacon_config::{MonitorConfig, RealmConfig};
    use similar_asserts::assert_eq;

    use crate::options::MonitorOptions;

    use super::*;

    fn reporting(realm_key: Option<&str>) -> Monitor {
        let config = MonitorConfig {
            dsn: Some(
                "https://0cc4a37e5aab4da58366266a87a95740@o1.ingest.sentry.io/42"
                    .parse()
                    .unwrap(),
            ),
            realm: RealmConfig {
                key: realm_key.map(str::to_owned),
                ..Default::default()
            },
            ..Default::default()
        };
        Monitor::Reporting(MonitorOptions::resolve(&config, None).unwrap())
    }

    #[test]
    fn test_transaction_name_in_realm() {
        let monitor = reporting(Some("acme"));
        assert_eq!(monitor.transaction_name(Some("/messages/12345")), "/messages/*");
        assert_eq!(monitor.transaction_name(None), "unknown");
    }

    #[test]
    fn test_transaction_name_on_portico() {
        let monitor = reporting(None);
        assert_eq!(
            monitor.transaction_name(Some("/accounts/do_confirm/93bfd2")),
            "portico: /accounts/do_confirm/*"
        );
    }

    #[test]
    fn test_transaction_name_disabled() {
        assert_eq!(
            Monitor::Disabled.transaction_name(Some("/users/42/edit")),
            "/users/*/edit"
        );
    }

    #[test]
    fn test_request_span_filter() {
        let filter = request_span_filter(Url::parse("https://chat.example.com/").unwrap());
        assert!(!filter("/json/events"));
        assert!(filter("/json/messages"));
    }
}
