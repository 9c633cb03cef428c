use crate::regexes::{ONE_TIME_TOKEN_REGEX, ROUTE_ID_REGEX};

/// Sentinel returned for routes that could not be determined.
///
/// Call sites occasionally hand over an absent path (for example, navigation
/// events fired before the location is known). Those group under this bucket
/// instead of failing.
pub const UNKNOWN_ROUTE: &str = "unknown";

/// Prefix for routes served from the logged-out surface.
const PORTICO_PREFIX: &str = "portico: ";

/// Rewrites a URL path into a canonical route template for grouping.
///
/// Two substitutions run in sequence:
///
/// 1. The first run of digits bounded by slashes (or the end of the path) is
///    replaced by `*`, so `/messages/12345` and `/messages/67890` group as
///    `/messages/*`.
/// 2. On one-time-token routes such as `/join/<token>`, the opaque token
///    segment is replaced by `*`, keeping the keyword and any trailing slash.
///
/// If `portico` is set, the result is prefixed with `portico: ` after
/// normalization to keep the logged-out surface in a distinct bucket.
///
/// The function is total: `None` maps to [`UNKNOWN_ROUTE`] and any other
/// input comes back as a non-empty string. Its output is stable under
/// re-normalization, so already templated names pass through unchanged.
///
/// # Examples
///
/// ```
/// use beacon_normalization::normalize_route;
///
/// assert_eq!(normalize_route(Some("/users/42/edit"), false), "/users/*/edit");
/// assert_eq!(normalize_route(Some("/join/abc123"), true), "portico: /join/*");
/// assert_eq!(normalize_route(None, false), "unknown");
/// ```
pub fn normalize_route(path: Option<&str>, portico: bool) -> String {
    let Some(path) = path else {
        return UNKNOWN_ROUTE.to_owned();
    };

    let scrubbed = ROUTE_ID_REGEX.replace(path, "/*${1}");
    let normalized = ONE_TIME_TOKEN_REGEX.replace(&scrubbed, "/${1}/*${2}");

    if portico {
        format!("{PORTICO_PREFIX}{normalized}")
    } else {
        normalized.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    macro_rules! route_test {
        ($name:ident, $input:expr, $output:expr) => {
            #[test]
            fn $name() {
                assert_eq!(normalize_route(Some($input), false), $output);
            }
        };
    }

    route_test!(test_message_id, "/messages/12345", "/messages/*");
    route_test!(test_inner_id, "/users/42/edit", "/users/*/edit");
    route_test!(test_trailing_slash_id, "/streams/99/", "/streams/*/");
    route_test!(test_first_id_only, "/users/42/messages/7", "/users/*/messages/7");
    route_test!(test_join_token, "/join/abc123", "/join/*");
    route_test!(test_join_token_trailing_slash, "/join/abc123/", "/join/*/");
    route_test!(test_reactivate_token, "/reactivate/xyz", "/reactivate/*");
    route_test!(test_new_realm_token, "/new/some-subdomain", "/new/*");
    route_test!(test_do_confirm_token, "/accounts/do_confirm/93bfd2", "/accounts/do_confirm/*");
    route_test!(
        test_confirm_new_email_token,
        "/accounts/confirm_new_email/tok",
        "/accounts/confirm_new_email/*"
    );
    route_test!(test_plain_route_untouched, "/settings/profile", "/settings/profile");
    route_test!(test_root_untouched, "/", "/");
    route_test!(test_digits_inside_segment_untouched, "/v2beta/ping", "/v2beta/ping");
    route_test!(test_token_needs_single_segment, "/join/abc/def", "/join/abc/def");

    #[test]
    fn test_unknown_route() {
        assert_eq!(normalize_route(None, false), UNKNOWN_ROUTE);
        // The sentinel is a grouping bucket of its own, not a route; it is
        // never split by surface.
        assert_eq!(normalize_route(None, true), UNKNOWN_ROUTE);
    }

    #[test]
    fn test_portico_prefix_applied_last() {
        assert_eq!(
            normalize_route(Some("/accounts/confirm_new_email/tok"), true),
            "portico: /accounts/confirm_new_email/*"
        );
        // The prefix must not feed back into the substitutions.
        assert_eq!(normalize_route(Some("/messages/12345"), true), "portico: /messages/*");
    }

    #[test]
    fn test_numeric_token_hits_both_passes() {
        // The digit pass rewrites the token first; the token pass then leaves
        // the wildcard in place.
        assert_eq!(normalize_route(Some("/join/12345"), false), "/join/*");
    }

    #[test]
    fn test_idempotent() {
        let paths = [
            "/messages/12345",
            "/users/42/edit",
            "/join/abc123",
            "/join/abc123/",
            "/accounts/do_confirm/93bfd2",
            "/settings/profile",
            "/",
        ];

        for path in paths {
            let once = normalize_route(Some(path), false);
            let twice = normalize_route(Some(&once), false);
            assert_eq!(once, twice, "re-normalizing {path:?} changed the output");
        }
    }
}
