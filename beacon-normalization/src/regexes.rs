use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the first run of digits bounded by a slash on the left and a slash
/// or the end of the path on the right.
///
/// Numeric segments are resource identifiers (message ids, user ids) that vary
/// per request while naming the same logical route. The trailing boundary is
/// captured so the replacement can preserve it.
pub static ROUTE_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Matches one-time-token routes: a known keyword followed by a single opaque
/// token segment and an optional trailing slash.
///
/// These tokens are high-cardinality secrets (confirmation keys, invite
/// links); the token segment must never end up in a transaction name.
pub static ONE_TIME_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(join|reactivate|new|accounts/do_confirm|accounts/confirm_new_email)/[^/]+(/?)$")
        .unwrap()
});
