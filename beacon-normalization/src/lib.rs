//! Route path normalization for telemetry grouping.
//!
//! Telemetry is grouped by logical endpoint rather than by concrete resource.
//! A transaction named after the raw location pathname would fragment into one
//! bucket per message id or confirmation token; [`normalize_route`] collapses
//! those high-cardinality segments into `*` wildcards so that all requests for
//! the same logical route share a name.
//!
//! Two classes of segments are rewritten:
//!
//! - **Numeric resource ids** (`/messages/12345` becomes `/messages/*`).
//! - **One-time tokens** on a fixed set of account-lifecycle routes
//!   (`/join/<token>` becomes `/join/*`).
//!
//! Routes served from the logged-out portico surface are additionally tagged
//! with a `portico: ` prefix to keep them apart from the in-app routes.

#![warn(missing_docs)]

mod regexes;
mod routes;

pub use self::routes::*;
