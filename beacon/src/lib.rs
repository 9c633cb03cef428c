//! Client-side error and performance monitoring bootstrap.
//!
//! This crate wires the server-provided bootstrap payload into the Sentry
//! SDK, exactly once per process:
//!
//! - [`init`] resolves a [`MonitorConfig`](beacon_config::MonitorConfig) into
//!   either an active reporting client or a disabled one, depending on
//!   whether a DSN is configured. The returned [`Monitor`] is the immutable
//!   record of that decision; there is no ambient mutable state besides the
//!   SDK's own hub.
//! - [`Monitor::transaction_name`] and [`request_span_filter`] are the
//!   callbacks the host's navigation and network layers plug into the SDK's
//!   tracing integration.
//!
//! Span lifecycles, batching and upload all belong to the SDK; everything in
//! here is synchronous, I/O-free resolution of configuration.
//!
//! ```
//! let config = beacon_config::MonitorConfig::default();
//! let monitor = beacon::init(&config, None);
//! assert!(!monitor.is_reporting());
//! ```

#![warn(missing_docs)]

mod hooks;
mod options;
mod setup;

pub use self::hooks::*;
pub use self::options::*;
pub use self::setup::*;
