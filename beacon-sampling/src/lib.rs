//! Sampling decisions for performance tracing in the web client.
//!
//! Tracing every instrumented request would overwhelm both the network and
//! the telemetry quota, so sampling happens in two stages:
//!
//! - [`should_trace_request`] decides whether a span is created for a request
//!   at all. Only the long-polling event queue is excluded, because a span
//!   per longpoll would dominate trace volume while carrying no information.
//! - [`SampleRateTable`] scales the configured base trace rate per operation.
//!   High-volume, low-value operations such as presence pings carry a small
//!   multiplier; everything else traces at the full base rate.
//!
//! Both stages are pure functions over immutable inputs and can be called
//! from any number of hooks concurrently.

#![warn(missing_docs)]

mod config;
mod request;

pub use self::config::*;
pub use self::request::*;
