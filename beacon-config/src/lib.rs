//! Bootstrap configuration for the client monitoring integration.
//!
//! The server embeds a JSON payload into each page describing where and how
//! to report telemetry: the DSN, environment, sampling rates, the realm the
//! page belongs to and the current user's session attributes. This crate
//! parses that payload into [`MonitorConfig`] and derives the immutable
//! per-session identity ([`UserTag`]) attached to every report.
//!
//! All fields are optional with conservative defaults: a page without
//! monitoring configuration parses into a config that keeps reporting
//! disabled and samples nothing.

#![warn(missing_docs)]

mod config;
mod user;

pub use self::config::*;
pub use self::user::*;
