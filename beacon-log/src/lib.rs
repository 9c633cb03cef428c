//! Logging facade for the beacon crates.
//!
//! # Setup
//!
//! Call [`init`] once during startup with a [`LogConfig`]. The configuration
//! implements `serde` traits, so it can be embedded in the bootstrap payload.
//!
//! ```
//! beacon_log::init(&beacon_log::LogConfig::default());
//! ```
//!
//! # Logging
//!
//! Beacon crates log through the re-exported macros: [`error!`], [`warn!`],
//! [`info!`], [`debug!`] and [`trace!`]. Log messages should start lowercase
//! and end without punctuation.

#![warn(missing_docs)]

mod setup;

pub use self::setup::*;

// Expose the minimal tracing facade.
#[doc(inline)]
pub use tracing::{debug, error, info, trace, warn};
