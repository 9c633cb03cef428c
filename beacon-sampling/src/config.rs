//! Per-operation trace sampling configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered mapping from operation name to a sampling multiplier in `[0, 1]`.
///
/// Operation names are the transaction names produced by the SDK for
/// instrumented requests, for example `call POST /json/typing`. A lookup miss
/// means the operation has no override and traces at the full base rate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRateTable(BTreeMap<String, f64>);

impl SampleRateTable {
    /// Creates an empty table. Every operation samples at the base rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in overrides for the web client.
    pub fn web_defaults() -> Self {
        let mut table = Self::new();
        // The event queue is filtered out by `should_trace_request` before a
        // span is ever created, but keep the zero rate here for consistency.
        table.set("call GET /json/events", 0.0);
        // High-volume requests that add little data per trace.
        table.set("call POST /json/users/me/presence", 0.01);
        table.set("call POST /json/typing", 0.05);
        table
    }

    /// Sets the multiplier for an operation, replacing any previous value.
    pub fn set(&mut self, operation: impl Into<String>, multiplier: f64) {
        self.0.insert(operation.into(), multiplier);
    }

    /// Returns the multiplier for an operation, defaulting to `1.0`.
    pub fn multiplier(&self, operation: &str) -> f64 {
        self.0.get(operation).copied().unwrap_or(1.0)
    }

    /// Returns `true` if the table carries no overrides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The resolved inputs of the trace sampler.
///
/// The effective sample rate of an operation is the externally configured base
/// rate multiplied by the operation's table override. Both factors are valid
/// probabilities, so the product needs no further clamping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceRates {
    /// The base sampling probability applied to every traced operation.
    pub base: f64,

    /// Per-operation multipliers against the base rate.
    pub table: SampleRateTable,
}

impl TraceRates {
    /// Creates rates with the given base and the built-in override table.
    pub fn with_web_defaults(base: f64) -> Self {
        Self {
            base,
            table: SampleRateTable::web_defaults(),
        }
    }

    /// Returns the effective sampling probability for an operation.
    pub fn sample_rate(&self, operation: &str) -> f64 {
        self.base * self.table.multiplier(operation)
    }
}
