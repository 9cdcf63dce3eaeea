#![forbid(unsafe_code)]

//! Tracing re-exports.
//!
//! With the `tracing` feature enabled, downstream crates can write
//! `insight_core::debug!(...)` without depending on `tracing` directly.
//! Without the feature this module is empty and instrumentation compiles
//! away.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
