// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: input events, gesture recognition, and motion primitives.
//!
//! # Role in InSight
//! `insight-core` is the input and motion layer. It owns the canonical event
//! types the screens consume, the recognizer that turns pointer samples into
//! taps and drags, and the time-driven animations that make state changes
//! visible.
//!
//! # How it fits in the system
//! `insight-widgets` builds stateful components (the pull-up schedule panel
//! among them) on top of these types, and the `insight` application feeds
//! host input through [`gesture::GestureRecognizer`] into those components.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod semantic_event;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
