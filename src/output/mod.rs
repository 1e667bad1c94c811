//! Output module
//!
//! Turns probe events into text or JSON on stdout.

pub mod formatter;
pub mod sink;

pub use sink::{JsonSink, TextSink};
