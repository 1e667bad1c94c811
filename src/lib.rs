//! rip-probe: a one-shot RIPv2 diagnostic client
//!
//! Sends a single full-table request to a target and prints every route
//! entry found in the responses received within a fixed listen window.
//! The [`rip`] module holds the packet codec; everything else is the thin
//! transport, configuration and display layer around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod rip;
pub mod utils;

// Re-export common types
pub use config::AppConfig;
pub use error::{ProbeError, Result};
pub use probe::{ProbeOptions, ProbeSummary, Prober, ResponseSink};
pub use rip::{decode_response, encode_full_table_request, DecodeResult, RouteEntry};
