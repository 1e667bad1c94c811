//! RIPv2 packet codec (RFC 2453)
//!
//! Builds the full-table request and classifies received datagrams into
//! structured route entries. Everything in here is pure and stateless.
//!
//! # Module Organization
//!
//! - `header`: the 4-byte command/version header
//! - `entry`: the 20-byte route entry
//! - `encoder`: the full-table request datagram
//! - `decoder`: response classification and entry extraction

pub mod decoder;
pub mod encoder;
pub mod entry;
pub mod header;

use std::net::Ipv4Addr;

pub use decoder::{decode_response, DecodeResult};
pub use encoder::encode_full_table_request;
pub use entry::RouteEntry;
pub use header::{Command, RipHeader};

/// Well-known RIP UDP port
pub const RIP_PORT: u16 = 520;
pub const RIP_VERSION_2: u8 = 2;
/// All-RIP-routers multicast group
pub const RIP_MULTICAST: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 9);

pub const HEADER_LEN: usize = 4;
pub const ENTRY_LEN: usize = 20;
/// Size of the full-table request: header plus one entry
pub const REQUEST_LEN: usize = HEADER_LEN + ENTRY_LEN;

/// Address family of an IPv4 route entry
pub const AFI_INET: u16 = 2;
/// Wildcard address family used in a full-table request
pub const AFI_UNSPECIFIED: u16 = 0;

/// Metric meaning "unreachable"
pub const METRIC_INFINITY: u32 = 16;
