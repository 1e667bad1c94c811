//! Full-table request encoding

use super::{Command, RipHeader, RouteEntry, HEADER_LEN, REQUEST_LEN, RIP_VERSION_2};

/// Build the RIPv2 request asking for the entire routing table.
///
/// Command 1, version 2, followed by a single wildcard entry
/// (AFI 0, all-zero addresses, metric 16).
pub fn encode_full_table_request() -> [u8; REQUEST_LEN] {
    let mut packet = [0u8; REQUEST_LEN];
    packet[..HEADER_LEN].copy_from_slice(&RipHeader::new(Command::Request, RIP_VERSION_2).to_bytes());
    packet[HEADER_LEN..].copy_from_slice(&RouteEntry::full_table_request().to_bytes());
    packet
}
