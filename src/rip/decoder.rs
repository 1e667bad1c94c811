//! Response datagram decoding
//!
//! Every input maps to exactly one [`DecodeResult`]; nothing here returns an
//! error or panics, whatever a remote device sends.

use super::{Command, RipHeader, RouteEntry, ENTRY_LEN, HEADER_LEN};

/// Classification of a received datagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    /// Fewer than 4 bytes, no header to read
    TooShort,
    /// Well-formed header whose command is not Response
    NotAResponse { command: u8 },
    /// A response and the complete entries it carries, in wire order
    Parsed {
        version: u8,
        entries: Vec<RouteEntry>,
    },
}

impl DecodeResult {
    pub fn is_response(&self) -> bool {
        matches!(self, DecodeResult::Parsed { .. })
    }

    /// Entries carried by a response, empty otherwise
    pub fn entries(&self) -> &[RouteEntry] {
        match self {
            DecodeResult::Parsed { entries, .. } => entries,
            _ => &[],
        }
    }
}

/// Decode a received datagram.
///
/// Only command 2 counts as a response; the version byte is reported but not
/// checked. The bytes after the header yield `(len - 4) / 20` entries and a
/// trailing partial entry is dropped without complaint.
pub fn decode_response(data: &[u8]) -> DecodeResult {
    let Some(header) = RipHeader::parse(data) else {
        return DecodeResult::TooShort;
    };

    if header.command != Command::Response {
        return DecodeResult::NotAResponse {
            command: header.command.into(),
        };
    }

    let entries = data[HEADER_LEN..]
        .chunks_exact(ENTRY_LEN)
        .filter_map(RouteEntry::from_bytes)
        .collect();

    DecodeResult::Parsed {
        version: header.version,
        entries,
    }
}
