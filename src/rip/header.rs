//! RIP packet header

use super::HEADER_LEN;
use std::fmt;

/// RIP command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Request,
    Response,
    /// Any other value, kept for diagnostics
    Unknown(u8),
}

impl From<u8> for Command {
    fn from(value: u8) -> Self {
        match value {
            1 => Command::Request,
            2 => Command::Response,
            other => Command::Unknown(other),
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        match command {
            Command::Request => 1,
            Command::Response => 2,
            Command::Unknown(value) => value,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Request => write!(f, "Request"),
            Command::Response => write!(f, "Response"),
            Command::Unknown(value) => write!(f, "Unknown({})", value),
        }
    }
}

/// RIP header: command, version and two reserved bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RipHeader {
    pub command: Command,
    pub version: u8,
}

impl RipHeader {
    pub fn new(command: Command, version: u8) -> Self {
        Self { command, version }
    }

    /// Parse header from the start of a datagram.
    ///
    /// Returns `None` when fewer than 4 bytes are available. The version is
    /// taken as-is and the reserved bytes are ignored.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEADER_LEN {
            return None;
        }

        Some(Self {
            command: Command::from(data[0]),
            version: data[1],
        })
    }

    /// Encode header with zeroed reserved bytes
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        [self.command.into(), self.version, 0, 0]
    }
}
