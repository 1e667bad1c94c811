//! Error types for rip-probe
//!
//! Decoding a datagram never produces one of these; malformed packets are
//! classified by [`crate::rip::DecodeResult`]. Errors here cover the I/O and
//! configuration around the codec.

use std::net::SocketAddrV4;
use thiserror::Error;

/// Main error type for rip-probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Target could not be turned into an IPv4 socket address
    #[error("Cannot resolve target '{0}' to an IPv4 address")]
    Resolve(String),

    /// Local UDP socket could not be bound
    #[error("Error binding to port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Request datagram could not be sent
    #[error("Failed to send RIP request to {destination}: {source}")]
    Send {
        destination: SocketAddrV4,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// File or socket I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for rip-probe
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ProbeError::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::net::Ipv4Addr;

    #[test]
    fn test_bind_error_message() {
        let err = ProbeError::Bind {
            port: 520,
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "Error binding to port 520: permission denied");
    }

    #[test]
    fn test_send_error_names_destination() {
        let err = ProbeError::Send {
            destination: SocketAddrV4::new(Ipv4Addr::new(224, 0, 0, 9), 520),
            source: io::Error::other("unreachable"),
        };
        assert!(err.to_string().contains("224.0.0.9:520"));
    }

    #[test]
    fn test_from_io_error() {
        let err: ProbeError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, ProbeError::IoError(_)));
    }
}
