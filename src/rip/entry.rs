//! RIP route entry (20 bytes)

use super::{AFI_UNSPECIFIED, ENTRY_LEN, METRIC_INFINITY};
use ipnetwork::Ipv4Network;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A single route entry as carried on the wire.
///
/// Fields are passed through verbatim; a metric above 16 or a
/// non-contiguous mask is kept as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub address_family: u16,
    pub route_tag: u16,
    pub destination: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub next_hop: Ipv4Addr,
    pub metric: u32,
}

impl RouteEntry {
    /// The wildcard entry asking a neighbor for its whole table
    pub fn full_table_request() -> Self {
        Self {
            address_family: AFI_UNSPECIFIED,
            route_tag: 0,
            destination: Ipv4Addr::UNSPECIFIED,
            subnet_mask: Ipv4Addr::UNSPECIFIED,
            next_hop: Ipv4Addr::UNSPECIFIED,
            metric: METRIC_INFINITY,
        }
    }

    /// Parse entry from bytes, `None` if fewer than 20 are available
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < ENTRY_LEN {
            return None;
        }

        Some(Self {
            address_family: u16::from_be_bytes([data[0], data[1]]),
            route_tag: u16::from_be_bytes([data[2], data[3]]),
            destination: Ipv4Addr::new(data[4], data[5], data[6], data[7]),
            subnet_mask: Ipv4Addr::new(data[8], data[9], data[10], data[11]),
            next_hop: Ipv4Addr::new(data[12], data[13], data[14], data[15]),
            metric: u32::from_be_bytes([data[16], data[17], data[18], data[19]]),
        })
    }

    /// Encode entry to bytes
    pub fn to_bytes(&self) -> [u8; ENTRY_LEN] {
        let mut bytes = [0u8; ENTRY_LEN];
        bytes[0..2].copy_from_slice(&self.address_family.to_be_bytes());
        bytes[2..4].copy_from_slice(&self.route_tag.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.destination.octets());
        bytes[8..12].copy_from_slice(&self.subnet_mask.octets());
        bytes[12..16].copy_from_slice(&self.next_hop.octets());
        bytes[16..20].copy_from_slice(&self.metric.to_be_bytes());
        bytes
    }

    /// Destination in CIDR form, if the mask is contiguous
    pub fn prefix(&self) -> Option<Ipv4Network> {
        Ipv4Network::with_netmask(self.destination, self.subnet_mask).ok()
    }

    pub fn is_unreachable(&self) -> bool {
        self.metric >= METRIC_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; ENTRY_LEN] = [
        0x00, 0x02, 0x00, 0x07, // AFI 2, tag 7
        0xc0, 0xa8, 0x01, 0x00, // 192.168.1.0
        0xff, 0xff, 0xff, 0x00, // 255.255.255.0
        0xc0, 0xa8, 0x01, 0xfe, // 192.168.1.254
        0x00, 0x00, 0x00, 0x03, // metric 3
    ];

    #[test]
    fn test_from_bytes() {
        let entry = RouteEntry::from_bytes(&SAMPLE).unwrap();
        assert_eq!(entry.address_family, 2);
        assert_eq!(entry.route_tag, 7);
        assert_eq!(entry.destination, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(entry.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(entry.next_hop, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(entry.metric, 3);
        assert_eq!(entry.to_bytes(), SAMPLE);
    }

    #[test]
    fn test_from_bytes_too_short() {
        assert!(RouteEntry::from_bytes(&SAMPLE[..19]).is_none());
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let mut raw = SAMPLE;
        raw[8..12].copy_from_slice(&[0x0f, 0x00, 0xff, 0x00]);
        raw[16..20].copy_from_slice(&[0xff, 0xff, 0xff, 0xff]);

        let entry = RouteEntry::from_bytes(&raw).unwrap();
        assert_eq!(entry.metric, u32::MAX);
        assert_eq!(entry.subnet_mask, Ipv4Addr::new(15, 0, 255, 0));
        assert!(entry.prefix().is_none());
        assert!(entry.is_unreachable());
    }

    #[test]
    fn test_prefix() {
        let entry = RouteEntry::from_bytes(&SAMPLE).unwrap();
        assert_eq!(entry.prefix().unwrap().to_string(), "192.168.1.0/24");
        assert!(!entry.is_unreachable());
    }

    #[test]
    fn test_full_table_request_entry() {
        let entry = RouteEntry::full_table_request();
        assert_eq!(entry.address_family, 0);
        assert_eq!(entry.metric, 16);
        assert!(entry.is_unreachable());
    }
}
