//! Sink interface for probe progress and received datagrams

use crate::rip::DecodeResult;
use serde::Serialize;
use std::net::{SocketAddr, SocketAddrV4};

/// Counters for one probe run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProbeSummary {
    /// Datagrams received during the listen window
    pub datagrams: usize,
    /// Datagrams decoded as responses
    pub responses: usize,
    /// Datagrams that were too short or not a response
    pub rejected: usize,
    /// Route entries across all responses
    pub entries: usize,
}

impl ProbeSummary {
    pub fn record(&mut self, result: &DecodeResult) {
        self.datagrams += 1;
        match result {
            DecodeResult::Parsed { entries, .. } => {
                self.responses += 1;
                self.entries += entries.len();
            }
            DecodeResult::TooShort | DecodeResult::NotAResponse { .. } => self.rejected += 1,
        }
    }
}

/// Receives everything a [`super::Prober`] observes, in order
pub trait ResponseSink {
    /// The request datagram has left the socket
    fn on_request_sent(&mut self, destination: SocketAddrV4);

    /// A datagram arrived and was decoded
    fn on_datagram(&mut self, source: SocketAddr, result: &DecodeResult);

    /// The listen window closed
    fn on_finished(&mut self, summary: &ProbeSummary);
}
