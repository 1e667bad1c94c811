//! UDP transport for a single full-table probe
//!
//! Sends one request, then hands every datagram received before the deadline
//! to a [`ResponseSink`]. The local socket listens on the RIP port by default,
//! independent of the destination port the request is sent to.

pub mod sink;

pub use sink::{ProbeSummary, ResponseSink};

use crate::config::{ProbeConfig, MAX_TIMEOUT_SECS};
use crate::error::{ProbeError, Result};
use crate::rip::{decode_response, encode_full_table_request, HEADER_LEN};
use log::{debug, info, warn};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;

/// Everything needed for one probe run
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// IPv4 literal, multicast group or hostname
    pub target: String,
    /// Destination UDP port of the request
    pub port: u16,
    pub listen_address: Ipv4Addr,
    pub listen_port: u16,
    /// Length of the listen window after the request is sent
    pub timeout: Duration,
    /// Receive buffer; longer datagrams are truncated by the socket
    pub buffer_size: usize,
}

impl ProbeOptions {
    pub fn from_config(target: impl Into<String>, config: &ProbeConfig) -> Self {
        Self {
            target: target.into(),
            port: config.port,
            listen_address: config.listen_address,
            listen_port: config.listen_port,
            timeout: Duration::from_secs(config.timeout_secs),
            buffer_size: config.buffer_size.max(HEADER_LEN),
        }
    }
}

/// One-shot RIP prober
pub struct Prober {
    options: ProbeOptions,
}

impl Prober {
    pub fn new(options: ProbeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    /// Send the request and collect replies until the listen window closes.
    ///
    /// Decode outcomes never abort the run; only an oversized listen window,
    /// resolving, binding and sending can fail.
    pub async fn run(&self, sink: &mut dyn ResponseSink) -> Result<ProbeSummary> {
        let window = self.listen_window()?;
        let destination = self.resolve_destination().await?;
        let socket = self.bind(destination).await?;

        let request = encode_full_table_request();
        socket
            .send_to(&request, destination)
            .await
            .map_err(|source| ProbeError::Send { destination, source })?;
        info!("Sent {}-byte RIP request to {}", request.len(), destination);
        sink.on_request_sent(destination);

        let deadline = Instant::now() + window;
        let mut buf = vec![0u8; self.options.buffer_size];
        let mut summary = ProbeSummary::default();

        loop {
            match tokio::time::timeout_at(deadline, socket.recv_from(&mut buf)).await {
                Ok(Ok((len, source))) => {
                    debug!("Received {} bytes from {}", len, source);
                    let result = decode_response(&buf[..len]);
                    summary.record(&result);
                    sink.on_datagram(source, &result);
                }
                Ok(Err(e)) => {
                    warn!("Receive failed, closing listen window early: {}", e);
                    break;
                }
                Err(_) => {
                    debug!("Listen window of {:?} elapsed", window);
                    break;
                }
            }
        }

        info!(
            "Probe finished: {} datagrams, {} responses, {} entries",
            summary.datagrams, summary.responses, summary.entries
        );
        sink.on_finished(&summary);
        Ok(summary)
    }

    /// Listen window, at most `MAX_TIMEOUT_SECS` long
    fn listen_window(&self) -> Result<Duration> {
        let max = Duration::from_secs(MAX_TIMEOUT_SECS);
        if self.options.timeout > max {
            return Err(ProbeError::config(format!(
                "listen timeout of {}s exceeds the {}s maximum",
                self.options.timeout.as_secs(),
                MAX_TIMEOUT_SECS
            )));
        }
        Ok(self.options.timeout)
    }

    /// Resolve the target to an IPv4 socket address on the destination port
    async fn resolve_destination(&self) -> Result<SocketAddrV4> {
        let target = self.options.target.trim();
        if let Ok(ip) = target.parse::<Ipv4Addr>() {
            return Ok(SocketAddrV4::new(ip, self.options.port));
        }

        let addrs = tokio::net::lookup_host((target, self.options.port))
            .await
            .map_err(|e| {
                debug!("Lookup of {} failed: {}", target, e);
                ProbeError::Resolve(target.to_string())
            })?;

        addrs
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(v4),
                SocketAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| ProbeError::Resolve(target.to_string()))
    }

    async fn bind(&self, destination: SocketAddrV4) -> Result<UdpSocket> {
        let local = SocketAddrV4::new(self.options.listen_address, self.options.listen_port);
        let socket = UdpSocket::bind(local).await.map_err(|source| ProbeError::Bind {
            port: self.options.listen_port,
            source,
        })?;
        debug!("Listening on {}", socket.local_addr()?);

        let ip = destination.ip();
        if ip.is_multicast() {
            socket.set_multicast_ttl_v4(1)?;
        } else if ip.is_broadcast() {
            socket.set_broadcast(true)?;
        }

        Ok(socket)
    }
}
