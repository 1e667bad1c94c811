//! Display sinks that print probe events as they happen

use super::formatter;
use crate::probe::{ProbeSummary, ResponseSink};
use crate::rip::DecodeResult;
use log::warn;
use serde_json::Value;
use std::io::{self, Write};
use std::net::{SocketAddr, SocketAddrV4};

/// Human-readable output, one block per datagram
pub struct TextSink<W: Write> {
    out: W,
    use_color: bool,
}

impl TextSink<io::Stdout> {
    pub fn stdout(use_color: bool) -> Self {
        Self::new(io::stdout(), use_color)
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> ResponseSink for TextSink<W> {
    fn on_request_sent(&mut self, destination: SocketAddrV4) {
        self.emit(&formatter::format_request_sent(destination));
    }

    fn on_datagram(&mut self, source: SocketAddr, result: &DecodeResult) {
        let text = formatter::format_datagram(source, result, self.use_color);
        self.emit(&text);
    }

    fn on_finished(&mut self, _summary: &ProbeSummary) {
        self.emit(formatter::format_done());
    }
}

/// Collects the run and prints a single JSON document when it ends
pub struct JsonSink<W: Write> {
    out: W,
    target: String,
    destination: Option<SocketAddrV4>,
    datagrams: Vec<Value>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout(target: impl Into<String>) -> Self {
        Self::new(io::stdout(), target)
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W, target: impl Into<String>) -> Self {
        Self {
            out,
            target: target.into(),
            destination: None,
            datagrams: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResponseSink for JsonSink<W> {
    fn on_request_sent(&mut self, destination: SocketAddrV4) {
        self.destination = Some(destination);
    }

    fn on_datagram(&mut self, source: SocketAddr, result: &DecodeResult) {
        match formatter::datagram_json(source, result) {
            Ok(value) => self.datagrams.push(value),
            Err(e) => warn!("Failed to serialize datagram from {}: {}", source, e),
        }
    }

    fn on_finished(&mut self, summary: &ProbeSummary) {
        let report = formatter::format_json_report(
            &self.target,
            self.destination,
            &self.datagrams,
            summary,
        );
        let written = match report {
            Ok(json) => writeln!(self.out, "{}", json).and_then(|_| self.out.flush()),
            Err(e) => {
                warn!("Failed to serialize report: {}", e);
                return;
            }
        };
        if let Err(e) = written {
            warn!("Failed to write output: {}", e);
        }
    }
}
