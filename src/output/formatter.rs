//! Probe output formatter - formats probe events for display

use crate::probe::ProbeSummary;
use crate::rip::{DecodeResult, RouteEntry};
use serde_json::{json, Value};
use std::net::{SocketAddr, SocketAddrV4};

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Highlight style for a text fragment
#[derive(Debug, Clone, Copy)]
enum Highlight {
    Header,
    Warning,
    Unreachable,
}

#[cfg(feature = "colored-output")]
fn paint(text: String, highlight: Highlight, use_color: bool) -> String {
    if !use_color {
        return text;
    }

    match highlight {
        Highlight::Header => text.green().bold().to_string(),
        Highlight::Warning => text.yellow().to_string(),
        Highlight::Unreachable => text.red().to_string(),
    }
}

#[cfg(not(feature = "colored-output"))]
fn paint(text: String, _highlight: Highlight, _use_color: bool) -> String {
    text
}

pub fn format_request_sent(destination: SocketAddrV4) -> String {
    format!("Sent RIP request to {}, waiting for responses...", destination)
}

pub fn format_done() -> &'static str {
    "Done."
}

/// Format one route entry; `index` is 1-based
pub fn format_entry(index: usize, entry: &RouteEntry, use_color: bool) -> String {
    let metric = format!("Metric={}", entry.metric);
    let metric = if entry.is_unreachable() {
        paint(metric, Highlight::Unreachable, use_color)
    } else {
        metric
    };

    format!(
        "  Entry {}: AFI={}, Tag={}, Dest={}, Mask={}, NextHop={}, {}",
        index,
        entry.address_family,
        entry.route_tag,
        entry.destination,
        entry.subnet_mask,
        entry.next_hop,
        metric
    )
}

/// Format a decoded datagram as one or more lines, without trailing newline
pub fn format_datagram(source: SocketAddr, result: &DecodeResult, use_color: bool) -> String {
    match result {
        DecodeResult::TooShort => paint(
            format!("Received too-short packet from {}", source),
            Highlight::Warning,
            use_color,
        ),
        DecodeResult::NotAResponse { command } => paint(
            format!("Ignoring non-response packet (cmd={}) from {}", command, source),
            Highlight::Warning,
            use_color,
        ),
        DecodeResult::Parsed { version, entries } => {
            let mut lines = vec![paint(
                format!("RIP v{} response from {}:", version, source),
                Highlight::Header,
                use_color,
            )];
            lines.extend(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| format_entry(i + 1, entry, use_color)),
            );
            lines.join("\n")
        }
    }
}

fn entry_json(index: usize, entry: &RouteEntry) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(entry)?;
    value["index"] = json!(index);
    value["prefix"] = json!(entry.prefix().map(|p| p.to_string()));
    value["unreachable"] = json!(entry.is_unreachable());
    Ok(value)
}

/// Convert a decoded datagram to a JSON object
pub fn datagram_json(source: SocketAddr, result: &DecodeResult) -> Result<Value, serde_json::Error> {
    let value = match result {
        DecodeResult::TooShort => json!({
            "source": source.to_string(),
            "outcome": "too_short",
        }),
        DecodeResult::NotAResponse { command } => json!({
            "source": source.to_string(),
            "outcome": "not_a_response",
            "command": command,
        }),
        DecodeResult::Parsed { version, entries } => {
            let entries = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| entry_json(i + 1, entry))
                .collect::<Result<Vec<_>, _>>()?;
            json!({
                "source": source.to_string(),
                "outcome": "response",
                "version": version,
                "entries": entries,
            })
        }
    };
    Ok(value)
}

/// Format the whole probe run as a JSON document
pub fn format_json_report(
    target: &str,
    destination: Option<SocketAddrV4>,
    datagrams: &[Value],
    summary: &ProbeSummary,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "target": target,
        "destination": destination.map(|d| d.to_string()),
        "datagrams": datagrams,
        "summary": summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn source() -> SocketAddr {
        "10.0.0.1:520".parse().unwrap()
    }

    fn sample_entry(metric: u32) -> RouteEntry {
        RouteEntry {
            address_family: 2,
            route_tag: 0,
            destination: Ipv4Addr::new(10, 0, 0, 0),
            subnet_mask: Ipv4Addr::new(255, 0, 0, 0),
            next_hop: Ipv4Addr::new(10, 0, 0, 1),
            metric,
        }
    }

    #[test]
    fn test_format_entry_plain() {
        assert_eq!(
            format_entry(1, &sample_entry(1), false),
            "  Entry 1: AFI=2, Tag=0, Dest=10.0.0.0, Mask=255.0.0.0, NextHop=10.0.0.1, Metric=1"
        );
    }

    #[test]
    fn test_format_response() {
        let result = DecodeResult::Parsed {
            version: 2,
            entries: vec![sample_entry(1), sample_entry(16)],
        };
        let text = format_datagram(source(), &result, false);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "RIP v2 response from 10.0.0.1:520:");
        assert!(lines[1].starts_with("  Entry 1:"));
        assert!(lines[2].ends_with("Metric=16"));
    }

    #[test]
    fn test_format_rejections() {
        assert_eq!(
            format_datagram(source(), &DecodeResult::TooShort, false),
            "Received too-short packet from 10.0.0.1:520"
        );
        assert_eq!(
            format_datagram(source(), &DecodeResult::NotAResponse { command: 1 }, false),
            "Ignoring non-response packet (cmd=1) from 10.0.0.1:520"
        );
    }

    #[test]
    fn test_format_request_sent() {
        let dst = SocketAddrV4::new(Ipv4Addr::new(224, 0, 0, 9), 520);
        assert_eq!(
            format_request_sent(dst),
            "Sent RIP request to 224.0.0.9:520, waiting for responses..."
        );
    }

    #[test]
    fn test_datagram_json() {
        let result = DecodeResult::Parsed {
            version: 2,
            entries: vec![sample_entry(1)],
        };
        let value = datagram_json(source(), &result).unwrap();

        assert_eq!(value["outcome"], "response");
        assert_eq!(value["version"], 2);
        assert_eq!(value["entries"][0]["destination"], "10.0.0.0");
        assert_eq!(value["entries"][0]["prefix"], "10.0.0.0/8");
        assert_eq!(value["entries"][0]["index"], 1);
        assert_eq!(value["entries"][0]["unreachable"], false);
    }

    #[test]
    fn test_json_report() {
        let datagrams = vec![datagram_json(source(), &DecodeResult::NotAResponse { command: 1 }).unwrap()];
        let summary = ProbeSummary {
            datagrams: 1,
            responses: 0,
            rejected: 1,
            entries: 0,
        };
        let json = format_json_report("10.0.0.1", None, &datagrams, &summary).unwrap();

        assert!(json.contains("\"not_a_response\""));
        assert!(json.contains("\"rejected\": 1"));
        assert!(json.contains("\"target\": \"10.0.0.1\""));
    }
}
