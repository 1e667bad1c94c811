//! CLI module for rip-probe
//!
//! This module handles command line argument parsing and wires the prober to
//! the selected output sink.

use crate::config::{AppConfig, MAX_TIMEOUT_SECS};
use crate::error::Result;
use crate::output::{JsonSink, TextSink};
use crate::probe::{ProbeOptions, ProbeSummary, Prober, ResponseSink};
use crate::utils::path;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rip-probe")]
#[command(version, about = "Request and print the full routing table of a RIPv2 neighbor")]
#[command(long_about = "rip-probe sends a single RIPv2 full-table request and prints every \
    route carried by the responses received within the listen window.\n\n\
    Binding the default listen port (520) usually requires root privileges.\n\n\
    Examples:\n  \
    $ rip-probe --target 192.168.1.1\n  \
    $ rip-probe --target 224.0.0.9 --timeout 10\n  \
    $ rip-probe --target 10.0.0.1 --port 5520 --json")]
pub struct Cli {
    /// Destination IP, multicast group or hostname to send the request to
    #[arg(short, long, value_name = "ADDR")]
    pub target: String,

    /// Destination UDP port of the request
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Local UDP port to listen on for replies
    #[arg(short, long)]
    pub listen_port: Option<u16>,

    /// Seconds to wait for responses
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(0..=MAX_TIMEOUT_SECS))]
    pub timeout: Option<u64>,

    /// Output JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file to use instead of the default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Cli {
    /// Configuration file selected on the command line, tilde-expanded
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(path::expand_tilde)
    }

    /// Apply CLI options to config
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.probe.port = port;
        }
        if let Some(listen_port) = self.listen_port {
            config.probe.listen_port = listen_port;
        }
        if let Some(timeout) = self.timeout {
            config.probe.timeout_secs = timeout;
        }
        if self.json {
            config.output.json = true;
        }
        if self.no_color {
            config.output.enable_colors = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }
    }

    pub async fn run(&self, mut config: AppConfig) -> Result<ProbeSummary> {
        self.apply(&mut config);
        debug!("Effective configuration: {:?}", config);

        let prober = Prober::new(ProbeOptions::from_config(&self.target, &config.probe));

        let mut sink: Box<dyn ResponseSink> = if config.output.json {
            Box::new(JsonSink::stdout(&self.target))
        } else {
            let use_color = config.output.enable_colors && atty::is(atty::Stream::Stdout);
            Box::new(TextSink::stdout(use_color))
        };

        prober.run(sink.as_mut()).await
    }
}
