//! Pingmon Binary Entry Point
//!
//! Resolves the requested endpoints, opens the ICMP transport and runs the
//! monitoring loop until interrupted. Core functionality is provided by the
//! `pingmon` library crate.

use std::net::IpAddr;
use std::sync::Arc;

use clap::Parser;
use pingmon::{
    monitor::{Monitor, MonitorError},
    probe::{resolve_host, IcmpProber, Probe},
    state::Endpoint,
    DEFAULT_HISTORY,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pingmon - live ICMP reachability monitor
#[derive(Parser, Debug)]
#[command(name = "pingmon", version, about, long_about = None)]
struct Cli {
    /// Endpoints to monitor (hostnames or IP addresses)
    #[arg(required = true)]
    endpoints: Vec<String>,

    /// Number of results to keep per endpoint
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_HISTORY as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    count: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing. Quiet by default so frames stay clean; RUST_LOG
    // raises verbosity.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Fail fast: every endpoint must resolve before the loop starts.
    let mut endpoints = Vec::with_capacity(cli.endpoints.len());
    for host in &cli.endpoints {
        let addr = resolve_host(host)
            .await
            .map_err(|source| MonitorError::Resolve {
                host: host.clone(),
                source,
            })?;
        tracing::debug!(host = %host, %addr, "endpoint resolved");
        endpoints.push(Endpoint::new(host.clone(), addr));
    }

    let addrs: Vec<IpAddr> = endpoints.iter().map(|e| e.addr).collect();
    let prober: Arc<dyn Probe> =
        Arc::new(IcmpProber::for_targets(&addrs).map_err(MonitorError::Transport)?);

    let monitor = Monitor::new(prober, endpoints, cli.count as usize);

    tokio::select! {
        result = monitor.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, stopping");
        }
    }

    Ok(())
}
