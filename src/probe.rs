//! ICMP echo probing.
//!
//! One probe is a single echo request to a single endpoint. Every failure
//! mode (no reply, socket error, unreachable target) is folded into a
//! [`ProbeOutcome`]; once a prober exists, probing itself never errors.

use std::io;
use std::net::IpAddr;

use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError, ICMP};

/// Result of one echo attempt against one endpoint in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Reply received, with the measured round-trip time in milliseconds.
    Success(u64),
    /// The transport reported no reply within its default window.
    Timeout,
    /// Any other non-completion: socket error, unreachable, task failure.
    Failure,
}

impl ProbeOutcome {
    /// Round-trip time in milliseconds, for successful probes only.
    pub fn rtt_ms(self) -> Option<u64> {
        match self {
            Self::Success(ms) => Some(ms),
            Self::Timeout | Self::Failure => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// A source of probe outcomes.
///
/// This is the seam between the round scheduler and the network; tests
/// substitute a scripted implementation.
#[async_trait::async_trait]
pub trait Probe: Send + Sync + 'static {
    /// Issue one echo request and classify the result.
    async fn probe(&self, addr: IpAddr) -> ProbeOutcome;
}

/// ICMP echo prober backed by `surge-ping`.
///
/// Holds one client per IP family, created once at startup. No client-side
/// timeout is imposed on top of the transport's default window.
pub struct IcmpProber {
    v4: Option<Client>,
    v6: Option<Client>,
}

impl IcmpProber {
    /// Open ICMP sockets for the address families present in `addrs`.
    ///
    /// Usually requires elevated privileges or `net.ipv4.ping_group_range`
    /// covering the process.
    pub fn for_targets(addrs: &[IpAddr]) -> io::Result<Self> {
        let v4 = if addrs.iter().any(|a| a.is_ipv4()) {
            Some(Client::new(&Config::default())?)
        } else {
            None
        };
        let v6 = if addrs.iter().any(|a| a.is_ipv6()) {
            Some(Client::new(&Config::builder().kind(ICMP::V6).build())?)
        } else {
            None
        };
        Ok(Self { v4, v6 })
    }
}

impl std::fmt::Debug for IcmpProber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IcmpProber")
            .field("v4", &self.v4.is_some())
            .field("v6", &self.v6.is_some())
            .finish()
    }
}

#[async_trait::async_trait]
impl Probe for IcmpProber {
    async fn probe(&self, addr: IpAddr) -> ProbeOutcome {
        let client = match addr {
            IpAddr::V4(_) => self.v4.as_ref(),
            IpAddr::V6(_) => self.v6.as_ref(),
        };
        let Some(client) = client else {
            tracing::warn!(%addr, "no ICMP client for address family");
            return ProbeOutcome::Failure;
        };

        let mut pinger = client.pinger(addr, PingIdentifier(rand::random())).await;
        match pinger.ping(PingSequence(0), &[]).await {
            Ok((_, rtt)) => {
                let ms = rtt.as_millis().min(u64::MAX as u128) as u64;
                tracing::debug!(%addr, latency_ms = ms, "probe replied");
                ProbeOutcome::Success(ms)
            }
            Err(SurgeError::Timeout { .. }) => {
                tracing::debug!(%addr, "probe timed out");
                ProbeOutcome::Timeout
            }
            Err(e) => {
                tracing::debug!(%addr, error = %e, "probe failed");
                ProbeOutcome::Failure
            }
        }
    }
}

/// Resolve an endpoint identity to an IP address.
///
/// Used once at startup for every endpoint; a failure here is fatal.
pub async fn resolve_host(host: &str) -> io::Result<IpAddr> {
    // First, try to parse as an IP address directly
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    // Otherwise, resolve the hostname using tokio's DNS lookup
    let addrs = tokio::net::lookup_host(format!("{host}:0")).await?;
    addrs
        .into_iter()
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses found"))
}
