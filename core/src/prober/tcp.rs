use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use reachr_common::error::ProbeInvocationError;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::Prober;

/// Ports tried in order: web, TLS, ssh, ftp.
pub const DEFAULT_PORTS: &[u16] = &[80, 443, 22, 21];

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Decides reachability with TCP connect attempts instead of ICMP.
///
/// The host counts as online as soon as one port accepts a connection. A
/// refused or timed out connection just moves on to the next port.
#[derive(Clone, Debug)]
pub struct TcpProber {
    ports: Vec<u16>,
    connect_timeout: Duration,
}

impl Default for TcpProber {
    fn default() -> Self {
        Self {
            ports: DEFAULT_PORTS.to_vec(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl TcpProber {
    pub fn with_ports(mut self, ports: Vec<u16>) -> Self {
        self.ports = ports;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    async fn port_open(&self, addr: SocketAddr) -> bool {
        match timeout(self.connect_timeout, TcpStream::connect(addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(%addr, error = %e, "connect failed");
                false
            }
            Err(_elapsed) => {
                debug!(%addr, "connect timed out");
                false
            }
        }
    }
}

async fn resolve_host(host: &str) -> Result<IpAddr, io::Error> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs = tokio::net::lookup_host(format!("{host}:0")).await?;
    addrs
        .into_iter()
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses found"))
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, address: &str) -> Result<bool, ProbeInvocationError> {
        let ip = resolve_host(address)
            .await
            .map_err(|source| ProbeInvocationError::Resolve {
                address: address.to_string(),
                source,
            })?;

        for &port in &self.ports {
            if self.port_open(SocketAddr::new(ip, port)).await {
                debug!(address, port, "port accepted connection");
                return Ok(true);
            }
        }
        Ok(false)
    }
}
