//! The abstraction over reachability checks.
//!
//! A [`Prober`] answers one question for one address: did the host respond?
//! Concrete strategies live in the submodules ([`ping`] shells out to the
//! system utility, [`tcp`] attempts connections to well-known ports).
//!
//! Callers such as the [`sweep`](crate::sweep) should depend on the trait and
//! not on a concrete strategy, so the probing technique can be chosen at
//! startup.

use async_trait::async_trait;
use reachr_common::config::ProbeMethod;
use reachr_common::error::ProbeInvocationError;

pub mod ping;
pub mod tcp;

pub use ping::PingProber;
pub use tcp::TcpProber;

use crate::flag::EchoCountFlag;

#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes `address` exactly once.
    ///
    /// Returns `Ok(true)` when the host answered and `Ok(false)` when it did
    /// not. An `Err` means the probe itself could not be carried out.
    async fn probe(&self, address: &str) -> Result<bool, ProbeInvocationError>;
}

/// Builds the prober for `method`.
///
/// The echo-count flag is resolved here once and reused for every address.
pub fn for_method(method: ProbeMethod) -> Box<dyn Prober> {
    match method {
        ProbeMethod::Ping => Box::new(PingProber::new(EchoCountFlag::host())),
        ProbeMethod::Tcp => Box::new(TcpProber::default()),
    }
}
