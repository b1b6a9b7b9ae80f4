//! One sequential pass over a target list.

use reachr_common::network::target::Target;
use reachr_common::probe::ProbeStatus;
use tracing::{debug, warn};

use crate::prober::Prober;

/// Counts of each status seen during a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub online: usize,
    pub offline: usize,
    pub errors: usize,
}

impl Tally {
    fn record(&mut self, status: &ProbeStatus) {
        match status {
            ProbeStatus::Online => self.online += 1,
            ProbeStatus::Offline => self.offline += 1,
            ProbeStatus::Error(_) => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.online + self.offline + self.errors
    }
}

/// Probes every target in order, one at a time.
///
/// `on_result` is called with each result as soon as its probe finishes and
/// before the next probe starts. A failed probe never stops the sweep; only
/// an error returned by `on_result` does.
pub async fn sweep<P, F>(targets: &[Target], prober: &P, mut on_result: F) -> anyhow::Result<Tally>
where
    P: Prober + ?Sized,
    F: FnMut(&Target, &ProbeStatus) -> anyhow::Result<()>,
{
    let mut tally = Tally::default();

    for target in targets {
        let location = target.location.as_deref().unwrap_or("-");
        debug!(address = %target.address, location, "probing");

        let status = ProbeStatus::from_outcome(prober.probe(&target.address).await);
        if let ProbeStatus::Error(msg) = &status {
            warn!(address = %target.address, location, "probe failed: {msg}");
        }

        tally.record(&status);
        on_result(target, &status)?;
    }

    debug!(
        online = tally.online,
        offline = tally.offline,
        errors = tally.errors,
        "sweep finished"
    );
    Ok(tally)
}
