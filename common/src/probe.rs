use std::fmt;

use crate::error::ProbeInvocationError;
use crate::network::target::Target;

/// Classification of one probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeStatus {
    Online,
    Offline,
    /// The probe could not be run; carries the failure description.
    Error(String),
}

impl ProbeStatus {
    /// Maps the outcome of a probe to a status.
    ///
    /// `Ok(true)` means the host answered, `Ok(false)` that it did not.
    pub fn from_outcome(outcome: Result<bool, ProbeInvocationError>) -> Self {
        match outcome {
            Ok(true) => ProbeStatus::Online,
            Ok(false) => ProbeStatus::Offline,
            Err(e) => ProbeStatus::Error(e.to_string()),
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Online => f.write_str("ONLINE"),
            ProbeStatus::Offline => f.write_str("OFFLINE"),
            ProbeStatus::Error(msg) => write!(f, "ERROR: {msg}"),
        }
    }
}

/// Renders the console line for one probed target: `<address> is <STATUS>`.
pub fn status_line(target: &Target, status: &ProbeStatus) -> String {
    format!("{} is {}", target.address, status)
}
