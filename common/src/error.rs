use std::io;

use thiserror::Error;

/// Failure to carry out a probe at all.
///
/// An unreachable host is not an error; these variants cover the cases where
/// no answer could be obtained because the probe itself never ran.
#[derive(Error, Debug)]
pub enum ProbeInvocationError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve {address}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: io::Error,
    },
}
