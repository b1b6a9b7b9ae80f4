use std::process::Stdio;

use async_trait::async_trait;
use reachr_common::error::ProbeInvocationError;
use tokio::process::Command;
use tracing::debug;

use super::Prober;
use crate::flag::EchoCountFlag;

const DEFAULT_PROGRAM: &str = "ping";

/// Sends a single ICMP echo by running the system `ping` executable.
///
/// Only the exit code is inspected: `0` means the host answered, anything else
/// (including death by signal) means it did not. No timeout is applied beyond
/// whatever the utility itself uses.
#[derive(Clone, Debug)]
pub struct PingProber {
    program: String,
    flag: EchoCountFlag,
}

impl PingProber {
    pub fn new(flag: EchoCountFlag) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            flag,
        }
    }

    /// Runs `program` instead of `ping`, with the same arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, address: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([self.flag.as_str(), "1", address])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, address: &str) -> Result<bool, ProbeInvocationError> {
        debug!(program = %self.program, flag = %self.flag, address, "spawning ping");

        let mut child = self
            .command(address)
            .spawn()
            .map_err(|source| ProbeInvocationError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let status = child
            .wait()
            .await
            .map_err(|source| ProbeInvocationError::Wait {
                program: self.program.clone(),
                source,
            })?;

        debug!(address, ?status, "ping exited");
        Ok(status.success())
    }
}
