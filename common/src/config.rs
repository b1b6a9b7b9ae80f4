use std::fmt;
use std::str::FromStr;

/// Run configuration assembled by the binary from its command line.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// How each address is probed.
    pub method: ProbeMethod,
    /// Colour the status word on the console.
    ///
    /// Only affects presentation, the text of a status line is the same either way.
    pub color: bool,
}

/// The technique used to decide whether an address is reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeMethod {
    /// One ICMP echo through the system `ping` executable.
    #[default]
    Ping,
    /// TCP connect attempts against a handful of well-known ports.
    ///
    /// For hosts where ICMP is filtered or `ping` is not permitted.
    Tcp,
}

impl FromStr for ProbeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ping" | "icmp" => Ok(ProbeMethod::Ping),
            "tcp" => Ok(ProbeMethod::Tcp),
            _ => Err(format!("invalid probe method: {s} (expected `ping` or `tcp`)")),
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMethod::Ping => f.write_str("ping"),
            ProbeMethod::Tcp => f.write_str("tcp"),
        }
    }
}
