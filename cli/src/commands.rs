pub mod check;
pub mod list;

use clap::{Parser, Subcommand};
use reachr_common::config::ProbeMethod;

#[derive(Parser)]
#[command(name = "reachr")]
#[command(about = "Checks which of a fixed set of hosts answer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every known host once and print its status (default)
    #[command(alias = "c")]
    Check {
        /// How to probe: `ping` (ICMP via the system utility) or `tcp`
        #[arg(short, long, default_value_t = ProbeMethod::Ping)]
        method: ProbeMethod,
    },
    /// Show the known hosts and their sites
    #[command(alias = "l")]
    List,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Check {
            method: ProbeMethod::default(),
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
