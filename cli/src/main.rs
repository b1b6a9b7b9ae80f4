mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, list};
use reachr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);
    let color = print::initialize();

    match commands.command.unwrap_or_default() {
        Commands::Check { method } => check::check(&Config { method, color }).await,
        Commands::List => list::list(color),
    }
}
