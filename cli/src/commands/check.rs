use std::io::{self, Write};

use reachr_common::config::Config;
use reachr_common::network::target::{Target, default_targets};
use reachr_core::prober::{self, Prober};
use reachr_core::sweep;

use crate::terminal::print;

/// Probes the built-in target list and writes one status line per target to stdout.
pub async fn check(cfg: &Config) -> anyhow::Result<()> {
    let targets = default_targets();
    let prober = prober::for_method(cfg.method);

    print::header(&format!("probing over {}", cfg.method));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&targets, prober.as_ref(), &mut out, cfg.color).await
}

/// Status lines are the only output; the tally stays in the sweep's debug log.
async fn run<P, W>(targets: &[Target], prober: &P, out: &mut W, color: bool) -> anyhow::Result<()>
where
    P: Prober + ?Sized,
    W: Write,
{
    sweep::sweep(targets, prober, |target, status| {
        writeln!(out, "{}", print::status_line(target, status, color))?;
        out.flush()?;
        Ok(())
    })
    .await?;
    Ok(())
}
