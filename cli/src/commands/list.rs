use std::io::{self, Write};

use reachr_common::network::target::{Target, default_targets};

use crate::terminal::print;

pub fn list(color: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    write_rows(&default_targets(), &mut out, color)
}

fn write_rows<W: Write>(targets: &[Target], out: &mut W, color: bool) -> anyhow::Result<()> {
    for (idx, target) in targets.iter().enumerate() {
        writeln!(out, "{}", print::target_row(idx, target, color))?;
    }
    Ok(())
}
