use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rndscene::cli::ScatterCli;
use rndscene::scatter;

fn main() -> Result<()> {
    let _cli = ScatterCli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut rng = rand::thread_rng();

    scatter::emit(&mut rng, &mut out).context("failed to write scene fragment to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
