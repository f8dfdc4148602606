use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rndscene::cli::GridCli;
use rndscene::grid;

fn main() -> Result<()> {
    let _cli = GridCli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut rng = rand::thread_rng();

    grid::emit(&mut rng, &mut out).context("failed to write scene fragment to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
