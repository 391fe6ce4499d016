use anyhow::{Context, Result};
use clap::Parser;
use imgcull::Config;
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::parse();
    log::info!("▶ Scanning for duplicates in: {}", config.folder.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    imgcull::run(&config, &mut out)
        .with_context(|| format!("Failed to cull {}", config.folder.display()))?;
    out.flush()?;

    Ok(())
}
