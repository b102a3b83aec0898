// src/main.rs

use anyhow::Result;
use dirsum::cli::Cli;
use dirsum::config::ConfigBuilder;
use dirsum::output::write_error;
use dirsum::run;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the report. Default to 'warn'
    // if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirsum=warn")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    log::info!("Starting dirsum v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args_os().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let cli = Cli::parse_verbatim_from(std::env::args_os());
    let result = ConfigBuilder::from_cli(cli).build().and_then(|config| {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        run(&config, &mut writer)?;
        writer.flush()?;
        Ok(())
    });

    // --- Error Handling ---
    if let Err(e) = result {
        log::debug!("Run failed: {:?}", e);
        // stdout may be the thing that failed; the exit code still reports it.
        if let Err(write_err) = write_error(&mut io::stdout(), &e) {
            log::debug!("Could not report error on stdout: {}", write_err);
        }
        std::process::exit(1);
    }

    Ok(())
}
