#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::Parser;
use xbind_cli::args::CliArgs;
use xbind_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if XBIND_LOG or RUST_LOG is set (zero cost otherwise).
    xbind::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;
    println!("{output}");
    Ok(())
}
