#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Inspect KTX2 transcode target selection and output layouts
struct TopLevel {
    /// log format decisions and layout walks at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Select(commands::select::SelectCmd),
    Plan(commands::plan::PlanCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    // Only initialize logging if verbose or RUST_LOG is set
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        let default_level = if cli.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Select(cmd) => {
            commands::select::handle_select_command(cmd)?;
        }
        Commands::Plan(cmd) => {
            commands::plan::handle_plan_command(cmd)?;
        }
    }

    Ok(())
}
