mod cli;
mod server;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Parse CLI, load config, initialize logging, and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("vdm error: {:#}", err);
        std::process::exit(1);
    }
}
