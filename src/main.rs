//! Sends "Hello World!" through a simulated preparation circuit and prints
//! what comes back.

use qubit_message::{HELLO_WORLD, Simulator, transmit};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match transmit(&Simulator::new(), HELLO_WORLD) {
        Ok(decoded) => {
            println!("{}", decoded);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("transmission failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
