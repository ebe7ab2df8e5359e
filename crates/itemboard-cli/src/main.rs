#![forbid(unsafe_code)]
//! `itemboard` binary entrypoint.

use std::process;

#[tokio::main]
async fn main() {
    let exit_code = itemboard_cli::run().await;
    process::exit(exit_code);
}
