mod cli;
mod commands;
mod component;
mod config;
mod env;
mod error;
mod fs;
mod http;
mod installer;
mod jsonc;
mod logging;
mod output;
mod package_manager;
mod project;
mod registry;
mod rewrite;
mod tsconfig;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.global.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
