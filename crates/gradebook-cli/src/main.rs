mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

/// The binary target is `gradebook`, so its own events log under that name
const DEFAULT_LOG_FILTER: &str =
    "gradebook=info,gradebook_core=info,gradebook_web=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info for our crates unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = cli_utils::load_config(&args.config, args.data_file);

    match args.command {
        Command::Serve { bind } => commands::serve::run(&config, bind.as_deref()).await,
        Command::Init => commands::init::run(&config),
        Command::AddStudent { username, password } => {
            commands::add_student::run(&config, &username, &password)
        }
        Command::List { json } => commands::list::run(&config, json),
        Command::Grade { scores, json } => commands::grade::run(&scores, json),
    }
}
