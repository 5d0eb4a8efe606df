use clap::Parser;
use tolk_config::Config;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod store;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real env vars still apply
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(store) = &cli.store {
        config.store_path = store.display().to_string();
    }

    commands::run(cli.command, &config).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
