use anyhow::Context;
use cadence_config::Config;
use clap::Parser;

mod batch;
mod cli;
mod commands;
mod io;
mod logging;
mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::new(),
    };
    if let Some(path) = &cli.baseline {
        config.baseline_path = Some(path.clone());
    }

    logging::init(&config.log);

    let language = cli
        .language
        .clone()
        .unwrap_or_else(|| config.language.clone());
    let state = AppState::new(config)?;

    let output = commands::run(cli.command, &state, &language).await?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}
