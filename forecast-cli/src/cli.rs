use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use forecast_core::{Config, FetchState, StateController, WeatherApiClient};
use inquire::{Confirm, Password, PasswordDisplayMode};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "3-day weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Fetch and show the forecast.
    Show {
        /// Exit with an error instead of offering to retry.
        #[arg(long)]
        no_retry: bool,
    },

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { no_retry } => show(no_retry).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(no_retry: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = Arc::new(WeatherApiClient::from_config(&config)?);
    let mapper = config.mapper()?;
    debug!(url = %source.url(), locale = %config.locale, "starting controller");

    eprintln!("{}", render::loading());
    let controller = StateController::new(source, mapper);
    let mut states = controller.subscribe();

    loop {
        let state = states
            .wait_for(|s| !s.is_loading())
            .await
            .context("Forecast controller stopped")?
            .clone();

        match state {
            FetchState::Success(snapshot) => {
                print!("{}", render::SnapshotView(&snapshot));
                return Ok(());
            }
            FetchState::Error(message) => {
                eprintln!("{}", render::error(&message));

                if no_retry || !ask_retry()? {
                    bail!("Failed to load forecast: {message}");
                }

                eprintln!("{}", render::loading());
                controller.refresh();
            }
            FetchState::Loading => unreachable!("wait_for skips Loading"),
        }
    }
}

fn ask_retry() -> anyhow::Result<bool> {
    Confirm::new("Retry?")
        .with_default(true)
        .prompt()
        .context("Failed to read answer")
}
