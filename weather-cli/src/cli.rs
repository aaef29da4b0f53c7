use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text, required};
use tracing::debug;
use weather_core::{
    Config, LookupOutcome, Query, QueryError, WeatherLookup,
    provider::openweather::DEFAULT_ENDPOINT, provider_from_config, render,
};

use crate::terminal::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather by city name")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally a custom endpoint).
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Paris,FR".
        city: String,

        /// Print the reading as JSON instead of a text panel.
        #[arg(long)]
        json: bool,
    },

    /// Look up cities one after another until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => {
                show(&city, json, build_lookup, io::stdout(), io::stderr()).await
            }
            Command::Interactive => interactive(&build_lookup()?).await,
        }
    }
}

fn build_lookup() -> anyhow::Result<WeatherLookup> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    debug!(endpoint = %config.endpoint(), "weather provider ready");

    Ok(WeatherLookup::new(provider))
}

/// Config is only read once the city is known to be non-blank.
async fn show(
    city: &str,
    json: bool,
    build: impl FnOnce() -> anyhow::Result<WeatherLookup>,
    out: impl Write,
    mut err: impl Write,
) -> anyhow::Result<()> {
    let query = match Query::parse(city) {
        Ok(query) => query,
        Err(QueryError::Empty) => {
            writeln!(err, "Please enter a city name.")?;
            return Ok(());
        }
    };

    let outcome = build()?.lookup(&query).await;
    present(&outcome, json, out)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(required!("An API key is required"))
        .prompt()
        .context("Failed to read API key")?;

    let current_endpoint = config.endpoint();
    let endpoint = Text::new("Endpoint:")
        .with_default(&current_endpoint)
        .prompt()
        .context("Failed to read endpoint")?;

    config.set_api_key(api_key);
    config.endpoint =
        Some(endpoint.trim().to_string()).filter(|e| !e.is_empty() && e != DEFAULT_ENDPOINT);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(lookup: &WeatherLookup) -> anyhow::Result<()> {
    println!("Type a city and press Enter. Esc to quit.");

    loop {
        let input = match Text::new("City:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        // Blank input goes straight back to the prompt.
        let Ok(outcome) = lookup.search(&input).await else {
            continue;
        };

        present(&outcome, false, io::stdout().lock())?;
    }

    Ok(())
}

fn present(outcome: &LookupOutcome, json: bool, mut out: impl Write) -> anyhow::Result<()> {
    if let (true, LookupOutcome::Found(reading)) = (json, outcome) {
        serde_json::to_writer_pretty(&mut out, reading).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    let mut surface = TerminalSurface::new(out);
    render(outcome, &mut surface);
    surface.present()?;

    Ok(())
}
