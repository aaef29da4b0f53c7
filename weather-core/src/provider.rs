use crate::{
    Config, Query, WeatherReading,
    provider::{http::ReqwestTransport, openweather::OpenWeatherProvider},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod http;
pub mod openweather;

pub use http::{HttpReply, HttpTransport, TransportError};

/// Why a provider call did not produce a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Location not found")]
    NotFound,

    #[error("Weather request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Weather request could not be sent: {0}")]
    Transport(String),

    #[error("Failed to parse weather response: {0}")]
    Decode(String),
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `query`. One outbound request per call.
    async fn current(&self, query: &Query) -> Result<WeatherReading, FetchError>;
}

/// Construct the OpenWeather provider from config, using the real HTTP client.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    provider_with_key(config.api_key(), config.endpoint())
}

fn provider_with_key(
    api_key: Option<String>,
    endpoint: String,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `weather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let provider = OpenWeatherProvider::with_transport(
        api_key,
        endpoint,
        Arc::new(ReqwestTransport::default()),
    );

    Ok(Box::new(provider))
}
